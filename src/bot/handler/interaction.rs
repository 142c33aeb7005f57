use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::bot::command;
use crate::error::{AppError, CommandError};
use crate::state::AppState;

/// Fallback error text when a handler fails for a non-command reason.
const GENERIC_FAILURE: &str = "⚠️ Something went wrong handling that command.";

/// Routes a command interaction to exactly one handler.
///
/// Every interaction receives exactly one user-visible response: handlers
/// either respond themselves or return an error that is converted into a
/// uniform ephemeral error response here. A failing handler never takes
/// down the event loop.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(interaction) = interaction else {
        return;
    };

    let result = match interaction.data.name.as_str() {
        "ask" => command::ask::run(state, &ctx, &interaction).await,
        "help" => command::info::help(&ctx, &interaction).await,
        "donate" => command::info::donate(&ctx, &interaction).await,
        "ping" => command::info::ping(&ctx, &interaction).await,
        "image" => command::image::run(state, &ctx, &interaction).await,
        "clear" => command::clear::run(&ctx, &interaction).await,
        "kick" => command::kick::run(state, &ctx, &interaction).await,
        "ban" => command::ban::run(state, &ctx, &interaction).await,
        "mute" => command::mute::run(state, &ctx, &interaction).await,
        "warn" => command::warn::run(state, &ctx, &interaction).await,
        "warnings" => command::warn::list(state, &ctx, &interaction).await,
        other => Err(CommandError::Unknown(other.to_string()).into()),
    };

    if let Err(err) = result {
        respond_with_error(&ctx, &interaction, err).await;
    }
}

/// Converts a handler error into a single ephemeral response.
///
/// Command rejections use their own user-facing message; anything else gets
/// generic text with the detail kept in the logs. If the interaction was
/// already acknowledged, the response goes out as a follow-up instead.
async fn respond_with_error(ctx: &Context, interaction: &CommandInteraction, err: AppError) {
    let content = match &err {
        AppError::Command(rejection) => rejection.user_message(),
        _ => {
            tracing::error!("Command '{}' failed: {}", interaction.data.name, err);
            GENERIC_FAILURE.to_string()
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&content)
            .ephemeral(true),
    );

    if interaction.create_response(&ctx.http, response).await.is_err() {
        let followup = CreateInteractionResponseFollowup::new()
            .content(&content)
            .ephemeral(true);
        if let Err(err) = interaction.create_followup(&ctx.http, followup).await {
            tracing::error!("Failed to deliver error response: {}", err);
        }
    }
}
