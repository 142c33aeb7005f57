use serenity::all::{CommandInteraction, Context, EditInteractionResponse};

use crate::bot::command::option_str;
use crate::bot::notify;
use crate::error::AppError;
use crate::state::AppState;
use crate::util::text;

/// Fallback reply when the completion endpoint is unavailable.
const ASK_APOLOGY: &str = "⚠️ Something went wrong talking to the AI.";

/// Handles `/ask`: one completion round-trip over the stored context.
///
/// Defers first since the completion call can outlive the interaction
/// response window, then edits the deferred response with either the reply
/// or the fixed apology. The apology path still counts as the interaction's
/// single response.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let question = option_str(interaction, "question")?;

    interaction.defer(&ctx.http).await?;

    let content = match state.chat.reply(interaction.user.id, question).await {
        Ok(reply) => text::truncate_reply(&reply),
        Err(err) => {
            tracing::error!("Chat completion failed for /ask: {}", err);
            ASK_APOLOGY.to_string()
        }
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    notify::send_log(
        &ctx.http,
        state.log_channel,
        format!("💬 {} used /ask: {}", interaction.user.name, question),
    )
    .await;

    Ok(())
}
