use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::bot::command::{respond, respond_ephemeral};
use crate::error::AppError;

const EMBED_COLOR: u32 = 0x5865f2;

const HELP_BODY: &str = "\
**/ask** → Ask the AI something
**/image** → Generate an image
**/clear** → Delete recent messages
**/kick /ban /mute** → Moderate members
**/warn /warnings** → Manage warnings
**/donate** → Support the bot
**!chat [message]** → Chat directly
Mention or DM me to talk privately.";

const DONATE_BODY: &str = "❤️ Support warden:\n\
👉 [Patreon](https://patreon.com/warden-bot)\n\
👉 [Ko-fi](https://ko-fi.com/warden-bot)";

/// Handles `/help` with an ephemeral embed listing the command surface.
pub async fn help(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    let embed = CreateEmbed::new()
        .title("📜 warden Help")
        .description(HELP_BODY)
        .colour(EMBED_COLOR);

    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Handles `/donate` with an ephemeral set of support links.
pub async fn donate(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    respond_ephemeral(ctx, interaction, DONATE_BODY).await
}

/// Handles `/ping`.
pub async fn ping(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    respond(ctx, interaction, "🏓 Pong!").await
}
