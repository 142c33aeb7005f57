use serenity::all::{CommandInteraction, Context, CreateAttachment, EditInteractionResponse};

use crate::bot::command::{option_str, respond_ephemeral};
use crate::error::AppError;
use crate::state::AppState;

const IMAGE_APOLOGY: &str = "⚠️ Failed to generate image.";
const NOT_CONFIGURED: &str = "⚠️ Image generation is not configured on this bot.";
const ATTACHMENT_NAME: &str = "image.png";

/// Handles `/image`: one image-generation round-trip.
///
/// The payload is attached to the deferred response directly; nothing is
/// written to disk.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let prompt = option_str(interaction, "prompt")?;

    let Some(client) = &state.image else {
        return respond_ephemeral(ctx, interaction, NOT_CONFIGURED).await;
    };

    interaction.defer(&ctx.http).await?;

    let edit = match client.generate(prompt).await {
        Ok(bytes) => EditInteractionResponse::new()
            .new_attachment(CreateAttachment::bytes(bytes, ATTACHMENT_NAME)),
        Err(err) => {
            tracing::error!("Image generation failed: {}", err);
            EditInteractionResponse::new().content(IMAGE_APOLOGY)
        }
    };

    interaction.edit_response(&ctx.http, edit).await?;
    Ok(())
}
