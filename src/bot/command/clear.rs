use serenity::all::{CommandInteraction, Context, EditInteractionResponse, Permissions};

use crate::bot::command::{option_int, require_permission};
use crate::error::{AppError, CommandError};
use crate::service::moderation;

const MIN_CLEAR: i64 = 1;
const MAX_CLEAR: i64 = 100;

/// Validates the bulk-delete amount against Discord's [1, 100] window.
///
/// Runs before any delete call is attempted.
fn validate_amount(amount: i64) -> Result<u8, CommandError> {
    if (MIN_CLEAR..=MAX_CLEAR).contains(&amount) {
        Ok(amount as u8)
    } else {
        Err(CommandError::OutOfRange {
            option: "amount",
            value: amount,
        })
    }
}

/// Handles `/clear`: bulk-deletes recent messages in the channel.
pub async fn run(ctx: &Context, interaction: &CommandInteraction) -> Result<(), AppError> {
    require_permission(interaction, Permissions::MANAGE_MESSAGES)?;
    let amount = validate_amount(option_int(interaction, "amount")?)?;

    interaction.defer(&ctx.http).await?;

    let content = match moderation::clear(&ctx.http, interaction.channel_id, amount).await {
        Ok(deleted) => format!("🧹 Deleted {deleted} messages"),
        Err(err) => {
            tracing::error!("Bulk delete failed: {}", err);
            "⚠️ Failed to delete messages".to_string()
        }
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the inclusive bounds of the delete window.
    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(validate_amount(1).unwrap(), 1);
        assert_eq!(validate_amount(100).unwrap(), 100);
    }

    /// Tests rejection outside the window, before any delete call.
    #[test]
    fn rejects_out_of_range_amounts() {
        assert!(matches!(
            validate_amount(0),
            Err(CommandError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_amount(101),
            Err(CommandError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_amount(-5),
            Err(CommandError::OutOfRange { .. })
        ));
    }
}
