use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Mentionable, Permissions,
};

use crate::bot::command::{option_int, option_user, require_permission};
use crate::bot::notify;
use crate::error::{AppError, CommandError};
use crate::service::moderation;
use crate::state::AppState;

/// Discord caps communication timeouts at 28 days.
const MAX_TIMEOUT_MINUTES: i64 = 28 * 24 * 60;

fn validate_minutes(minutes: i64) -> Result<i64, CommandError> {
    if (1..=MAX_TIMEOUT_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(CommandError::OutOfRange {
            option: "minutes",
            value: minutes,
        })
    }
}

/// Handles `/mute`: times out a member for a number of minutes.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild = interaction.guild_id.ok_or(CommandError::GuildOnly)?;
    require_permission(interaction, Permissions::MODERATE_MEMBERS)?;

    let (target, member) = option_user(interaction, "target")?;
    if member.is_none() {
        return Err(CommandError::TargetNotFound.into());
    }
    let minutes = validate_minutes(option_int(interaction, "minutes")?)?;

    interaction.defer(&ctx.http).await?;

    let content = match moderation::timeout(&ctx.http, guild, target.id, minutes).await {
        Ok(()) => format!("🔇 Muted {} for {} minutes", target.mention(), minutes),
        Err(err) => {
            tracing::error!("Timeout failed: {}", err);
            "⚠️ Failed to mute that member".to_string()
        }
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    notify::send_log(
        &ctx.http,
        state.log_channel,
        format!(
            "🔇 {} muted {} for {} minutes",
            interaction.user.name, target.name, minutes
        ),
    )
    .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the timeout length bounds.
    #[test]
    fn accepts_valid_lengths() {
        assert_eq!(validate_minutes(1).unwrap(), 1);
        assert_eq!(validate_minutes(MAX_TIMEOUT_MINUTES).unwrap(), MAX_TIMEOUT_MINUTES);
    }

    /// Tests rejection of non-positive and over-cap lengths.
    #[test]
    fn rejects_invalid_lengths() {
        assert!(validate_minutes(0).is_err());
        assert!(validate_minutes(-10).is_err());
        assert!(validate_minutes(MAX_TIMEOUT_MINUTES + 1).is_err());
    }
}
