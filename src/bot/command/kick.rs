use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Mentionable, Permissions,
};

use crate::bot::command::{option_str_opt, option_user, require_permission, DEFAULT_REASON};
use crate::bot::notify;
use crate::error::{AppError, CommandError};
use crate::service::moderation;
use crate::state::AppState;

/// Handles `/kick`: removes a member from the guild.
///
/// Permission and target-membership checks run against the interaction
/// payload before the deferred platform call.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild = interaction.guild_id.ok_or(CommandError::GuildOnly)?;
    require_permission(interaction, Permissions::KICK_MEMBERS)?;

    let (target, member) = option_user(interaction, "target")?;
    if member.is_none() {
        return Err(CommandError::TargetNotFound.into());
    }
    let reason = option_str_opt(interaction, "reason").unwrap_or(DEFAULT_REASON);

    interaction.defer(&ctx.http).await?;

    let content = match moderation::kick(&ctx.http, guild, target.id, reason).await {
        Ok(()) => format!("👢 Kicked {}: {}", target.mention(), reason),
        Err(err) => {
            tracing::error!("Kick failed: {}", err);
            "⚠️ Failed to kick that member".to_string()
        }
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    notify::send_log(
        &ctx.http,
        state.log_channel,
        format!("👢 {} kicked {}: {}", interaction.user.name, target.name, reason),
    )
    .await;

    Ok(())
}
