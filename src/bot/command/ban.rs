use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Mentionable, Permissions,
};

use crate::bot::command::{option_str_opt, option_user, require_permission, DEFAULT_REASON};
use crate::bot::notify;
use crate::error::{AppError, CommandError};
use crate::service::moderation;
use crate::state::AppState;

/// Handles `/ban`: bans a member from the guild.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild = interaction.guild_id.ok_or(CommandError::GuildOnly)?;
    require_permission(interaction, Permissions::BAN_MEMBERS)?;

    let (target, member) = option_user(interaction, "target")?;
    if member.is_none() {
        return Err(CommandError::TargetNotFound.into());
    }
    let reason = option_str_opt(interaction, "reason").unwrap_or(DEFAULT_REASON);

    interaction.defer(&ctx.http).await?;

    let content = match moderation::ban(&ctx.http, guild, target.id, reason).await {
        Ok(()) => format!("🔨 Banned {}: {}", target.mention(), reason),
        Err(err) => {
            tracing::error!("Ban failed: {}", err);
            "⚠️ Failed to ban that member".to_string()
        }
    };

    interaction
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    notify::send_log(
        &ctx.http,
        state.log_channel,
        format!("🔨 {} banned {}: {}", interaction.user.name, target.name, reason),
    )
    .await;

    Ok(())
}
