use serenity::all::{CommandInteraction, Context, Mentionable, Permissions};

use crate::bot::command::{
    option_str_opt, option_user, option_user_opt, require_permission, respond, respond_ephemeral,
    DEFAULT_REASON,
};
use crate::bot::notify;
use crate::error::{AppError, CommandError};
use crate::model::WarningRecord;
use crate::state::AppState;

/// Handles `/warn`: appends a warning record for the target.
///
/// The ledger write is local file I/O, fast enough to answer inside the
/// response window without deferring.
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
    let reason = option_str_opt(interaction, "reason").unwrap_or(DEFAULT_REASON);

    let record = WarningRecord::new(&interaction.user.name, reason);
    let count = state.ledger.add_warning(guild, target.id, record).await?;

    respond(
        ctx,
        interaction,
        format!(
            "⚠️ Warned {}: {} (warning #{count})",
            target.mention(),
            reason
        ),
    )
    .await?;

    notify::send_log(
        &ctx.http,
        state.log_channel,
        format!("⚠️ {} warned {}: {}", interaction.user.name, target.name, reason),
    )
    .await;

    Ok(())
}

/// Handles `/warnings`: lists the warning history for a member.
///
/// Defaults to the invoker when no target is given. Always ephemeral.
pub async fn list(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let guild = interaction.guild_id.ok_or(CommandError::GuildOnly)?;
    require_permission(interaction, Permissions::MODERATE_MEMBERS)?;

    let target = option_user_opt(interaction, "target")
        .map(|(user, _)| user)
        .unwrap_or(&interaction.user);

    let warnings = state.ledger.list_warnings(guild, target.id).await;
    let content = if warnings.is_empty() {
        format!("{} has no warnings.", target.mention())
    } else {
        let lines: Vec<String> = warnings
            .iter()
            .enumerate()
            .map(|(i, record)| {
                format!(
                    "{}. {} — by {} on {}",
                    i + 1,
                    record.reason,
                    record.moderator,
                    record.timestamp.format("%Y-%m-%d %H:%M UTC"),
                )
            })
            .collect();
        format!(
            "⚠️ Warnings for {}:\n{}",
            target.mention(),
            lines.join("\n")
        )
    };

    respond_ephemeral(ctx, interaction, content).await
}
