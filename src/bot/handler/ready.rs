use serenity::all::{Context, Ready};

use crate::bot::{commands, notify};
use crate::scheduler::presence;
use crate::state::AppState;

/// Handles the ready event: registers commands, starts the presence
/// rotation, and announces startup to the log channel.
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    if let Err(err) = commands::register_global(&ctx.http).await {
        tracing::error!("Failed to register slash commands: {}", err);
    }

    if let Err(err) = presence::start_rotation(ctx.clone()).await {
        tracing::error!("Failed to start presence rotation: {}", err);
    }

    notify::send_log(&ctx.http, state.log_channel, "✅ warden is now online!").await;
}
