use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Starts the Discord bot in a blocking manner.
///
/// Builds the gateway client with the shared application state as its event
/// handler and runs it until shutdown. This is the main task of the process;
/// the liveness server runs in a separate spawned task.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state injected into every handler invocation
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if client initialization or the connection fails
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    // MESSAGE_CONTENT is privileged and must be enabled in the developer portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(state);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
