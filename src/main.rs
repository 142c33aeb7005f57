mod bot;
mod config;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod state;
mod util;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::data::conversation::ConversationStore;
use crate::data::warning::WarningLedger;
use crate::error::AppError;
use crate::service::chat::ChatService;
use crate::service::completion::CompletionClient;
use crate::service::image::ImageClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warden=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Shared mutable state lives here for the life of the process; handlers
    // receive it through AppState rather than through globals.
    let store = Arc::new(ConversationStore::new());
    let completion = CompletionClient::new(
        config.completion_base_url.clone(),
        config.openrouter_api_key.clone(),
        config.completion_model.clone(),
    )?;
    let image = match &config.image_api_key {
        Some(key) => Some(Arc::new(ImageClient::new(
            config.image_base_url.clone(),
            key.clone(),
        )?)),
        None => None,
    };

    let state = AppState {
        chat: Arc::new(ChatService::new(store, completion)),
        ledger: Arc::new(WarningLedger::new(config.warning_file.clone())),
        image,
        log_channel: config.log_channel_id,
    };

    // Liveness endpoint for uptime probing, alongside the gateway client.
    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.liveness_port)).await?;
    tracing::info!("Liveness endpoint listening on port {}", config.liveness_port);
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router::router()).await {
            tracing::error!("Liveness server error: {}", err);
        }
    });

    bot::start::start_bot(&config, state).await?;

    Ok(())
}
