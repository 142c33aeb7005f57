//! Application state shared across event and command handlers.
//!
//! All shared mutable resources — the conversation store behind the chat
//! service and the warning ledger — are constructed once in `main`, bundled
//! here, and handed to the gateway handler. Their lifecycle is the process
//! lifetime; there is no explicit teardown.

use std::sync::Arc;

use serenity::all::ChannelId;

use crate::data::warning::WarningLedger;
use crate::service::chat::ChatService;
use crate::service::image::ImageClient;

/// Shared state injected into every handler invocation.
///
/// All fields are reference-counted or copyable, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Conversation memory plus completion client for the chat path.
    pub chat: Arc<ChatService>,

    /// File-backed warning ledger.
    pub ledger: Arc<WarningLedger>,

    /// Image-generation client; `None` when no API key is configured.
    pub image: Option<Arc<ImageClient>>,

    /// Channel receiving startup and command-usage notices, if configured.
    pub log_channel: Option<ChannelId>,
}
