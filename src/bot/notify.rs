use serenity::all::{ChannelId, Http};

/// Sends a notice to the configured log channel, if any.
///
/// Best-effort: send failures are logged and swallowed so a broken log
/// channel never affects command handling.
pub async fn send_log(http: &Http, channel: Option<ChannelId>, content: impl Into<String>) {
    let Some(channel) = channel else { return };

    if let Err(err) = channel.say(http, content.into()).await {
        tracing::warn!("Failed to send log channel notice: {}", err);
    }
}
