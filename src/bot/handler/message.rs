use serenity::all::{Context, Message};

use crate::bot::{notify, trigger};
use crate::state::AppState;
use crate::util::text;

/// Fallback reply when the completion endpoint is unavailable.
const CHAT_APOLOGY: &str = "⚠️ Sorry, I ran into an error talking to the AI.";

/// Handles the passive chat trigger for plain messages.
///
/// DMs, mentions, and `!chat`-prefixed messages are routed to the same
/// chat-completion path as `/ask`. Everything else is ignored.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    let is_dm = message.guild_id.is_none();
    let mentions_bot = message.mentions_me(&ctx).await.unwrap_or(false);
    if !trigger::should_reply(is_dm, mentions_bot, &message.content) {
        return;
    }

    let bot_id = ctx.cache.current_user().id;
    let input = trigger::extract_user_text(&message.content, bot_id);

    let _ = message.channel_id.broadcast_typing(&ctx.http).await;

    match state.chat.reply(message.author.id, &input).await {
        Ok(reply) => {
            for part in text::chunk_reply(&reply) {
                if let Err(err) = message.reply(&ctx, part).await {
                    tracing::error!("Failed to send chat reply: {}", err);
                    break;
                }
            }
            notify::send_log(
                &ctx.http,
                state.log_channel,
                format!("💭 {}: {}", message.author.name, input),
            )
            .await;
        }
        Err(err) => {
            tracing::error!("Chat completion failed: {}", err);
            if let Err(err) = message.reply(&ctx, CHAT_APOLOGY).await {
                tracing::error!("Failed to send apology reply: {}", err);
            }
        }
    }
}
