//! Passive chat trigger detection and text extraction.
//!
//! Besides `/ask`, the bot replies to any direct message, any message that
//! mentions it, and any message starting with the `!chat` prefix. All three
//! routes feed the same chat-completion path.

use serenity::all::UserId;

/// Prefix token that routes a guild message to the chat path.
pub const CHAT_PREFIX: &str = "!chat";

/// Fallback input when stripping leaves nothing behind.
const EMPTY_INPUT_FALLBACK: &str = "Say hello!";

/// Decides whether a non-bot message should be routed to the chat path.
pub fn should_reply(is_dm: bool, mentions_bot: bool, content: &str) -> bool {
    is_dm || mentions_bot || has_chat_prefix(content.trim())
}

/// Case-insensitive (ASCII) check for the chat prefix.
fn has_chat_prefix(text: &str) -> bool {
    text.len() >= CHAT_PREFIX.len()
        && text.is_char_boundary(CHAT_PREFIX.len())
        && text[..CHAT_PREFIX.len()].eq_ignore_ascii_case(CHAT_PREFIX)
}

/// Extracts the user's text from a triggering message.
///
/// Strips the chat prefix and any mention tokens for the bot, then trims.
/// An empty residue (e.g. a bare mention) becomes a fixed greeting request
/// so the completion endpoint always gets real input.
pub fn extract_user_text(content: &str, bot_id: UserId) -> String {
    let mut text = content.trim().to_string();

    if has_chat_prefix(&text) {
        text = text[CHAT_PREFIX.len()..].trim().to_string();
    }

    let mention = format!("<@{bot_id}>");
    let mention_nick = format!("<@!{bot_id}>");
    text = text.replace(&mention, "").replace(&mention_nick, "");
    let text = text.trim();

    if text.is_empty() {
        EMPTY_INPUT_FALLBACK.to_string()
    } else {
        text.to_string()
    }
}
