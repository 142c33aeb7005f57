//! Stateless pass-through moderation operations.
//!
//! Kick, ban, timeout, and bulk delete are single delegated calls to the
//! Discord API via Serenity. Argument validation and permission checks
//! happen in the command layer before anything here runs; these functions
//! only own the platform calls themselves.

use chrono::{Duration, Utc};
use serenity::all::{
    ChannelId, EditMember, GetMessages, GuildId, Http, MessageId, Timestamp, UserId,
};

use crate::error::{AppError, InternalError};

/// Messages ban deletes from the target's recent history, in days.
const BAN_DELETE_MESSAGE_DAYS: u8 = 0;

/// Removes a member from the guild.
pub async fn kick(
    http: &Http,
    guild: GuildId,
    user: UserId,
    reason: &str,
) -> Result<(), AppError> {
    guild.kick_with_reason(http, user, reason).await?;
    Ok(())
}

/// Bans a member from the guild without deleting message history.
pub async fn ban(http: &Http, guild: GuildId, user: UserId, reason: &str) -> Result<(), AppError> {
    guild
        .ban_with_reason(http, user, BAN_DELETE_MESSAGE_DAYS, reason)
        .await?;
    Ok(())
}

/// Times out a member for the given number of minutes.
///
/// # Returns
/// - `Ok(())` - Communication disabled until now + `minutes`
/// - `Err(AppError)` - The expiry is not representable as a Discord
///   timestamp, or the edit call failed
pub async fn timeout(
    http: &Http,
    guild: GuildId,
    user: UserId,
    minutes: i64,
) -> Result<(), AppError> {
    let until = (Utc::now() + Duration::minutes(minutes)).timestamp();
    let expiry = Timestamp::from_unix_timestamp(until)
        .map_err(|_| InternalError::InvalidDiscordTimestamp { timestamp: until })?;

    guild
        .edit_member(
            http,
            user,
            EditMember::new().disable_communication_until_datetime(expiry),
        )
        .await?;

    Ok(())
}

/// Bulk-deletes the most recent messages in a channel.
///
/// Fetches up to `amount` recent messages and deletes them. Discord's bulk
/// endpoint refuses batches of one, so a single message falls back to a
/// plain delete.
///
/// # Arguments
/// - `channel` - Channel to delete from
/// - `amount` - Number of messages to fetch, already validated to [1, 100]
///
/// # Returns
/// - `Ok(usize)` - Number of messages deleted
pub async fn clear(http: &Http, channel: ChannelId, amount: u8) -> Result<usize, AppError> {
    let messages = channel
        .messages(http, GetMessages::new().limit(amount))
        .await?;
    let ids: Vec<MessageId> = messages.iter().map(|message| message.id).collect();
    let count = ids.len();

    match count {
        0 => {}
        1 => channel.delete_message(http, ids[0]).await?,
        _ => channel.delete_messages(http, ids).await?,
    }

    Ok(count)
}
