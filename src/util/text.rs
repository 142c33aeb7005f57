//! Reply-length handling for Discord's message limit.

/// Discord's hard message length limit.
pub const MAX_REPLY_LEN: usize = 2000;

/// Chunk size for multi-part replies, leaving headroom under the limit.
const CHUNK_LEN: usize = 1900;

/// Truncates a reply to the message limit, counting characters.
pub fn truncate_reply(reply: &str) -> String {
    reply.chars().take(MAX_REPLY_LEN).collect()
}

/// Splits a reply into parts that each fit comfortably under the limit.
///
/// A reply at or under the limit comes back as a single part. Splitting
/// counts characters, so multi-byte content never lands on a broken
/// boundary.
pub fn chunk_reply(reply: &str) -> Vec<String> {
    if reply.chars().count() <= MAX_REPLY_LEN {
        return vec![reply.to_string()];
    }

    let chars: Vec<char> = reply.chars().collect();
    chars
        .chunks(CHUNK_LEN)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that short replies pass through truncation untouched.
    #[test]
    fn truncate_keeps_short_replies() {
        assert_eq!(truncate_reply("hello"), "hello");
    }

    /// Tests truncation at the character limit.
    #[test]
    fn truncate_cuts_at_limit() {
        let long = "a".repeat(MAX_REPLY_LEN + 50);
        assert_eq!(truncate_reply(&long).chars().count(), MAX_REPLY_LEN);
    }

    /// Tests that truncation counts characters, not bytes.
    #[test]
    fn truncate_is_multibyte_safe() {
        let long = "é".repeat(MAX_REPLY_LEN + 1);
        let truncated = truncate_reply(&long);
        assert_eq!(truncated.chars().count(), MAX_REPLY_LEN);
    }

    /// Tests that a reply under the limit stays a single chunk.
    #[test]
    fn chunk_keeps_short_replies_whole() {
        let parts = chunk_reply("short reply");
        assert_eq!(parts, vec!["short reply".to_string()]);
    }

    /// Tests splitting an over-limit reply into bounded parts.
    #[test]
    fn chunk_splits_long_replies() {
        let long = "b".repeat(4000);
        let parts = chunk_reply(&long);

        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|part| part.chars().count() <= 1900));
        assert_eq!(parts.concat(), long);
    }
}
