use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted moderation annotation against a user within a guild.
///
/// Records are appended to a per-guild, per-user sequence in the warning file
/// and are never modified after being written. No cap is enforced on the
/// number of records per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Name of the moderator who issued the warning.
    pub moderator: String,
    /// Reason supplied with the warning, or a fixed placeholder if omitted.
    pub reason: String,
    /// Time the warning was issued.
    pub timestamp: DateTime<Utc>,
}

impl WarningRecord {
    /// Creates a record stamped with the current time.
    pub fn new(moderator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            moderator: moderator.into(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}
