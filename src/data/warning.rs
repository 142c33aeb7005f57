//! Flat-file warning ledger.
//!
//! Warnings are persisted as a single JSON file keyed by guild then user:
//! `{ "guild_id": { "user_id": [WarningRecord, ...] } }`. The file is the
//! authoritative copy and is rewritten wholesale on every mutation; there is
//! no incremental append at the storage layer. The load-then-write sequence
//! is not atomic across concurrent invocations — two warnings issued at the
//! same moment can lose one under a read-modify-write race. Call volume is
//! low and the data is non-critical, so this is accepted rather than fixed.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serenity::all::{GuildId, UserId};

use crate::error::LedgerError;
use crate::model::WarningRecord;

/// On-disk shape of the warning file.
type WarningFile = BTreeMap<String, BTreeMap<String, Vec<WarningRecord>>>;

/// Append-only per-guild-per-user warning list persisted to a flat file.
pub struct WarningLedger {
    path: PathBuf,
}

impl WarningLedger {
    /// Creates a ledger backed by the given file path.
    ///
    /// The file is not created up front; a ledger over a nonexistent file is
    /// simply empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends a warning for a (guild, user) pair and rewrites the file.
    ///
    /// Loads the full persisted structure, appends to the relevant nested
    /// sequence (creating guild and user entries if absent), then writes the
    /// full structure back.
    ///
    /// # Arguments
    /// - `guild` - Guild the warning was issued in
    /// - `user` - User the warning was issued against
    /// - `record` - The warning to append
    ///
    /// # Returns
    /// - `Ok(usize)` - Total warnings now on record for this pair
    /// - `Err(LedgerError)` - The updated file could not be encoded or written
    pub async fn add_warning(
        &self,
        guild: GuildId,
        user: UserId,
        record: WarningRecord,
    ) -> Result<usize, LedgerError> {
        let mut warnings = self.load().await;
        let records = warnings
            .entry(guild.to_string())
            .or_default()
            .entry(user.to_string())
            .or_default();
        records.push(record);
        let count = records.len();

        let encoded = serde_json::to_vec_pretty(&warnings).map_err(LedgerError::Encode)?;
        tokio::fs::write(&self.path, encoded)
            .await
            .map_err(LedgerError::Write)?;

        Ok(count)
    }

    /// Returns the ordered warning list for a (guild, user) pair.
    ///
    /// Returns an empty sequence if no warnings exist for the pair, the file
    /// does not exist yet, or the file cannot be read.
    pub async fn list_warnings(&self, guild: GuildId, user: UserId) -> Vec<WarningRecord> {
        let warnings = self.load().await;
        warnings
            .get(&guild.to_string())
            .and_then(|users| users.get(&user.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    /// Loads the full persisted structure.
    ///
    /// A missing, unreadable, or malformed file is treated as "no warnings
    /// yet" rather than an error. Decode failures are logged since they mean
    /// existing records will be overwritten by the next mutation.
    async fn load(&self) -> WarningFile {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return WarningFile::default(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(warnings) => warnings,
            Err(err) => {
                tracing::warn!(
                    "Warning file {} is unreadable, treating as empty: {}",
                    self.path.display(),
                    err
                );
                WarningFile::default()
            }
        }
    }
}
