use crate::data::warning::WarningLedger;
use crate::model::WarningRecord;
use serenity::all::{GuildId, UserId};
use tempfile::TempDir;

mod add_warning;
mod list_warnings;

/// Creates a ledger backed by a file inside a fresh temporary directory.
///
/// The directory guard must be kept alive for the duration of the test.
fn ledger_in_temp_dir() -> (WarningLedger, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let ledger = WarningLedger::new(dir.path().join("warnings.json"));
    (ledger, dir)
}
