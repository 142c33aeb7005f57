use thiserror::Error;

/// Failure persisting the warning file.
///
/// Only the write half of the ledger can fail; unreadable or missing files
/// are deliberately treated as an empty ledger on load.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The warning structure could not be encoded as JSON.
    #[error("failed to encode warning file: {0}")]
    Encode(#[source] serde_json::Error),

    /// The warning file could not be written.
    #[error("failed to write warning file: {0}")]
    Write(#[source] std::io::Error),
}
