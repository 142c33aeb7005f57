use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to convert a timeout expiry to a Discord timestamp.
    ///
    /// Occurs when a computed Unix timestamp cannot be represented in
    /// Discord's timestamp format, typically because it is out of range.
    #[error("failed to convert Unix timestamp {timestamp} to Discord timestamp")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
    },
}
