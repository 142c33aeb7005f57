//! Application error types.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors from the
//! command, completion, and storage layers. Most variants use `#[from]` for
//! automatic conversion with `?`. Command handlers are expected to catch their
//! own failures and turn them into user-visible replies; errors that reach the
//! event handler boundary are logged, never propagated into the gateway loop.

pub mod command;
pub mod completion;
pub mod config;
pub mod internal;
pub mod ledger;

use thiserror::Error;

pub use command::CommandError;
pub use completion::{CompletionError, ImageError};
pub use config::ConfigError;
pub use internal::InternalError;
pub use ledger::LedgerError;

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the bot. Domain errors carry
/// their own user-facing mapping (see `CommandError::user_message`); the
/// remaining variants are infrastructure failures surfaced only in logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Command rejected before execution (missing option, permission denied,
    /// target not found, out-of-range argument).
    ///
    /// Converted into an ephemeral rejection message by the interaction
    /// router rather than logged as a failure.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Chat-completion endpoint failure (transport, non-2xx, malformed body).
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Image-generation endpoint failure.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Warning-file write or encode failure.
    ///
    /// Read failures never surface here; unreadable warning files are
    /// treated as empty by the ledger.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Internal issue indicating unexpected behavior and a possible bug.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// Cron scheduler error from the presence rotation job.
    #[error(transparent)]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error binding the liveness listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}
