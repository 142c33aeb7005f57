use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the chat-completion endpoint.
///
/// All variants mean the same thing to callers: the completion is unavailable
/// for this attempt. There is no retry; handlers degrade to a fixed apology
/// reply. The raw transport error is wrapped rather than propagated so the
/// command layer never has to reason about `reqwest` internals.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The endpoint returned a non-2xx status.
    #[error("completion endpoint returned status {0}")]
    Status(StatusCode),

    /// The request could not be sent or the response body could not be read.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response decoded but contained no choices.
    #[error("completion response contained no choices")]
    EmptyChoices,
}

/// Failure talking to the image-generation endpoint.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The endpoint returned a non-2xx status.
    #[error("image endpoint returned status {0}")]
    Status(StatusCode),

    /// The request could not be sent or the payload could not be read.
    #[error("image request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
