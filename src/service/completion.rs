//! HTTP client for the chat-completion endpoint.
//!
//! Speaks the OpenRouter-compatible chat-completions wire format: request
//! body `{ model, messages, max_tokens }`, response exposing
//! `choices[0].message.content`. Required response fields are modeled
//! explicitly; a body missing any of them is a decode failure, not a silent
//! default.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;
use crate::model::Turn;

const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_COMPLETION_TOKENS: u32 = 500;

// OpenRouter attribution headers, carried over from the original deployment.
const REFERER_HEADER: &str = "https://discordapp.com";
const TITLE_HEADER: &str = "warden";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client wrapping a single request/response exchange with the completion
/// endpoint.
///
/// No retry: one failed call is one failed reply. The only timeout is the
/// HTTP client's request timeout; a hung remote call stalls the invoking
/// handler but no one else.
pub struct CompletionClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    /// Creates a client against the given base URL.
    ///
    /// # Arguments
    /// - `base_url` - Scheme and host of the endpoint, without the API path
    /// - `api_key` - Bearer token for the endpoint
    /// - `model` - Model identifier sent with every request
    ///
    /// # Returns
    /// - `Ok(CompletionClient)` - Ready to send requests
    /// - `Err(CompletionError)` - The underlying HTTP client could not be built
    pub fn new(
        base_url: impl Into<String>,
        api_key: String,
        model: String,
    ) -> Result<Self, CompletionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
            model,
        })
    }

    /// Sends one completion exchange for the given turn sequence.
    ///
    /// # Arguments
    /// - `messages` - Ordered turns, system instruction first
    ///
    /// # Returns
    /// - `Ok(String)` - Content of the first returned choice
    /// - `Err(CompletionError)` - Transport failure, non-2xx status, or a
    ///   response body missing the required fields
    pub async fn complete(&self, messages: &[Turn]) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, COMPLETIONS_PATH))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", REFERER_HEADER)
            .header("X-Title", TITLE_HEADER)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status));
        }

        let decoded: CompletionResponse = response.json().await?;
        let choice = decoded
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?;

        Ok(choice.message.content)
    }
}
