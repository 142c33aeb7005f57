//! HTTP client for the image-generation endpoint.
//!
//! Sends `{ model, inputs }` and treats the response body as raw image
//! bytes, which the command layer attaches directly to the interaction
//! response. No temp file is written.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::error::ImageError;

const GENERATE_PATH: &str = "/v1/generate";
const IMAGE_MODEL: &str = "black-forest-labs/FLUX.1-dev";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    inputs: &'a str,
}

pub struct ImageClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ImageClient {
    pub fn new(base_url: impl Into<String>, api_key: String) -> Result<Self, ImageError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Generates one image for the prompt. Single attempt, no retry.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Raw image payload
    /// - `Err(ImageError)` - Transport failure or non-2xx status
    pub async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ImageError> {
        let request = ImageRequest {
            model: IMAGE_MODEL,
            inputs: prompt,
        };

        let response = self
            .http
            .post(format!("{}{}", self.base_url, GENERATE_PATH))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a successful response yields the raw payload bytes.
    ///
    /// Expected: Ok with the exact body bytes
    #[tokio::test]
    async fn returns_raw_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(&[0x89, 0x50, 0x4e, 0x47])
            .create_async()
            .await;

        let client = ImageClient::new(server.url(), "test-key".to_string()).unwrap();
        let bytes = client.generate("a lighthouse at dusk").await.unwrap();
        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    /// Tests that a non-2xx status maps to the domain error.
    ///
    /// Expected: Err(Status)
    #[tokio::test]
    async fn server_error_maps_to_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", GENERATE_PATH)
            .with_status(503)
            .create_async()
            .await;

        let client = ImageClient::new(server.url(), "test-key".to_string()).unwrap();
        assert!(matches!(
            client.generate("a lighthouse at dusk").await,
            Err(ImageError::Status(_))
        ));
    }
}
