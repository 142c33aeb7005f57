use std::path::PathBuf;

use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

const OPENROUTER_BASE_URL: &str = "https://openrouter.ai";
const IMAGE_BASE_URL: &str = "https://api.bfl.ai";
const DEFAULT_COMPLETION_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_WARNING_FILE: &str = "warnings.json";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_bot_token: String,

    pub openrouter_api_key: String,
    pub completion_model: String,
    pub completion_base_url: String,

    /// Image generation is only enabled when an API key is configured.
    pub image_api_key: Option<String>,
    pub image_base_url: String,

    pub warning_file: PathBuf,
    pub log_channel_id: Option<ChannelId>,
    pub liveness_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            openrouter_api_key: require("OPENROUTER_API_KEY")?,
            completion_model: std::env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_base_url: std::env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| OPENROUTER_BASE_URL.to_string()),
            image_api_key: std::env::var("BFL_API_KEY").ok(),
            image_base_url: std::env::var("IMAGE_BASE_URL")
                .unwrap_or_else(|_| IMAGE_BASE_URL.to_string()),
            warning_file: std::env::var("WARNING_FILE")
                .unwrap_or_else(|_| DEFAULT_WARNING_FILE.to_string())
                .into(),
            log_channel_id: parse_optional_u64("LOG_CHANNEL_ID")?.map(ChannelId::new),
            liveness_port: match std::env::var("PORT") {
                Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_PORT,
            },
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_optional_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that an absent required variable reports its name.
    #[test]
    fn missing_required_var_is_an_error() {
        let result = require("WARDEN_TEST_VAR_THAT_IS_NEVER_SET");
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(name)) if name == "WARDEN_TEST_VAR_THAT_IS_NEVER_SET"
        ));
    }

    /// Tests that an absent optional numeric variable is simply None.
    #[test]
    fn missing_optional_var_is_none() {
        let result = parse_optional_u64("WARDEN_TEST_VAR_THAT_IS_NEVER_SET");
        assert!(matches!(result, Ok(None)));
    }
}
