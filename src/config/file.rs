//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::analyzer::{HeatingState, SchedulePreferences, UsageHistory};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".heating-advisor.toml";

/// Default chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Environment variable holding the API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// heating-advisor configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Heating system snapshot
    #[serde(default)]
    pub system: HeatingState,

    /// Usage history
    #[serde(default)]
    pub usage: UsageHistory,

    /// Schedule overrides
    #[serde(default)]
    pub schedule: SchedulePreferences,

    /// Model access settings
    #[serde(default)]
    pub ai: AiSettings,
}

/// Chat-completion service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AiSettings {
    /// Endpoint URL receiving the POST
    pub endpoint: String,

    /// Model identifier sent with each request
    pub model: String,

    /// Maximum reply length in tokens
    pub max_tokens: u32,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// Request timeout; the HTTP client default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 1000,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: None,
        }
    }
}

impl AiSettings {
    /// Reject settings that can never produce a valid request
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            anyhow::bail!(
                "AI endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            );
        }

        if self.model.trim().is_empty() {
            anyhow::bail!("AI model must not be empty");
        }

        if self.max_tokens == 0 {
            anyhow::bail!("max-tokens must be greater than zero");
        }

        if self.timeout_secs == Some(0) {
            anyhow::bail!("timeout-secs must be greater than zero when set");
        }

        Ok(())
    }
}
