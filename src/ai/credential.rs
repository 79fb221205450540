//! API key handling
//!
//! Keys come from the command line or from an environment variable named in
//! the config file. They are never logged or printed in full.

use std::fmt;

use crate::error::AdvisorError;

/// Prefix of OpenRouter keys; other providers are accepted with a warning
pub const EXPECTED_KEY_PREFIX: &str = "sk-or-";

/// Bearer credential for the chat-completion endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate and wrap a raw key
    ///
    /// Surrounding whitespace is trimmed. Empty keys and keys containing
    /// whitespace are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_advisor::ai::ApiKey;
    ///
    /// let key = ApiKey::parse("  sk-or-v1-abc123 ").unwrap();
    /// assert_eq!(key.expose(), "sk-or-v1-abc123");
    /// assert!(ApiKey::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AdvisorError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(AdvisorError::InvalidApiKey {
                reason: "key is empty".to_string(),
            });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(AdvisorError::InvalidApiKey {
                reason: "key contains whitespace".to_string(),
            });
        }
        if !key.starts_with(EXPECTED_KEY_PREFIX) {
            log::warn!(
                "API key does not start with '{}'; assuming a non-OpenRouter endpoint",
                EXPECTED_KEY_PREFIX
            );
        }
        Ok(Self(key.to_string()))
    }

    /// Raw key for the Authorization header
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Pick the key from the command line, else from `env_var`
    ///
    /// An unset or blank variable means "no key"; a blank command-line value
    /// is an error.
    pub fn resolve(cli_value: Option<&str>, env_var: &str) -> Result<Option<Self>, AdvisorError> {
        Self::resolve_with(cli_value, env_var, |name| std::env::var(name).ok())
    }

    /// [`ApiKey::resolve`] with an injectable environment lookup
    pub fn resolve_with<F>(
        cli_value: Option<&str>,
        env_var: &str,
        lookup: F,
    ) -> Result<Option<Self>, AdvisorError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(raw) = cli_value {
            return Self::parse(raw).map(Some);
        }

        match lookup(env_var) {
            Some(raw) if !raw.trim().is_empty() => {
                log::debug!("using API key from ${}", env_var);
                Self::parse(&raw).map(Some)
            }
            _ => Ok(None),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
