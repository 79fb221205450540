//! Error types with contextual suggestions
//!
//! Every [`AdvisorError`] carries:
//! - An actionable message
//! - A suggested fix where one exists
//! - A sysexits-style exit code for scripts
//!
//! # Examples
//!
//! ```
//! use heating_advisor::error::{AdvisorError, ErrorFormatter};
//!
//! let err = anyhow::Error::new(AdvisorError::MissingApiKey {
//!     env_var: "OPENROUTER_API_KEY".to_string(),
//! });
//! assert_eq!(ErrorFormatter::exit_code(&err), 78);
//! assert!(ErrorFormatter::format(&err).contains("OPENROUTER_API_KEY"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::ai::EngineError;

/// heating-advisor errors with contextual suggestions
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Config file already present and `--force` not given
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Stored heating state failed validation
    #[error("Invalid heating configuration ({} problem(s))", issues.len())]
    InvalidConfig {
        /// One line per failed check
        issues: Vec<String>,
    },

    /// API key supplied but malformed
    #[error("Invalid API key: {reason}")]
    InvalidApiKey {
        /// What is wrong with it
        reason: String,
    },

    /// A command that needs the model ran without a key
    #[error("No API key found")]
    MissingApiKey {
        /// Environment variable that was consulted
        env_var: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Model request failed
    #[error("model request failed: {0}")]
    Engine(#[from] EngineError),
}

impl AdvisorError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_advisor::error::AdvisorError;
    ///
    /// let error = AdvisorError::ConfigExists {
    ///     path: ".heating-advisor.toml".into(),
    /// };
    /// assert!(error.suggestion().unwrap().contains("--force"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigExists { .. } => {
                Some("Edit the file directly or run 'heating-advisor init --force'".to_string())
            }
            Self::InvalidConfig { issues } => Some(format!(
                "Fix these values in .heating-advisor.toml:\n  - {}",
                issues.join("\n  - ")
            )),
            Self::InvalidApiKey { .. } => {
                Some("Copy the key again from your provider dashboard".to_string())
            }
            Self::MissingApiKey { env_var } => Some(format!(
                "Set {} or pass --api-key <KEY>",
                env_var
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions; the error happened while {}",
                context
            )),
            Self::Engine(e) => match e {
                EngineError::Http { status: 401, .. } | EngineError::Http { status: 403, .. } => {
                    Some("The API rejected the key; check that it is current".to_string())
                }
                EngineError::Http { status: 429, .. } => {
                    Some("Rate limited by the API; wait a moment and retry".to_string())
                }
                EngineError::Network(_) => {
                    Some("Check your network connection and the [ai] endpoint".to_string())
                }
                EngineError::EmptyQuestion => Some("Pass a non-empty question".to_string()),
                _ => Some("Retry, or use 'heating-advisor recommend --offline'".to_string()),
            },
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_advisor::error::AdvisorError;
    ///
    /// let error = AdvisorError::InvalidConfig { issues: vec![] };
    /// assert_eq!(error.exit_code(), 65);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigExists { .. } => 73,  // EX_CANTCREAT
            Self::InvalidConfig { .. } => 65, // EX_DATAERR
            Self::InvalidApiKey { .. } => 78, // EX_CONFIG
            Self::MissingApiKey { .. } => 78, // EX_CONFIG
            Self::Io { .. } => 74,            // EX_IOERR
            Self::Engine(EngineError::EmptyQuestion) => 64, // EX_USAGE
            Self::Engine(_) => 69,            // EX_UNAVAILABLE
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with its cause chain and a suggestion
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::advisor_error(error).and_then(|e| e.suggestion()) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::advisor_error(error)
            .map(AdvisorError::exit_code)
            .unwrap_or(1)
    }

    // Context layers wrap the typed error, so look through the chain.
    fn advisor_error(error: &anyhow::Error) -> Option<&AdvisorError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<AdvisorError>())
    }
}
