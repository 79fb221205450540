//! Errors raised while talking to the chat-completion service

use serde::Serializer;
use thiserror::Error;

/// Failure of a model call
///
/// None of these are fatal for recommendations: the engine turns them into
/// a local fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No API key was supplied
    #[error("no API key configured")]
    MissingCredential,

    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message taken from the error body when available
        message: String,
    },

    /// A success reply carried no message content
    #[error("model returned an empty response")]
    EmptyResponse,

    /// A success reply did not have the chat-completion shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Nothing to send
    #[error("question is empty")]
    EmptyQuestion,
}

impl EngineError {
    /// True when the caller could fix this by supplying a key
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, EngineError::MissingCredential)
    }
}

/// Serialize any `Display` value as its string form
pub(crate) fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
