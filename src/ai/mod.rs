//! AI-assisted recommendations
//!
//! This module provides:
//! - Prompt construction and tolerant parsing of model replies
//! - A chat-completion transport behind a trait seam
//! - The recommendation engine with its local fallback
//! - API key validation

pub mod client;
pub mod credential;
pub mod engine;
pub mod error;
pub mod prompt;

pub use client::{ChatMessage, ChatRequest, ChatTransport, HttpTransport, Role, ScriptedTransport};
pub use credential::ApiKey;
pub use engine::{Advice, RecommendationEngine};
pub use error::EngineError;
pub use prompt::ParsedReply;
