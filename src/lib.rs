#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! heating-advisor library
//!
//! Analysis helpers for a domestic heating system: an efficiency score and
//! rating, issue detection, load and cost prediction, a daily schedule and
//! an optimization plan that comes from a language model when a key is
//! available and from local rules otherwise. Everything the CLI does is
//! available programmatically.
//!
//! # Basic Example
//!
//! Scoring a system and listing its issues:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use heating_advisor::analyzer::{
//!     calculate_efficiency_rating, detect_issues, HeatingState, Rating,
//! };
//!
//! let state = HeatingState {
//!     efficiency: 65.0,
//!     system_age: 25.0,
//!     ..HeatingState::default()
//! };
//! let now = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
//!
//! let rating = calculate_efficiency_rating(&state, now);
//! assert_eq!(rating.score, 70);
//! assert_eq!(rating.rating, Rating::Good);
//! assert_eq!(detect_issues(&state, None, now).len(), 3);
//! ```
//!
//! # Advanced Example: Model Advice With Fallback
//!
//! The engine never fails; without a key it returns the local plan:
//!
//! ```
//! use heating_advisor::ai::{Advice, RecommendationEngine, ScriptedTransport};
//! use heating_advisor::analyzer::{local_recommendation, HeatingState};
//! use heating_advisor::config::AiSettings;
//!
//! let state = HeatingState::default();
//! let engine = RecommendationEngine::with_transport(
//!     ScriptedTransport::replying("unused"),
//!     &AiSettings::default(),
//! );
//!
//! match engine.recommend(&state, None) {
//!     Advice::Fallback { recommendation, .. } => {
//!         assert_eq!(recommendation, local_recommendation(&state));
//!     }
//!     other => panic!("unexpected advice: {:?}", other),
//! }
//! ```

/// Model-backed recommendations and the assistant
pub mod ai;
/// Efficiency, issue, load, schedule and recommendation analysis
pub mod analyzer;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file loading and validation
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
