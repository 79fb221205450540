//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for floating-point results
//! - Config fixtures written into temporary directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let project = fixtures::project_with_config(fixtures::AGEING_SYSTEM).unwrap();
//! ```

pub mod assertions;
pub mod fixtures;

/// Environment variable the CLI reads its API key from by default
#[allow(dead_code)]
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
