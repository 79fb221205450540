//! Ask command implementation
//!
//! One-shot question to the heating assistant, answered with the configured
//! system as context. Unlike `recommend` there is no offline answer.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::load_validated_config;
use crate::ai::{ApiKey, RecommendationEngine};
use crate::error::AdvisorError;
use crate::fmt::{self, INFO};

/// Ask the assistant a free-form question
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::cmd::ask::cmd_ask;
/// use std::path::Path;
///
/// cmd_ask(Path::new("."), "Should I bleed my radiators?", None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_ask(dir: &Path, question: &str, api_key: Option<&str>) -> Result<()> {
    let config = load_validated_config(dir, chrono::Utc::now().date_naive(), false)?;

    let key = ApiKey::resolve(api_key, &config.ai.api_key_env)?.ok_or_else(|| {
        AdvisorError::MissingApiKey {
            env_var: config.ai.api_key_env.clone(),
        }
    })?;

    let engine = RecommendationEngine::from_settings(&config.ai).map_err(AdvisorError::from)?;

    let spinner = fmt::spinner("Thinking...");
    let answer = engine.ask(question, &config.system, Some(&key));
    spinner.finish_and_clear();

    let answer = answer
        .map_err(AdvisorError::from)
        .context("Failed to get an answer from the assistant")?;

    println!("{} {}", INFO, style("Assistant").bold());
    println!();
    println!("{}", answer.trim());

    Ok(())
}
