//! Recommend command implementation
//!
//! Asks the configured model for an optimization plan and falls back to
//! the local plan when no key is available or the request fails.

use anyhow::Result;
use console::style;
use serde_json::json;
use std::path::Path;

use super::{load_validated_config, print_json};
use crate::ai::{Advice, ApiKey, ChatTransport, EngineError, RecommendationEngine};
use crate::analyzer::{self, HeatingState};
use crate::fmt::{self, SPARKLES, WARNING};

/// Produce an optimization plan for the configured system
///
/// `offline` skips the model entirely. `api_key` takes precedence over the
/// environment variable named in `[ai]`.
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::cmd::recommend::cmd_recommend;
/// use std::path::Path;
///
/// // Local plan only, as JSON
/// cmd_recommend(Path::new("."), None, true, true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_recommend(dir: &Path, api_key: Option<&str>, offline: bool, json: bool) -> Result<()> {
    let config = load_validated_config(dir, chrono::Utc::now().date_naive(), json)?;

    let key = if offline {
        None
    } else {
        ApiKey::resolve(api_key, &config.ai.api_key_env)?
    };

    let advice = advise(
        || RecommendationEngine::from_settings(&config.ai),
        &config.system,
        key.as_ref(),
        json,
    );

    if json {
        return print_json(&json!({
            "success": advice.is_success(),
            "advice": advice,
        }));
    }

    print_advice(&advice);
    Ok(())
}

/// Run the engine, with a spinner while a model request is in flight
///
/// The engine is only built once a key is known. A client that cannot be
/// built yields the local plan like any other transport failure.
pub(crate) fn advise<T, F>(
    build_engine: F,
    state: &HeatingState,
    key: Option<&ApiKey>,
    quiet: bool,
) -> Advice
where
    T: ChatTransport,
    F: FnOnce() -> Result<RecommendationEngine<T>, EngineError>,
{
    let Some(key) = key else {
        log::info!("no API key; using local recommendation");
        return Advice::fallback(state, EngineError::MissingCredential);
    };

    let engine = match build_engine() {
        Ok(engine) => engine,
        Err(error) => {
            log::warn!("could not set up the model client: {}", error);
            return Advice::fallback(state, error);
        }
    };

    let spinner = (!quiet).then(|| fmt::spinner("Asking the model..."));
    let advice = engine.recommend(state, Some(key));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    advice
}

fn print_advice(advice: &Advice) {
    println!(
        "{} {} Optimization Plan",
        SPARKLES,
        style("heating-advisor").bold()
    );
    println!();

    match advice {
        Advice::Model { recommendation } => {
            println!("   {}", style("Source: model").dim());
            println!();
            analyzer::print_recommendation(recommendation);
        }
        Advice::Unstructured { raw_content } => {
            println!("   {}", style("Source: model (free text)").dim());
            println!();
            println!("{}", raw_content);
        }
        Advice::Fallback {
            recommendation,
            error,
        } => {
            println!(
                "{} {}",
                WARNING,
                style(format!("Using local recommendation: {}", error)).yellow()
            );
            if error.is_missing_credential() {
                println!(
                    "   {}",
                    style("Set your API key or pass --api-key for model-generated advice").dim()
                );
            }
            println!();
            analyzer::print_recommendation(recommendation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ScriptedTransport;
    use crate::analyzer::local_recommendation;
    use crate::config::AiSettings;

    type ScriptedEngine = RecommendationEngine<ScriptedTransport>;

    fn key() -> ApiKey {
        ApiKey::parse("sk-or-test").unwrap()
    }

    #[test]
    fn test_advise_without_key_never_builds_engine() {
        let state = HeatingState::default();
        let advice = advise(
            || -> Result<ScriptedEngine, EngineError> {
                panic!("engine must not be built without a key")
            },
            &state,
            None,
            true,
        );

        assert_eq!(
            advice,
            Advice::fallback(&state, EngineError::MissingCredential)
        );
    }

    #[test]
    fn test_advise_falls_back_when_engine_cannot_be_built() {
        let state = HeatingState::default();
        let failure = EngineError::Network("failed to create HTTP client: no TLS backend".to_string());
        let advice = advise(
            || -> Result<ScriptedEngine, EngineError> { Err(failure.clone()) },
            &state,
            Some(&key()),
            true,
        );

        assert!(!advice.is_success());
        assert_eq!(advice.error(), Some(&failure));
        assert_eq!(advice.recommendation(), Some(&local_recommendation(&state)));
    }

    #[test]
    fn test_advise_with_key_uses_transport() {
        let advice = advise(
            || {
                Ok(RecommendationEngine::with_transport(
                    ScriptedTransport::replying("Lower the flow temperature."),
                    &AiSettings::default(),
                ))
            },
            &HeatingState::default(),
            Some(&key()),
            true,
        );

        assert_eq!(
            advice,
            Advice::Unstructured {
                raw_content: "Lower the flow temperature.".to_string()
            }
        );
    }
}
