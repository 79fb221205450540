//! Recommendation engine
//!
//! Asks the model for a plan when a key is available and falls back to the
//! local recommendation otherwise. `recommend` never fails: every outcome
//! carries something the caller can show.

use serde::Serialize;

use super::client::{ChatMessage, ChatRequest, ChatTransport, HttpTransport};
use super::credential::ApiKey;
use super::error::{serialize_display, EngineError};
use super::prompt::{self, ParsedReply};
use crate::analyzer::{local_recommendation, HeatingState, Recommendation};
use crate::config::AiSettings;

/// Result of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "source",
    rename_all = "kebab-case",
    rename_all_fields = "kebab-case"
)]
pub enum Advice {
    /// The model answered in the requested shape
    Model {
        /// Parsed plan
        recommendation: Recommendation,
    },
    /// The model answered, but not as machine-readable JSON
    Unstructured {
        /// Reply text as received
        raw_content: String,
    },
    /// No model answer; the local plan stands in
    Fallback {
        /// Deterministic local plan
        recommendation: Recommendation,
        /// Why the model was not used
        #[serde(serialize_with = "serialize_display")]
        error: EngineError,
    },
}

impl Advice {
    /// Local plan for `state`, recording why the model was not used
    pub fn fallback(state: &HeatingState, error: EngineError) -> Self {
        Advice::Fallback {
            recommendation: local_recommendation(state),
            error,
        }
    }

    /// True when the model produced the answer
    pub fn is_success(&self) -> bool {
        !matches!(self, Advice::Fallback { .. })
    }

    /// Why the model was not used, for fallbacks
    pub fn error(&self) -> Option<&EngineError> {
        match self {
            Advice::Fallback { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Structured plan, when there is one
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Advice::Model { recommendation } | Advice::Fallback { recommendation, .. } => {
                Some(recommendation)
            }
            Advice::Unstructured { .. } => None,
        }
    }
}

/// Produces heating advice from a model or the local fallback
pub struct RecommendationEngine<T = HttpTransport> {
    transport: T,
    model: String,
    max_tokens: u32,
}

impl RecommendationEngine<HttpTransport> {
    /// Engine talking to the configured HTTP endpoint
    pub fn from_settings(settings: &AiSettings) -> Result<Self, EngineError> {
        Ok(Self::with_transport(HttpTransport::new(settings)?, settings))
    }
}

impl<T: ChatTransport> RecommendationEngine<T> {
    /// Engine using a custom transport
    pub fn with_transport(transport: T, settings: &AiSettings) -> Self {
        Self {
            transport,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
        }
    }

    /// Access the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
        }
    }

    /// Get optimization advice for `state`
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_advisor::ai::{Advice, RecommendationEngine, ScriptedTransport};
    /// use heating_advisor::analyzer::HeatingState;
    /// use heating_advisor::config::AiSettings;
    ///
    /// let engine = RecommendationEngine::with_transport(
    ///     ScriptedTransport::replying("unused"),
    ///     &AiSettings::default(),
    /// );
    /// let advice = engine.recommend(&HeatingState::default(), None);
    /// assert!(!advice.is_success());
    /// assert!(matches!(advice, Advice::Fallback { .. }));
    /// ```
    pub fn recommend(&self, state: &HeatingState, credential: Option<&ApiKey>) -> Advice {
        let Some(key) = credential else {
            log::info!("no API key; using local recommendation");
            return Advice::fallback(state, EngineError::MissingCredential);
        };

        let request = self.request(vec![
            ChatMessage::system(prompt::recommendation_system_prompt()),
            ChatMessage::user(prompt::recommendation_user_prompt(state)),
        ]);

        match self.transport.complete(key, &request) {
            Ok(reply) => match prompt::parse_recommendation(&reply) {
                ParsedReply::Structured(recommendation) => Advice::Model { recommendation },
                ParsedReply::Unstructured(raw_content) => {
                    log::info!("model reply is not structured; returning raw text");
                    Advice::Unstructured { raw_content }
                }
            },
            Err(error) => {
                log::warn!("model request failed: {}", error);
                Advice::fallback(state, error)
            }
        }
    }

    /// Ask the heating assistant a free-form question about `state`
    pub fn ask(
        &self,
        question: &str,
        state: &HeatingState,
        credential: Option<&ApiKey>,
    ) -> Result<String, EngineError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(EngineError::EmptyQuestion);
        }
        let key = credential.ok_or(EngineError::MissingCredential)?;

        let request = self.request(vec![
            ChatMessage::system(prompt::assistant_system_prompt(state)),
            ChatMessage::user(question),
        ]);
        self.transport.complete(key, &request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::{Role, ScriptedTransport};

    const STRUCTURED: &str = r#"Here is my analysis:
{"immediateSteps":["a"],"weeklyStrategies":["b"],"maintenance":["c"],
 "energySavingsPercent":18,"temperatureSettings":{"occupied":20,"unoccupied":16,"sleeping":17,"minimum":15},
 "costReduction":"about a fifth"}"#;

    fn key() -> ApiKey {
        ApiKey::parse("sk-or-v1-test").unwrap()
    }

    fn engine(transport: ScriptedTransport) -> RecommendationEngine<ScriptedTransport> {
        RecommendationEngine::with_transport(transport, &AiSettings::default())
    }

    #[test]
    fn test_missing_key_falls_back_without_calling_transport() {
        let engine = engine(ScriptedTransport::replying(STRUCTURED));
        let state = HeatingState::default();
        let advice = engine.recommend(&state, None);

        assert!(!advice.is_success());
        assert_eq!(advice.error(), Some(&EngineError::MissingCredential));
        assert_eq!(advice.recommendation(), Some(&local_recommendation(&state)));
        assert_eq!(engine.transport().call_count(), 0);
    }

    #[test]
    fn test_structured_reply_is_parsed() {
        let engine = engine(ScriptedTransport::replying(STRUCTURED));
        let advice = engine.recommend(&HeatingState::default(), Some(&key()));

        assert!(advice.is_success());
        let rec = advice.recommendation().unwrap();
        assert_eq!(rec.energy_savings_percent, 18.0);
        assert_eq!(rec.cost_reduction, "about a fifth");
    }

    #[test]
    fn test_prose_reply_is_unstructured_success() {
        let engine = engine(ScriptedTransport::replying("Turn it down a notch."));
        let advice = engine.recommend(&HeatingState::default(), Some(&key()));

        assert!(advice.is_success());
        assert!(advice.error().is_none());
        assert_eq!(
            advice,
            Advice::Unstructured {
                raw_content: "Turn it down a notch.".to_string()
            }
        );
    }

    #[test]
    fn test_http_failure_falls_back() {
        let engine = engine(ScriptedTransport::failing(EngineError::Http {
            status: 429,
            message: "rate limited".to_string(),
        }));
        let state = HeatingState {
            efficiency: 70.0,
            ..HeatingState::default()
        };
        let advice = engine.recommend(&state, Some(&key()));

        assert!(!advice.is_success());
        assert!(advice.error().unwrap().to_string().contains("429"));
        assert_eq!(
            advice.recommendation().unwrap().energy_savings_percent,
            20.0
        );
    }

    #[test]
    fn test_request_uses_configured_model_and_prompt() {
        let settings = AiSettings {
            model: "test/model".to_string(),
            max_tokens: 321,
            ..AiSettings::default()
        };
        let engine =
            RecommendationEngine::with_transport(ScriptedTransport::replying(STRUCTURED), &settings);
        engine.recommend(&HeatingState::default(), Some(&key()));

        let requests = engine.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "test/model");
        assert_eq!(requests[0].max_tokens, 321);
        assert_eq!(requests[0].messages[0].role, Role::System);
        assert!(requests[0].messages[1].content.contains("Target temperature"));
    }

    #[test]
    fn test_ask_requires_key_and_question() {
        let engine = engine(ScriptedTransport::replying("Keep it at 19°C."));
        let state = HeatingState::default();

        assert_eq!(
            engine.ask("how warm?", &state, None),
            Err(EngineError::MissingCredential)
        );
        assert_eq!(
            engine.ask("   ", &state, Some(&key())),
            Err(EngineError::EmptyQuestion)
        );
        assert_eq!(
            engine.ask("how warm?", &state, Some(&key())).unwrap(),
            "Keep it at 19°C."
        );
        let sent = &engine.transport().requests()[0];
        assert!(sent.messages[0].content.contains("gas heating"));
        assert_eq!(sent.messages[1].content, "how warm?");
    }

    #[test]
    fn test_advice_serializes_with_source_tag() {
        let fallback = Advice::Fallback {
            recommendation: local_recommendation(&HeatingState::default()),
            error: EngineError::MissingCredential,
        };
        let value = serde_json::to_value(&fallback).unwrap();
        assert_eq!(value["source"], "fallback");
        assert_eq!(value["error"], "no API key configured");
        assert!(value["recommendation"]["immediateSteps"].is_array());

        let raw = Advice::Unstructured {
            raw_content: "text".to_string(),
        };
        let value = serde_json::to_value(&raw).unwrap();
        assert_eq!(value["source"], "unstructured");
        assert_eq!(value["raw-content"], "text");
    }
}
