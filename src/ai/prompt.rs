//! Prompt construction and reply parsing

use crate::analyzer::{HeatingState, Recommendation};

/// Outcome of reading a model reply
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// The reply contained a recommendation in the requested shape
    Structured(Recommendation),
    /// The reply is usable text but not machine-readable
    Unstructured(String),
}

/// System message for recommendation requests
pub fn recommendation_system_prompt() -> String {
    r#"You are a heating efficiency expert. You analyse domestic heating systems and give practical, specific advice that lowers energy use without sacrificing comfort.

Answer ONLY with a JSON object of this shape:
{
  "immediateSteps": ["..."],
  "weeklyStrategies": ["..."],
  "maintenance": ["..."],
  "energySavingsPercent": 15,
  "temperatureSettings": {"occupied": 21, "unoccupied": 17, "sleeping": 18, "minimum": 16},
  "costReduction": "..."
}
Temperatures are in degrees Celsius. Do not wrap the JSON in markdown."#
        .to_string()
}

/// User message describing the system to analyse
pub fn recommendation_user_prompt(state: &HeatingState) -> String {
    format!(
        "Analyse this heating system and recommend optimizations.\n\n\
         Current temperature: {}°C\n\
         Target temperature: {}°C\n\
         System efficiency: {}%\n\
         Daily usage: {} hours\n\
         System age: {} years\n\
         Fuel type: {}\n\
         Last maintenance: {}\n\n\
         Provide immediate steps, weekly strategies, maintenance advice, expected energy \
         savings, recommended temperature settings and the expected cost reduction.",
        state.current_temp,
        state.target_temp,
        state.efficiency,
        state.daily_usage,
        state.system_age,
        state.fuel_type,
        state.last_maintenance_label(),
    )
}

/// System message for free-form questions
pub fn assistant_system_prompt(state: &HeatingState) -> String {
    format!(
        "You are a friendly smart-heating assistant. Answer questions about heating, \
         thermostat settings, energy saving and maintenance concisely.\n\n\
         The user's system: {} heating, {} years old, {}% efficient, currently {}°C \
         with a target of {}°C, running about {} hours a day. Last maintenance: {}.",
        state.fuel_type,
        state.system_age,
        state.efficiency,
        state.current_temp,
        state.target_temp,
        state.daily_usage,
        state.last_maintenance_label(),
    )
}

/// Locate the first balanced top-level `{...}` in free text
///
/// Braces inside JSON string literals are ignored. Returns `None` when no
/// object starts or the first one never closes.
///
/// # Examples
///
/// ```
/// use heating_advisor::ai::prompt::extract_json_object;
///
/// let reply = "Sure! {\"a\": {\"b\": \"}\"}} Hope that helps {x}";
/// assert_eq!(extract_json_object(reply), Some("{\"a\": {\"b\": \"}\"}}"));
/// assert_eq!(extract_json_object("no json here"), None);
/// ```
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Try to read a recommendation out of a model reply
///
/// Falls back to the raw text when no object is found or it does not match
/// the expected shape.
pub fn parse_recommendation(reply: &str) -> ParsedReply {
    let Some(json) = extract_json_object(reply) else {
        log::debug!("model reply contains no JSON object");
        return ParsedReply::Unstructured(reply.to_string());
    };

    match serde_json::from_str::<Recommendation>(json) {
        Ok(recommendation) => ParsedReply::Structured(recommendation),
        Err(e) => {
            log::debug!("model reply JSON does not match recommendation shape: {}", e);
            ParsedReply::Unstructured(reply.to_string())
        }
    }
}
