//! Optimization recommendations and the deterministic local fallback

use serde::{Deserialize, Serialize};

use super::state::HeatingState;

/// Lowest set point ever suggested, in °C
const FROST_PROTECTION_TEMP: f64 = 16.0;
const SETBACK_AWAY: f64 = 4.0;
const SETBACK_SLEEP: f64 = 3.0;

/// Suggested thermostat set points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSettings {
    /// While people are home and awake
    pub occupied: f64,
    /// While the building is empty
    pub unoccupied: f64,
    /// Overnight
    pub sleeping: f64,
    /// Never go below this
    pub minimum: f64,
}

/// Heating optimization plan
///
/// Field names are camelCase on the wire because the model is asked to
/// answer in that shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Things to do today
    pub immediate_steps: Vec<String>,
    /// Habits to adopt over the week
    pub weekly_strategies: Vec<String>,
    /// Service and upkeep items
    pub maintenance: Vec<String>,
    /// Expected saving in percent
    pub energy_savings_percent: f64,
    /// Suggested set points
    pub temperature_settings: TemperatureSettings,
    /// Expected cost impact, free text
    pub cost_reduction: String,
}

/// Build the local recommendation for `state`
///
/// Pure and deterministic: the same state always yields the same plan.
///
/// # Examples
///
/// ```
/// use heating_advisor::analyzer::{local_recommendation, HeatingState};
///
/// let state = HeatingState { efficiency: 72.0, target_temp: 21.0, ..HeatingState::default() };
/// let plan = local_recommendation(&state);
/// assert_eq!(plan.energy_savings_percent, 20.0);
/// assert_eq!(plan.temperature_settings.unoccupied, 17.0);
/// assert_eq!(plan, local_recommendation(&state));
/// ```
pub fn local_recommendation(state: &HeatingState) -> Recommendation {
    let target = state.target_temp;
    let away = target - SETBACK_AWAY;
    let sleeping = target - SETBACK_SLEEP;

    let immediate_steps = vec![
        format!(
            "Bring the room from {:.1}°C to the {:.1}°C target and avoid heating above it",
            state.current_temp, target
        ),
        format!(
            "Set the thermostat to {:.1}°C when away and {:.1}°C overnight",
            away, sleeping
        ),
        format!(
            "Bleed radiators and check thermostatic valves on the {} system",
            state.fuel_type
        ),
    ];

    let weekly_strategies = vec![
        format!(
            "Use a programmable schedule to trim the current {:.1} hours of daily heating",
            state.daily_usage
        ),
        "Close curtains at dusk and seal draughts around doors and windows".to_string(),
        "Heat only occupied rooms and keep interior doors closed".to_string(),
    ];

    let maintenance = vec![
        format!(
            "Book an annual service for the {:.0}-year-old {} system",
            state.system_age, state.fuel_type
        ),
        format!(
            "Have the burner and heat exchanger inspected (rated efficiency {:.0}%)",
            state.efficiency
        ),
        format!(
            "Last recorded maintenance: {}",
            state.last_maintenance_label()
        ),
    ];

    let energy_savings_percent = if state.efficiency < 80.0 { 20.0 } else { 10.0 };

    Recommendation {
        immediate_steps,
        weekly_strategies,
        maintenance,
        energy_savings_percent,
        temperature_settings: TemperatureSettings {
            occupied: target,
            unoccupied: away,
            sleeping,
            minimum: FROST_PROTECTION_TEMP,
        },
        cost_reduction: "Expected 15-25% lower heating costs with consistent scheduling"
            .to_string(),
    }
}
