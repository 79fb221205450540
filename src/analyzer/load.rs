//! Heating load prediction from weather and cost inputs

use serde::{Deserialize, Serialize};

use super::state::{UsageHistory, WeatherInput};
use crate::fmt::round_to;

/// Indoor reference temperature the load is measured against
const REFERENCE_TEMP: f64 = 20.0;
const HOURS_PER_LOAD_UNIT: f64 = 1.5;
const MAX_DAILY_HOURS: f64 = 24.0;
const HIGH_DEMAND_HOURS: f64 = 18.0;

/// Expected demand level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    /// More than eighteen hours of heating expected
    High,
    /// Anything else
    Normal,
}

impl Demand {
    /// Advice text for this demand level
    pub fn advice(&self) -> &'static str {
        match self {
            Demand::High => {
                "High heating demand expected - consider pre-heating during off-peak hours"
            }
            Demand::Normal => "Normal heating demand",
        }
    }
}

/// Predicted heating load and cost for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoadPrediction {
    /// Reference temperature minus outdoor temperature
    pub temp_difference: f64,
    /// Multiplier applied for very dry or very humid air
    pub humidity_factor: f64,
    /// Relative load, never negative (2 decimals)
    pub predicted_load: f64,
    /// Expected heating hours, at most 24 (1 decimal)
    pub estimated_hours: f64,
    /// Expected running cost (2 decimals)
    pub estimated_cost: f64,
    /// Demand bucket
    pub demand: Demand,
    /// Advice text for the demand bucket
    pub recommendation: String,
}

fn humidity_factor(humidity: f64) -> f64 {
    if humidity > 80.0 {
        1.2
    } else if humidity < 40.0 {
        1.1
    } else {
        1.0
    }
}

/// Predict heating load, hours and cost
///
/// # Examples
///
/// ```
/// use heating_advisor::analyzer::{predict_heating_load, UsageHistory, WeatherInput};
///
/// let weather = WeatherInput { temperature: 5.0, humidity: 85.0 };
/// let prediction = predict_heating_load(&weather, &UsageHistory::default());
/// assert_eq!(prediction.predicted_load, 18.0);
/// assert_eq!(prediction.estimated_hours, 24.0);
/// assert_eq!(prediction.estimated_cost, 12.0);
/// ```
pub fn predict_heating_load(weather: &WeatherInput, usage: &UsageHistory) -> LoadPrediction {
    let temp_difference = REFERENCE_TEMP - weather.temperature;
    let humidity_factor = humidity_factor(weather.humidity);

    let predicted_load = round_to((temp_difference * humidity_factor).max(0.0), 2);
    let estimated_hours = round_to(
        (predicted_load * HOURS_PER_LOAD_UNIT).min(MAX_DAILY_HOURS),
        1,
    );
    let estimated_cost = round_to(estimated_hours * usage.average_cost_per_hour, 2);

    let demand = if estimated_hours > HIGH_DEMAND_HOURS {
        Demand::High
    } else {
        Demand::Normal
    };

    log::debug!(
        "load {} -> {}h at {}/h",
        predicted_load,
        estimated_hours,
        usage.average_cost_per_hour
    );

    LoadPrediction {
        temp_difference,
        humidity_factor,
        predicted_load,
        estimated_hours,
        estimated_cost,
        demand,
        recommendation: demand.advice().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temperature: f64, humidity: f64) -> WeatherInput {
        WeatherInput {
            temperature,
            humidity,
        }
    }

    #[test]
    fn test_reference_temperature_means_no_load() {
        let p = predict_heating_load(&weather(20.0, 60.0), &UsageHistory::default());
        assert_eq!(p.temp_difference, 0.0);
        assert_eq!(p.predicted_load, 0.0);
        assert_eq!(p.estimated_hours, 0.0);
        assert_eq!(p.estimated_cost, 0.0);
        assert_eq!(p.demand, Demand::Normal);
        assert_eq!(p.recommendation, "Normal heating demand");
    }

    #[test]
    fn test_cold_humid_day_saturates_hours() {
        let usage = UsageHistory {
            average_cost_per_hour: 0.5,
            anomaly_detected: false,
        };
        let p = predict_heating_load(&weather(5.0, 85.0), &usage);
        assert_eq!(p.temp_difference, 15.0);
        assert_eq!(p.humidity_factor, 1.2);
        assert_eq!(p.predicted_load, 18.0);
        assert_eq!(p.estimated_hours, 24.0);
        assert_eq!(p.estimated_cost, 12.0);
        assert_eq!(p.demand, Demand::High);
        assert!(p.recommendation.starts_with("High heating demand"));
    }

    #[test]
    fn test_warm_day_clamps_load_at_zero() {
        let p = predict_heating_load(&weather(28.0, 50.0), &UsageHistory::default());
        assert_eq!(p.temp_difference, -8.0);
        assert_eq!(p.predicted_load, 0.0);
        assert_eq!(p.estimated_cost, 0.0);
    }

    #[test]
    fn test_dry_air_factor() {
        let p = predict_heating_load(&weather(10.0, 30.0), &UsageHistory::default());
        assert_eq!(p.humidity_factor, 1.1);
        assert_eq!(p.predicted_load, 11.0);
        assert_eq!(p.estimated_hours, 16.5);
        assert_eq!(p.estimated_cost, 8.25);
        assert_eq!(p.demand, Demand::Normal);
    }

    #[test]
    fn test_humidity_bounds_are_exclusive() {
        assert_eq!(humidity_factor(80.0), 1.0);
        assert_eq!(humidity_factor(40.0), 1.0);
        assert_eq!(humidity_factor(80.1), 1.2);
        assert_eq!(humidity_factor(39.9), 1.1);
    }

    #[test]
    fn test_exactly_eighteen_hours_is_normal() {
        // 12 * 1.5 = 18.0
        let p = predict_heating_load(&weather(8.0, 60.0), &UsageHistory::default());
        assert_eq!(p.estimated_hours, 18.0);
        assert_eq!(p.demand, Demand::Normal);
    }

    #[test]
    fn test_defaults_match_mild_winter_day() {
        let p = predict_heating_load(&WeatherInput::default(), &UsageHistory::default());
        assert_eq!(p.predicted_load, 15.0);
        assert_eq!(p.estimated_hours, 22.5);
        assert_eq!(p.estimated_cost, 11.25);
        assert_eq!(p.demand, Demand::High);
    }
}
