//! Input records shared by the analysis functions
//!
//! These are plain data snapshots owned by the caller. None of the analysis
//! functions mutate them or keep them between calls.

use chrono::NaiveDate;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fuel or energy source feeding the heating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    /// Natural gas boiler
    #[default]
    Gas,
    /// Heating oil boiler
    Oil,
    /// Direct electric heating
    Electric,
    /// Air or ground source heat pump
    HeatPump,
    /// Liquefied petroleum gas
    Lpg,
    /// Wood pellets or chips
    Biomass,
}

impl FuelType {
    /// Human-readable name used in prompts and reports
    pub fn name(&self) -> &'static str {
        match self {
            FuelType::Gas => "gas",
            FuelType::Oil => "oil",
            FuelType::Electric => "electric",
            FuelType::HeatPump => "heat pump",
            FuelType::Lpg => "LPG",
            FuelType::Biomass => "biomass",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the heating system as entered by the user
///
/// Fields missing from a config file take their [`Default`] values.
///
/// # Examples
///
/// ```
/// use heating_advisor::analyzer::{FuelType, HeatingState};
///
/// let state = HeatingState {
///     current_temp: 19.0,
///     target_temp: 21.0,
///     efficiency: 82.0,
///     daily_usage: 7.5,
///     system_age: 9.0,
///     fuel_type: FuelType::Gas,
///     last_maintenance: None,
/// };
/// assert_eq!(state.fuel_type.name(), "gas");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HeatingState {
    /// Measured room temperature in °C
    pub current_temp: f64,
    /// Thermostat set point in °C
    pub target_temp: f64,
    /// Rated efficiency in percent (0-100)
    pub efficiency: f64,
    /// Average hours of heating per day
    pub daily_usage: f64,
    /// Age of the system in years
    pub system_age: f64,
    /// Fuel or energy source
    pub fuel_type: FuelType,
    /// Date of the last professional service
    ///
    /// Accepts a TOML date (`2025-11-20`) or a `"YYYY-MM-DD"` string.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_maintenance_date"
    )]
    pub last_maintenance: Option<NaiveDate>,
}

impl Default for HeatingState {
    fn default() -> Self {
        Self {
            current_temp: 20.0,
            target_temp: 21.0,
            efficiency: 85.0,
            daily_usage: 8.0,
            system_age: 5.0,
            fuel_type: FuelType::Gas,
            last_maintenance: None,
        }
    }
}

impl HeatingState {
    /// Last maintenance date for display, or "not recorded"
    pub fn last_maintenance_label(&self) -> String {
        self.last_maintenance
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "not recorded".to_string())
    }
}

fn deserialize_maintenance_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MaintenanceDateVisitor)
}

struct MaintenanceDateVisitor;

impl<'de> Visitor<'de> for MaintenanceDateVisitor {
    type Value = Option<NaiveDate>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date such as 2025-11-20 or \"2025-11-20\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| E::custom(format!("invalid date '{}': {}", v, e)))
    }

    // TOML native dates arrive as a single-entry map
    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let datetime =
            toml_edit::Datetime::deserialize(de::value::MapAccessDeserializer::new(map))?;
        match (datetime.date, datetime.time) {
            (Some(date), None) => {
                NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", datetime)))
            }
            _ => Err(de::Error::custom(format!(
                "expected a date without a time, found '{}'",
                datetime
            ))),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

/// Ambient conditions used for load prediction
///
/// Missing fields fall back to 5 °C and 60 % relative humidity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WeatherInput {
    /// Outdoor temperature in °C
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Relative humidity in percent
    #[serde(default = "default_humidity")]
    pub humidity: f64,
}

fn default_temperature() -> f64 {
    5.0
}

fn default_humidity() -> f64 {
    60.0
}

impl Default for WeatherInput {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            humidity: default_humidity(),
        }
    }
}

/// Historical usage figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UsageHistory {
    /// Average running cost per heating hour
    #[serde(default = "default_cost_per_hour")]
    pub average_cost_per_hour: f64,
    /// Whether recent usage looked anomalous
    #[serde(default)]
    pub anomaly_detected: bool,
}

fn default_cost_per_hour() -> f64 {
    0.5
}

impl Default for UsageHistory {
    fn default() -> Self {
        Self {
            average_cost_per_hour: default_cost_per_hour(),
            anomaly_detected: false,
        }
    }
}
