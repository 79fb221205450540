//! Predict command implementation
//!
//! Estimates heating load, hours and cost for given weather.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::{load_validated_config, print_json};
use crate::analyzer::{self, WeatherInput};
use crate::fmt::THERMOMETER;

/// Command-line overrides for the prediction inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherOverrides {
    /// Outdoor temperature in °C
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Cost per heating hour, replacing `[usage]`
    pub cost_per_hour: Option<f64>,
}

impl WeatherOverrides {
    fn weather(&self) -> WeatherInput {
        let defaults = WeatherInput::default();
        WeatherInput {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            humidity: self.humidity.unwrap_or(defaults.humidity),
        }
    }
}

/// Predict heating load for the given weather
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::cmd::predict::{cmd_predict, WeatherOverrides};
/// use std::path::Path;
///
/// let overrides = WeatherOverrides { temperature: Some(-3.0), ..Default::default() };
/// cmd_predict(Path::new("."), &overrides, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_predict(dir: &Path, overrides: &WeatherOverrides, json: bool) -> Result<()> {
    let config = load_validated_config(dir, chrono::Utc::now().date_naive(), json)?;

    let weather = overrides.weather();
    let mut usage = config.usage;
    if let Some(cost) = overrides.cost_per_hour {
        anyhow::ensure!(cost >= 0.0, "--cost-per-hour cannot be negative");
        usage.average_cost_per_hour = cost;
    }

    let prediction = analyzer::predict_heating_load(&weather, &usage);

    if json {
        return print_json(&prediction);
    }

    println!(
        "{} {} Load Prediction",
        THERMOMETER,
        style("heating-advisor").bold()
    );
    println!(
        "   outdoor {}°C at {}% humidity, {:.2} per hour",
        weather.temperature, weather.humidity, usage.average_cost_per_hour
    );
    println!();
    analyzer::print_load_report(&prediction);

    Ok(())
}
