//! Shared formatting utilities for numbers and console output

use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Thermometer emoji for temperature readings
pub const THERMOMETER: Emoji = Emoji("🌡️", "*");

/// Flame emoji for heating operations
pub const FLAME: Emoji = Emoji("🔥", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Calendar emoji for schedules
pub const CALENDAR: Emoji = Emoji("📅", "#");

/// Round to a fixed number of decimal places, halves away from zero
///
/// # Examples
///
/// ```
/// use heating_advisor::fmt::round_to;
///
/// assert_eq!(round_to(16.549, 1), 16.5);
/// assert_eq!(round_to(12.345678, 2), 12.35);
/// assert_eq!(round_to(17.99999999999999, 2), 18.0);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Format a temperature in °C, dropping a trailing `.0`
///
/// # Examples
///
/// ```
/// use heating_advisor::fmt::format_temp;
///
/// assert_eq!(format_temp(21.0), "21°C");
/// assert_eq!(format_temp(18.5), "18.5°C");
/// ```
pub fn format_temp(celsius: f64) -> String {
    format!("{}°C", round_to(celsius, 1))
}

/// Steady-ticking spinner shown while a request is in flight
///
/// Falls back to ASCII frames when the terminal has no colour support.
/// Call `finish_and_clear` once the work is done.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();

    let style = if console::colors_enabled() {
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
    } else {
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{spinner} {msg}")
    };
    if let Ok(style) = style {
        spinner.set_style(style);
    }

    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_various_places() {
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(22.46, 1), 22.5);
        assert_eq!(round_to(11.000000000000002, 2), 11.0);
        assert_eq!(round_to(-3.14159, 2), -3.14);
    }

    #[test]
    fn test_format_temp_negative() {
        assert_eq!(format_temp(-4.0), "-4°C");
    }
}
