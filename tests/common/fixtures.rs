//! Test fixture helpers
//!
//! Temporary project directories holding a `.heating-advisor.toml`.

#![allow(dead_code)]

use std::fs;
use tempfile::TempDir;

/// Config file name the CLI looks for
pub const CONFIG_FILE: &str = ".heating-advisor.toml";

/// Oil boiler, 25 years old, 65 % efficient, never serviced on record
pub const AGEING_SYSTEM: &str = r#"
[system]
current-temp = 18.0
target-temp = 21.0
efficiency = 65.0
daily-usage = 10.0
system-age = 25.0
fuel-type = "oil"

[usage]
average-cost-per-hour = 0.5
"#;

/// Efficiency outside the 0-100 range
pub const INVALID_SYSTEM: &str = r#"
[system]
efficiency = 140.0
"#;

/// Schedule overrides for morning and night
pub const SCHEDULE_OVERRIDES: &str = r#"
[schedule]
morning = 19.5
night = 15.0
"#;

/// Creates a temporary directory containing the given config
///
/// The TempDir must be kept alive for the duration of the test.
pub fn project_with_config(contents: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(CONFIG_FILE), contents)?;
    Ok(temp_dir)
}

/// Creates an empty temporary directory (no config file)
pub fn empty_project() -> anyhow::Result<TempDir> {
    Ok(TempDir::new()?)
}
