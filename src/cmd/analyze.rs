//! Analyze command implementation
//!
//! Scores the configured heating system and lists detected issues.

use anyhow::Result;
use chrono::Utc;
use console::style;
use serde_json::json;
use std::path::Path;

use super::{load_validated_config, print_json};
use crate::analyzer;
use crate::fmt::MICROSCOPE;

/// Rate efficiency and detect issues for the configured system
///
/// `anomaly` marks recent usage as anomalous for this run, on top of
/// whatever `[usage]` says.
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::cmd::analyze::cmd_analyze;
/// use std::path::Path;
///
/// cmd_analyze(Path::new("."), false, true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_analyze(dir: &Path, anomaly: bool, json: bool) -> Result<()> {
    let now = Utc::now();
    let config = load_validated_config(dir, now.date_naive(), json)?;

    let mut usage = config.usage;
    usage.anomaly_detected |= anomaly;

    let rating = analyzer::calculate_efficiency_rating(&config.system, now);
    let issues = analyzer::detect_issues(&config.system, Some(&usage), now);
    log::debug!("score {} with {} issue(s)", rating.score, issues.len());

    if json {
        return print_json(&json!({
            "efficiency": rating,
            "issues": issues,
        }));
    }

    println!(
        "{} {} Efficiency Analysis",
        MICROSCOPE,
        style("heating-advisor").bold()
    );
    println!(
        "   {} system, {} years old, last serviced: {}",
        config.system.fuel_type,
        config.system.system_age,
        config.system.last_maintenance_label()
    );
    println!();
    analyzer::print_efficiency_report(&rating, &issues);

    Ok(())
}
