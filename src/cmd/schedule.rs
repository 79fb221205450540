//! Schedule command implementation

use anyhow::Result;
use console::style;
use std::path::Path;

use super::{load_validated_config, print_json};
use crate::analyzer::{self, SchedulePreferences};
use crate::fmt::CALENDAR;

/// Build the daily schedule
///
/// Overrides given on the command line win over `[schedule]` in the
/// config file; periods set in neither use their defaults.
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::analyzer::SchedulePreferences;
/// use heating_advisor::cmd::schedule::cmd_schedule;
/// use std::path::Path;
///
/// let overrides = SchedulePreferences { night: Some(15.0), ..Default::default() };
/// cmd_schedule(Path::new("."), &overrides, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_schedule(dir: &Path, overrides: &SchedulePreferences, json: bool) -> Result<()> {
    let config = load_validated_config(dir, chrono::Utc::now().date_naive(), json)?;
    let preferences = config.schedule.merged_with(overrides);
    let schedule = analyzer::build_schedule(&preferences);

    if json {
        return print_json(&schedule);
    }

    println!(
        "{} {} Heating Schedule",
        CALENDAR,
        style("heating-advisor").bold()
    );
    println!();
    analyzer::print_schedule_report(&schedule);

    Ok(())
}
