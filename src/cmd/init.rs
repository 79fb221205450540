//! Init command implementation
//!
//! Handles `heating-advisor init`, which writes a `.heating-advisor.toml`
//! populated with default values for the user to edit.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::error::AdvisorError;
use crate::fmt::{CHECKMARK, FLAME, INFO};

/// Create a default configuration file in `dir`
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use heating_advisor::cmd::init::cmd_init;
/// use std::path::Path;
///
/// cmd_init(Path::new("."), false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(dir: &Path, force: bool) -> Result<()> {
    println!(
        "{} {} Initializing heating-advisor",
        FLAME,
        style("heating-advisor init").bold()
    );
    println!();

    if ConfigLoader::exists(dir) && !force {
        return Err(AdvisorError::ConfigExists {
            path: dir.join(config::CONFIG_FILE_NAME),
        }
        .into());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, dir)?;
    log::info!("wrote default config to {}", dir.display());

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Defaults written:", INFO);
    println!(
        "   {} fuel = {}, efficiency = {}%, age = {} years",
        style("•").dim(),
        style(config.system.fuel_type).green(),
        style(config.system.efficiency).green(),
        style(config.system.system_age).green()
    );
    println!(
        "   {} model = {} (key read from {})",
        style("•").dim(),
        style(&config.ai.model).green(),
        style(&config.ai.api_key_env).green()
    );
    println!();
    println!("{}  Next Steps:", style("💡").bold());
    println!(
        "   1. Fill in [system] with your boiler's details in {}",
        config::CONFIG_FILE_NAME
    );
    println!(
        "   2. Run {} for a rating and detected issues",
        style("heating-advisor analyze").cyan()
    );
    println!(
        "   3. Run {} for an optimization plan",
        style("heating-advisor recommend").cyan()
    );

    Ok(())
}
