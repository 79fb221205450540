//! Command handlers for the heating-advisor CLI
//!
//! Each submodule handles one subcommand. Handlers load
//! `.heating-advisor.toml` from the directory given on the command line
//! (or the current directory) and print either styled text or JSON.

pub mod analyze;
pub mod ask;
pub mod completions;
pub mod init;
pub mod predict;
pub mod recommend;
pub mod schedule;

pub use analyze::cmd_analyze;
pub use ask::cmd_ask;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use predict::{cmd_predict, WeatherOverrides};
pub use recommend::cmd_recommend;
pub use schedule::cmd_schedule;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigLoader, ValidationSeverity, ValidatorRegistry};
use crate::error::AdvisorError;
use crate::fmt::WARNING;

/// Directory holding `.heating-advisor.toml`
pub fn project_dir(config_dir: Option<&Path>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir().context("Failed to determine current directory"),
    }
}

/// Load the config and run the validator registry over it
///
/// Warnings are printed to stderr unless `quiet`; any error aborts with
/// [`AdvisorError::InvalidConfig`].
pub fn load_validated_config(dir: &Path, today: NaiveDate, quiet: bool) -> Result<ConfigFile> {
    let config = ConfigLoader::load(dir)?;
    let result = ValidatorRegistry::with_defaults(today).validate_all(&config);

    if result.has_errors() {
        return Err(AdvisorError::InvalidConfig {
            issues: result.errors().iter().map(|i| i.to_string()).collect(),
        }
        .into());
    }

    if !quiet {
        for issue in result
            .issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
        {
            eprintln!("{} {}", WARNING, style(issue).yellow());
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("   {}", style(suggestion).dim());
            }
        }
    }

    Ok(config)
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
