//! Configuration file loading and saving

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::AdvisorError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .heating-advisor.toml in the given directory
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use heating_advisor::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Target temperature: {}", config.system.target_temp);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", config_path.display());
                return Ok(ConfigFile::default());
            }
            Err(source) => {
                return Err(AdvisorError::Io {
                    context: format!("reading {}", config_path.display()),
                    source,
                }
                .into());
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .heating-advisor.toml")?;

        config
            .ai
            .validate()
            .context("Invalid [ai] configuration")?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to .heating-advisor.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use heating_advisor::config::{ConfigFile, ConfigLoader};
    /// use std::path::Path;
    ///
    /// let mut config = ConfigFile::default();
    /// config.system.target_temp = 20.0;
    /// ConfigLoader::save(&config, Path::new("."))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// Save config with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents =
            toml_edit::ser::to_string_pretty(config).context("Failed to serialize config")?;

        fs.write(&config_path, contents)
            .map_err(|source| AdvisorError::Io {
                context: format!("writing {}", config_path.display()),
                source,
            })?;

        Ok(())
    }

    /// Check if config file exists in project
    pub fn exists(project_root: &Path) -> bool {
        Self::exists_with_fs(project_root, &RealFileSystem)
    }

    /// Check for the config file with a custom filesystem implementation
    pub fn exists_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> bool {
        fs.exists(&project_root.join(CONFIG_FILE_NAME))
    }
}
