//! Configuration management for heating-advisor
//!
//! This module provides:
//! - .heating-advisor.toml config file support
//! - Loading with defaults for missing files and sections
//! - Pluggable validation of the stored heating state

pub mod file;
pub mod loader;
pub mod validator;

pub use file::{AiSettings, ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use validator::{
    ConfigValidator, ValidationIssue, ValidationResult, ValidationSeverity, ValidatorRegistry,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".heating-advisor.toml");
    }
}
