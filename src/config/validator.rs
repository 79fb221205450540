//! Configuration validation system
//!
//! Pluggable checks over a loaded [`ConfigFile`]. Errors block analysis;
//! warnings are shown but analysis still runs on the values as given.

use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;

use super::file::ConfigFile;

/// Validation severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    /// Warning - should be addressed but not blocking
    Warning,
    /// Error - must be fixed
    Error,
}

/// A validation issue found in configuration
///
/// # Examples
///
/// ```
/// use heating_advisor::config::validator::{ValidationIssue, ValidationSeverity};
///
/// let issue = ValidationIssue::error("system.efficiency", "must be between 0 and 100");
/// assert_eq!(issue.severity, ValidationSeverity::Error);
///
/// let warning = ValidationIssue::warning("system.target-temp", "unusually high")
///     .with_suggestion("Most homes are comfortable between 18 and 22°C");
/// assert!(warning.suggestion.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity level
    pub severity: ValidationSeverity,
    /// Field or section that has the issue
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Suggested fix (if available)
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(
        severity: ValidationSeverity,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an error issue
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Error, field, message)
    }

    /// Create a warning issue
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ValidationSeverity::Warning, field, message)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of configuration validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors)
    pub valid: bool,
    /// Issues found during validation
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Add an issue
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity == ValidationSeverity::Error {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.severity == ValidationSeverity::Error)
    }

    /// Get only errors
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get only warnings
    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .collect()
    }
}

/// Trait for pluggable configuration validators
pub trait ConfigValidator: Send + Sync {
    /// Validator name
    fn name(&self) -> &str;

    /// Validate configuration data
    fn validate(&self, config: &ConfigFile) -> ValidationResult;

    /// Get validator priority (lower runs first)
    fn priority(&self) -> u32 {
        100
    }
}

/// Range checks on the `[system]` section
pub struct SystemStateValidator {
    today: NaiveDate,
}

impl SystemStateValidator {
    /// Validator judging maintenance dates relative to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl ConfigValidator for SystemStateValidator {
    fn name(&self) -> &str {
        "system-state"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let state = &config.system;
        let mut result = ValidationResult::success();

        if !(0.0..=100.0).contains(&state.efficiency) {
            result.add_issue(ValidationIssue::error(
                "system.efficiency",
                format!("must be between 0 and 100, got {}", state.efficiency),
            ));
        }

        if !(0.0..=24.0).contains(&state.daily_usage) {
            result.add_issue(ValidationIssue::error(
                "system.daily-usage",
                format!("must be between 0 and 24 hours, got {}", state.daily_usage),
            ));
        }

        if state.system_age < 0.0 {
            result.add_issue(ValidationIssue::error(
                "system.system-age",
                format!("cannot be negative, got {}", state.system_age),
            ));
        }

        if !(5.0..=30.0).contains(&state.target_temp) {
            result.add_issue(
                ValidationIssue::warning(
                    "system.target-temp",
                    format!("{}°C is outside the usual 5-30°C range", state.target_temp),
                )
                .with_suggestion("Most homes are comfortable between 18 and 22°C"),
            );
        }

        if !(-30.0..=50.0).contains(&state.current_temp) {
            result.add_issue(ValidationIssue::warning(
                "system.current-temp",
                format!("{}°C looks like a sensor error", state.current_temp),
            ));
        }

        if let Some(date) = state.last_maintenance {
            if date > self.today {
                result.add_issue(
                    ValidationIssue::warning(
                        "system.last-maintenance",
                        format!("{} is in the future", date),
                    )
                    .with_suggestion("Use the date of the most recent completed service"),
                );
            }
        }

        result
    }

    fn priority(&self) -> u32 {
        10
    }
}

/// Sanity checks on the `[usage]` section
pub struct UsageValidator;

impl ConfigValidator for UsageValidator {
    fn name(&self) -> &str {
        "usage"
    }

    fn validate(&self, config: &ConfigFile) -> ValidationResult {
        let mut result = ValidationResult::success();
        if config.usage.average_cost_per_hour < 0.0 {
            result.add_issue(ValidationIssue::error(
                "usage.average-cost-per-hour",
                format!(
                    "cannot be negative, got {}",
                    config.usage.average_cost_per_hour
                ),
            ));
        }
        result
    }

    fn priority(&self) -> u32 {
        20
    }
}

/// Registry for managing configuration validators
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: Mutex<Vec<Arc<dyn ConfigValidator>>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in validators
    pub fn with_defaults(today: NaiveDate) -> Self {
        let registry = Self::new();
        registry.register(Arc::new(SystemStateValidator::new(today)));
        registry.register(Arc::new(UsageValidator));
        registry
    }

    /// Register a validator
    pub fn register(&self, validator: Arc<dyn ConfigValidator>) {
        let mut validators = self.validators.lock();
        validators.push(validator);
        validators.sort_by_key(|v| v.priority());
    }

    /// Run all validators
    pub fn validate_all(&self, config: &ConfigFile) -> ValidationResult {
        let validators = self.validators.lock();

        let mut result = ValidationResult::success();

        for validator in validators.iter() {
            let validator_result = validator.validate(config);
            if !validator_result.issues.is_empty() {
                log::debug!(
                    "validator '{}' reported {} issue(s)",
                    validator.name(),
                    validator_result.issues.len()
                );
            }
            for issue in validator_result.issues {
                result.add_issue(issue);
            }
        }

        result
    }

    /// Get validator count
    pub fn count(&self) -> usize {
        self.validators.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::HeatingState;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    struct OrderValidator(&'static str, u32);

    impl ConfigValidator for OrderValidator {
        fn name(&self) -> &str {
            self.0
        }

        fn validate(&self, _config: &ConfigFile) -> ValidationResult {
            let mut result = ValidationResult::success();
            result.add_issue(ValidationIssue::warning(self.0, "ran"));
            result
        }

        fn priority(&self) -> u32 {
            self.1
        }
    }

    #[test]
    fn test_validation_result_detects_errors() {
        let mut result = ValidationResult::success();
        assert!(result.valid);

        result.add_issue(ValidationIssue::warning("field", "warning"));
        assert!(result.valid);

        result.add_issue(ValidationIssue::error("field", "error"));
        assert!(!result.valid);
        assert!(result.has_errors());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_default_config_is_valid() {
        let registry = ValidatorRegistry::with_defaults(today());
        let result = registry.validate_all(&ConfigFile::default());
        assert!(result.valid);
        assert!(result.issues.is_empty());
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_out_of_range_state_is_rejected() {
        let config = ConfigFile {
            system: HeatingState {
                efficiency: 120.0,
                daily_usage: 30.0,
                system_age: -1.0,
                ..HeatingState::default()
            },
            ..ConfigFile::default()
        };
        let result = ValidatorRegistry::with_defaults(today()).validate_all(&config);
        assert!(!result.valid);
        let fields: Vec<_> = result.errors().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["system.efficiency", "system.daily-usage", "system.system-age"]
        );
    }

    #[test]
    fn test_unusual_values_are_only_warnings() {
        let config = ConfigFile {
            system: HeatingState {
                target_temp: 35.0,
                last_maintenance: NaiveDate::from_ymd_opt(2027, 1, 1),
                ..HeatingState::default()
            },
            ..ConfigFile::default()
        };
        let result = ValidatorRegistry::with_defaults(today()).validate_all(&config);
        assert!(result.valid);
        assert_eq!(result.warnings().len(), 2);
        assert!(result.warnings()[0].suggestion.is_some());
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let mut config = ConfigFile::default();
        config.usage.average_cost_per_hour = -0.1;
        let result = ValidatorRegistry::with_defaults(today()).validate_all(&config);
        assert_eq!(result.errors()[0].field, "usage.average-cost-per-hour");
    }

    #[test]
    fn test_registry_runs_by_priority() {
        let registry = ValidatorRegistry::new();
        registry.register(Arc::new(OrderValidator("second", 50)));
        registry.register(Arc::new(OrderValidator("first", 5)));

        let result = registry.validate_all(&ConfigFile::default());
        let order: Vec<_> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }
}
