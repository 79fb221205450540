//! Issue detection
//!
//! Each check is independent and contributes at most one issue. Issues come
//! back in a fixed priority order: efficiency, age, maintenance, usage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::efficiency::{days_since, MAINTENANCE_INTERVAL_DAYS};
use super::state::{HeatingState, UsageHistory};

const CRITICAL_EFFICIENCY: f64 = 70.0;
const END_OF_LIFE_AGE: f64 = 20.0;

/// How urgently an issue should be addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Worth checking when convenient
    Low,
    /// Should be planned for
    Medium,
    /// Needs attention now
    High,
}

impl Severity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a detected issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Rated efficiency is too low
    Efficiency,
    /// System is near the end of its service life
    Age,
    /// Service is missing or overdue
    Maintenance,
    /// Usage history looks abnormal
    Usage,
}

/// A single detected problem with a suggested action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Urgency
    pub severity: Severity,
    /// Category
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// What was found
    pub message: String,
    /// What to do about it
    pub action: String,
}

/// Run every check against `state` and collect the issues found
///
/// `usage` is optional; without it the anomaly check never fires.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use heating_advisor::analyzer::{detect_issues, HeatingState, IssueKind, Severity};
///
/// let state = HeatingState {
///     efficiency: 65.0,
///     system_age: 25.0,
///     last_maintenance: None,
///     ..HeatingState::default()
/// };
/// let issues = detect_issues(&state, None, Utc::now());
/// assert_eq!(issues.len(), 3);
/// assert_eq!(issues[0].kind, IssueKind::Efficiency);
/// assert_eq!(issues[0].severity, Severity::High);
/// ```
pub fn detect_issues(
    state: &HeatingState,
    usage: Option<&UsageHistory>,
    now: DateTime<Utc>,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    if state.efficiency < CRITICAL_EFFICIENCY {
        issues.push(Issue {
            severity: Severity::High,
            kind: IssueKind::Efficiency,
            message: format!(
                "System efficiency is critically low at {}%",
                state.efficiency
            ),
            action: "Schedule emergency maintenance to inspect the burner and heat exchanger"
                .to_string(),
        });
    }

    if state.system_age > END_OF_LIFE_AGE {
        issues.push(Issue {
            severity: Severity::Medium,
            kind: IssueKind::Age,
            message: format!(
                "System is {} years old and approaching end of life",
                state.system_age
            ),
            action: "Plan a replacement within the next 2 years".to_string(),
        });
    }

    let overdue = match state.last_maintenance {
        Some(date) => days_since(date, now) > MAINTENANCE_INTERVAL_DAYS,
        None => true,
    };
    if overdue {
        issues.push(Issue {
            severity: Severity::Medium,
            kind: IssueKind::Maintenance,
            message: match state.last_maintenance {
                Some(date) => format!("Annual maintenance is overdue (last service {})", date),
                None => "Annual maintenance is overdue (no service on record)".to_string(),
            },
            action: "Schedule a professional maintenance visit".to_string(),
        });
    }

    if usage.is_some_and(|u| u.anomaly_detected) {
        issues.push(Issue {
            severity: Severity::Low,
            kind: IssueKind::Usage,
            message: "Unusual heating usage pattern detected".to_string(),
            action: "Verify thermostat settings and check that the system operates normally"
                .to_string(),
        });
    }

    log::debug!("detected {} issue(s)", issues.len());
    issues
}
