//! Time-of-day heating schedule

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named time-of-day bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    /// Wake-up warm-up
    Morning,
    /// Working hours
    Daytime,
    /// Evening at home
    Evening,
    /// Sleeping hours
    Night,
    /// Cheap-tariff window
    OffPeak,
}

impl Period {
    /// All periods in schedule order
    pub const ALL: [Period; 5] = [
        Period::Morning,
        Period::Daytime,
        Period::Evening,
        Period::Night,
        Period::OffPeak,
    ];

    /// Start time as HH:MM
    pub fn start_time(&self) -> &'static str {
        match self {
            Period::Morning => "06:00",
            Period::Daytime => "09:00",
            Period::Evening => "18:00",
            Period::Night => "23:00",
            Period::OffPeak => "14:00",
        }
    }

    /// Default target temperature in °C
    pub fn default_temp(&self) -> f64 {
        match self {
            Period::Morning => 20.0,
            Period::Daytime => 18.0,
            Period::Evening => 21.0,
            Period::Night => 16.0,
            Period::OffPeak => 19.0,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Daytime => "daytime",
            Period::Evening => "evening",
            Period::Night => "night",
            Period::OffPeak => "off-peak",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-period target overrides
///
/// Any field left as `None` keeps the built-in default. Values are not
/// range checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SchedulePreferences {
    /// Morning target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<f64>,
    /// Daytime target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daytime: Option<f64>,
    /// Evening target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening: Option<f64>,
    /// Night target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub night: Option<f64>,
    /// Off-peak target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_peak: Option<f64>,
}

impl SchedulePreferences {
    /// Override for one period, if any
    pub fn get(&self, period: Period) -> Option<f64> {
        match period {
            Period::Morning => self.morning,
            Period::Daytime => self.daytime,
            Period::Evening => self.evening,
            Period::Night => self.night,
            Period::OffPeak => self.off_peak,
        }
    }

    /// Layer `other` on top of `self`; fields set in `other` win
    pub fn merged_with(&self, other: &SchedulePreferences) -> SchedulePreferences {
        SchedulePreferences {
            morning: other.morning.or(self.morning),
            daytime: other.daytime.or(self.daytime),
            evening: other.evening.or(self.evening),
            night: other.night.or(self.night),
            off_peak: other.off_peak.or(self.off_peak),
        }
    }
}

/// One entry of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScheduleSlot {
    /// Bucket
    pub period: Period,
    /// Start time as HH:MM
    pub time: String,
    /// Target temperature in °C
    pub target_temp: f64,
}

/// Five-slot daily schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingSchedule {
    /// Slots in morning, daytime, evening, night, off-peak order
    pub slots: Vec<ScheduleSlot>,
}

impl HeatingSchedule {
    /// Look up the slot for a period
    pub fn slot(&self, period: Period) -> Option<&ScheduleSlot> {
        self.slots.iter().find(|s| s.period == period)
    }
}

/// Build the daily schedule, applying any overrides
///
/// # Examples
///
/// ```
/// use heating_advisor::analyzer::{build_schedule, Period, SchedulePreferences};
///
/// let prefs = SchedulePreferences { morning: Some(19.0), ..Default::default() };
/// let schedule = build_schedule(&prefs);
/// assert_eq!(schedule.slot(Period::Morning).unwrap().target_temp, 19.0);
/// assert_eq!(schedule.slot(Period::Evening).unwrap().target_temp, 21.0);
/// ```
pub fn build_schedule(preferences: &SchedulePreferences) -> HeatingSchedule {
    let slots = Period::ALL
        .iter()
        .map(|&period| ScheduleSlot {
            period,
            time: period.start_time().to_string(),
            target_temp: preferences
                .get(period)
                .unwrap_or_else(|| period.default_temp()),
        })
        .collect();

    HeatingSchedule { slots }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preferences_yield_defaults() {
        let schedule = build_schedule(&SchedulePreferences::default());
        let summary: Vec<_> = schedule
            .slots
            .iter()
            .map(|s| (s.period, s.time.as_str(), s.target_temp))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Period::Morning, "06:00", 20.0),
                (Period::Daytime, "09:00", 18.0),
                (Period::Evening, "18:00", 21.0),
                (Period::Night, "23:00", 16.0),
                (Period::OffPeak, "14:00", 19.0),
            ]
        );
    }

    #[test]
    fn test_single_override_changes_only_that_slot() {
        let defaults = build_schedule(&SchedulePreferences::default());
        let prefs = SchedulePreferences {
            morning: Some(19.0),
            ..Default::default()
        };
        let schedule = build_schedule(&prefs);

        for (slot, default) in schedule.slots.iter().zip(&defaults.slots) {
            if slot.period == Period::Morning {
                assert_eq!(slot.target_temp, 19.0);
            } else {
                assert_eq!(slot, default);
            }
        }
    }

    #[test]
    fn test_zero_override_is_honoured() {
        let prefs = SchedulePreferences {
            night: Some(0.0),
            ..Default::default()
        };
        let schedule = build_schedule(&prefs);
        assert_eq!(schedule.slot(Period::Night).unwrap().target_temp, 0.0);
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let base = SchedulePreferences {
            morning: Some(19.0),
            night: Some(15.0),
            ..Default::default()
        };
        let cli = SchedulePreferences {
            night: Some(17.0),
            ..Default::default()
        };
        let merged = base.merged_with(&cli);
        assert_eq!(merged.morning, Some(19.0));
        assert_eq!(merged.night, Some(17.0));
        assert_eq!(merged.evening, None);
    }

    #[test]
    fn test_preferences_parse_kebab_case() {
        let prefs: SchedulePreferences =
            serde_json::from_str(r#"{"off-peak": 18.5}"#).unwrap();
        assert_eq!(prefs.off_peak, Some(18.5));
    }
}
