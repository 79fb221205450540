//! Efficiency scoring
//!
//! Derives a 0-100 score from rated efficiency, system age and maintenance
//! recency, then buckets it into a qualitative rating.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::HeatingState;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Efficiency below this loses half a point per percent
const EFFICIENCY_BASELINE: f64 = 85.0;
/// Systems older than this lose two points per year
const AGE_BASELINE: f64 = 15.0;
/// Maintenance is considered overdue after this many days
pub const MAINTENANCE_INTERVAL_DAYS: i64 = 365;
/// Cap on the overdue-maintenance deduction
const MAX_MAINTENANCE_PENALTY: f64 = 20.0;

/// Qualitative efficiency bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// Score below 60
    Poor,
    /// Score 60-69
    Fair,
    /// Score 70-79
    Good,
    /// Score 80-89
    #[serde(rename = "Very Good")]
    VeryGood,
    /// Score 90 and above
    Excellent,
}

impl Rating {
    /// Map a score onto its bucket
    ///
    /// # Examples
    ///
    /// ```
    /// use heating_advisor::analyzer::Rating;
    ///
    /// assert_eq!(Rating::from_score(59), Rating::Poor);
    /// assert_eq!(Rating::from_score(60), Rating::Fair);
    /// assert_eq!(Rating::from_score(90), Rating::Excellent);
    /// ```
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=59 => Rating::Poor,
            60..=69 => Rating::Fair,
            70..=79 => Rating::Good,
            80..=89 => Rating::VeryGood,
            _ => Rating::Excellent,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::Fair => "Fair",
            Rating::Good => "Good",
            Rating::VeryGood => "Very Good",
            Rating::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score and rating for a heating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyRating {
    /// Integer score, always within 0-100
    pub score: u8,
    /// Bucket derived from `score`
    pub rating: Rating,
}

/// Whole days elapsed between the maintenance date and `now`
///
/// The date is taken as midnight UTC and the difference is a plain
/// millisecond delta floored to days, with no calendar or timezone
/// normalization. Future dates yield negative values.
pub fn days_since(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let serviced_at = date.and_time(NaiveTime::default()).and_utc();
    let elapsed_ms = now.timestamp_millis() - serviced_at.timestamp_millis();
    elapsed_ms.div_euclid(MS_PER_DAY)
}

/// Compute the efficiency score and rating for `state` as of `now`
///
/// Starts at 100 and deducts for low efficiency, age beyond fifteen years
/// and maintenance more than a year old.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use heating_advisor::analyzer::{calculate_efficiency_rating, HeatingState, Rating};
///
/// let state = HeatingState {
///     efficiency: 75.0,
///     system_age: 10.0,
///     ..HeatingState::default()
/// };
/// let rating = calculate_efficiency_rating(&state, Utc::now());
/// assert_eq!(rating.score, 95);
/// assert_eq!(rating.rating, Rating::Excellent);
/// ```
pub fn calculate_efficiency_rating(state: &HeatingState, now: DateTime<Utc>) -> EfficiencyRating {
    let mut score = 100.0;

    if state.efficiency < EFFICIENCY_BASELINE {
        score -= (EFFICIENCY_BASELINE - state.efficiency) * 0.5;
    }

    if state.system_age > AGE_BASELINE {
        score -= (state.system_age - AGE_BASELINE) * 2.0;
    }

    if let Some(date) = state.last_maintenance {
        let days = days_since(date, now);
        if days > MAINTENANCE_INTERVAL_DAYS {
            let overdue = (days - MAINTENANCE_INTERVAL_DAYS) as f64 / 30.0;
            score -= overdue.min(MAX_MAINTENANCE_PENALTY);
        }
    }

    let score = score.clamp(0.0, 100.0).round() as u8;
    log::debug!("efficiency score {} for {:?}", score, state);

    EfficiencyRating {
        score,
        rating: Rating::from_score(score),
    }
}
