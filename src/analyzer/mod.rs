//! Heating system analysis
//!
//! Pure, stateless functions over caller-owned snapshots:
//! - Efficiency scoring and rating
//! - Issue detection
//! - Heating load prediction
//! - Daily schedule construction
//! - Deterministic local recommendations

pub mod efficiency;
pub mod issues;
pub mod load;
pub mod recommendation;
pub mod report;
pub mod schedule;
pub mod state;

pub use efficiency::{calculate_efficiency_rating, days_since, EfficiencyRating, Rating};
pub use issues::{detect_issues, Issue, IssueKind, Severity};
pub use load::{predict_heating_load, Demand, LoadPrediction};
pub use recommendation::{local_recommendation, Recommendation, TemperatureSettings};
pub use report::{
    print_efficiency_report, print_load_report, print_recommendation, print_schedule_report,
};
pub use schedule::{build_schedule, HeatingSchedule, Period, SchedulePreferences, ScheduleSlot};
pub use state::{FuelType, HeatingState, UsageHistory, WeatherInput};
