//! Behavioural properties of the analysis functions
//!
//! Exercises the public analyzer API end to end: fixed scenarios with known
//! answers plus proptest checks over the input ranges.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use heating_advisor::analyzer::{
    build_schedule, calculate_efficiency_rating, detect_issues, local_recommendation,
    predict_heating_load, Demand, HeatingState, IssueKind, Period, Rating, SchedulePreferences,
    Severity, UsageHistory, WeatherInput,
};
use proptest::prelude::*;

mod common;
use common::assertions::assert_approx_eq;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
}

#[test]
fn test_rating_boundaries_are_exact() {
    let cases = [
        (59, Rating::Poor),
        (60, Rating::Fair),
        (69, Rating::Fair),
        (70, Rating::Good),
        (79, Rating::Good),
        (80, Rating::VeryGood),
        (89, Rating::VeryGood),
        (90, Rating::Excellent),
    ];
    for (score, expected) in cases {
        assert_eq!(Rating::from_score(score), expected, "score {}", score);
    }
    assert_eq!(Rating::VeryGood.label(), "Very Good");
}

#[test]
fn test_overdue_maintenance_penalty_is_capped() {
    let state = HeatingState {
        efficiency: 90.0,
        system_age: 3.0,
        last_maintenance: NaiveDate::from_ymd_opt(2010, 1, 1),
        ..HeatingState::default()
    };
    let rating = calculate_efficiency_rating(&state, now());
    assert_eq!(rating.score, 80);
    assert_eq!(rating.rating, Rating::VeryGood);
}

#[test]
fn test_load_for_mild_weather_is_zero() {
    let weather = WeatherInput {
        temperature: 20.0,
        humidity: 60.0,
    };
    let prediction = predict_heating_load(&weather, &UsageHistory::default());
    assert_eq!(prediction.predicted_load, 0.0);
    assert_eq!(prediction.estimated_hours, 0.0);
    assert_eq!(prediction.estimated_cost, 0.0);
    assert_eq!(prediction.demand, Demand::Normal);
}

#[test]
fn test_load_for_cold_humid_weather() {
    let weather = WeatherInput {
        temperature: 5.0,
        humidity: 85.0,
    };
    let usage = UsageHistory {
        average_cost_per_hour: 0.5,
        anomaly_detected: false,
    };
    let prediction = predict_heating_load(&weather, &usage);
    assert_eq!(prediction.temp_difference, 15.0);
    assert_eq!(prediction.humidity_factor, 1.2);
    assert_approx_eq(prediction.predicted_load, 18.0, 1e-9);
    assert_eq!(prediction.estimated_hours, 24.0);
    assert_approx_eq(prediction.estimated_cost, 12.0, 1e-9);
    assert_eq!(prediction.demand, Demand::High);
}

#[test]
fn test_ageing_unserviced_system_has_three_issues() {
    let state = HeatingState {
        efficiency: 65.0,
        system_age: 25.0,
        last_maintenance: None,
        ..HeatingState::default()
    };
    let issues = detect_issues(&state, None, now());

    let summary: Vec<_> = issues.iter().map(|i| (i.kind, i.severity)).collect();
    assert_eq!(
        summary,
        vec![
            (IssueKind::Efficiency, Severity::High),
            (IssueKind::Age, Severity::Medium),
            (IssueKind::Maintenance, Severity::Medium),
        ]
    );
}

#[test]
fn test_healthy_system_has_no_issues() {
    let state = HeatingState {
        last_maintenance: Some((now() - Duration::days(90)).date_naive()),
        ..HeatingState::default()
    };
    let usage = UsageHistory::default();
    assert!(detect_issues(&state, Some(&usage), now()).is_empty());
}

#[test]
fn test_schedule_defaults_and_single_override() {
    let defaults = build_schedule(&SchedulePreferences::default());
    let expected = [
        (Period::Morning, "06:00", 20.0),
        (Period::Daytime, "09:00", 18.0),
        (Period::Evening, "18:00", 21.0),
        (Period::Night, "23:00", 16.0),
        (Period::OffPeak, "14:00", 19.0),
    ];
    for (slot, (period, time, temp)) in defaults.slots.iter().zip(expected) {
        assert_eq!(slot.period, period);
        assert_eq!(slot.time, time);
        assert_eq!(slot.target_temp, temp);
    }

    let morning_only = build_schedule(&SchedulePreferences {
        morning: Some(19.0),
        ..Default::default()
    });
    for (custom, default) in morning_only.slots.iter().zip(&defaults.slots) {
        if custom.period == Period::Morning {
            assert_eq!(custom.target_temp, 19.0);
        } else {
            assert_eq!(custom, default);
        }
    }
}

fn heating_state() -> impl Strategy<Value = HeatingState> {
    (
        0.0f64..=100.0,
        0.0f64..=60.0,
        10.0f64..=28.0,
        proptest::option::of(-20_000i64..=20_000),
    )
        .prop_map(|(efficiency, system_age, target_temp, offset_days)| HeatingState {
            efficiency,
            system_age,
            target_temp,
            last_maintenance: offset_days.map(|d| (now() - Duration::days(d)).date_naive()),
            ..HeatingState::default()
        })
}

proptest! {
    #[test]
    fn prop_score_stays_in_range(state in heating_state()) {
        let rating = calculate_efficiency_rating(&state, now());
        prop_assert!(rating.score <= 100);
        prop_assert_eq!(rating.rating, Rating::from_score(rating.score));
    }

    #[test]
    fn prop_future_maintenance_never_lowers_score(state in heating_state(), ahead in 1i64..5_000) {
        let mut serviced_soon = state.clone();
        serviced_soon.last_maintenance = Some((now() + Duration::days(ahead)).date_naive());
        let mut never_serviced = state;
        never_serviced.last_maintenance = None;

        prop_assert_eq!(
            calculate_efficiency_rating(&serviced_soon, now()),
            calculate_efficiency_rating(&never_serviced, now())
        );
    }

    #[test]
    fn prop_savings_follow_efficiency_threshold(state in heating_state()) {
        let plan = local_recommendation(&state);
        let expected = if state.efficiency < 80.0 { 20.0 } else { 10.0 };
        prop_assert_eq!(plan.energy_savings_percent, expected);
        prop_assert_eq!(plan, local_recommendation(&state));
    }

    #[test]
    fn prop_load_outputs_are_bounded(
        temperature in -40.0f64..40.0,
        humidity in 0.0f64..=100.0,
        cost in 0.0f64..5.0,
    ) {
        let prediction = predict_heating_load(
            &WeatherInput { temperature, humidity },
            &UsageHistory { average_cost_per_hour: cost, anomaly_detected: false },
        );
        prop_assert!(prediction.predicted_load >= 0.0);
        prop_assert!((0.0..=24.0).contains(&prediction.estimated_hours));
        prop_assert!(prediction.estimated_cost >= 0.0);
    }
}
