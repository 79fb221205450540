//! Test assertion helpers
//!
//! Floating-point comparisons for computed temperatures, loads and costs.

/// Assert that two floating-point values are approximately equal
///
/// Use this instead of `assert_eq!` for values that went through
/// arithmetic, such as set points derived from a target temperature.
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that a JSON number field is approximately `expected`
#[allow(dead_code)]
pub fn assert_json_number(value: &serde_json::Value, field: &str, expected: f64) {
    let actual = value[field]
        .as_f64()
        .unwrap_or_else(|| panic!("field '{}' is not a number in {}", field, value));
    assert_approx_eq(actual, expected, 1e-9);
}
