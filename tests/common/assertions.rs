//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tint_core::Color;

const EPSILON: f64 = 1e-9;

/// Assert two floats agree to within rounding noise
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "Expected {expected}, got {actual}"
    );
}

/// Assert a color renders to the given hex string
pub fn assert_hex(color: Color, expected: &str) {
    assert_eq!(color.to_hex(), expected, "Unexpected color {:?}", color);
}

/// Assert every value lies inside `min..=max`
pub fn assert_all_within(values: &[f64], min: f64, max: f64) {
    for &value in values {
        assert!(
            (min..=max).contains(&value),
            "Value {value} escaped {min}..={max} in {values:?}"
        );
    }
}
