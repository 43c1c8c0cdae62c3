//! Kind-specific drift comparison.

use std::fmt::Display;

use rust_decimal::Decimal;

use crate::config::ReconcileConfig;
use crate::error::{DriftError, Result};
use crate::value::Value;

/// Decide whether `current` has drifted from `target`.
///
/// Numeric kinds compare `|current - target|` strictly against the tolerance
/// (`allowed_error`, or the configured default). Booleans and strings compare
/// exactly and ignore the tolerance.
pub fn differs(
    id: &str,
    current: &Value,
    target: &Value,
    allowed_error: Option<f64>,
    config: &ReconcileConfig,
) -> Result<bool> {
    match (current, target) {
        (Value::Int(c), Value::Int(t)) => Ok(int_differs(*c, *t, allowed_error)),
        (Value::Double(c), Value::Double(t)) => Ok(double_differs(
            *c,
            *t,
            allowed_error.unwrap_or(config.double_epsilon),
        )),
        (Value::Float(c), Value::Float(t)) => Ok(float_differs(
            *c,
            *t,
            allowed_error.map_or(config.float_epsilon, |e| e as f32),
        )),
        (Value::Boolean(c), Value::Boolean(t)) => Ok(c != t),
        (Value::String(c), Value::String(t)) => Ok(c != t),
        _ => Err(DriftError::malformed_value(
            id,
            target.kind(),
            format!("cannot compare against a {} value", current.kind()),
        )),
    }
}

/// Integer tolerance is truncated toward zero; a negative tolerance means
/// every value differs.
fn int_differs(current: i64, target: i64, allowed_error: Option<f64>) -> bool {
    let tolerance = allowed_error.unwrap_or(0.0).trunc();
    if tolerance < 0.0 {
        return true;
    }
    current.abs_diff(target) > tolerance as u64
}

// Floating kinds compare the shortest decimal text of each operand, so
// 1.0000001 is exactly 1e-7 away from 1.0 and the tolerance is strict.
// Operands outside decimal range (non-finite, or too many digits) fall back to
// binary arithmetic.

fn double_differs(current: f64, target: f64, tolerance: f64) -> bool {
    exceeds_in_decimal(&current, &target, &tolerance)
        .unwrap_or_else(|| (current - target).abs() > tolerance)
}

fn float_differs(current: f32, target: f32, tolerance: f32) -> bool {
    exceeds_in_decimal(&current, &target, &tolerance)
        .unwrap_or_else(|| (current - target).abs() > tolerance)
}

fn exceeds_in_decimal(
    current: &dyn Display,
    target: &dyn Display,
    tolerance: &dyn Display,
) -> Option<bool> {
    let current = to_decimal(current)?;
    let target = to_decimal(target)?;
    let tolerance = to_decimal(tolerance)?;
    Some(current.checked_sub(target)?.abs() > tolerance)
}

fn to_decimal(value: &dyn Display) -> Option<Decimal> {
    Decimal::from_str_exact(&value.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(current: Value, target: Value, allowed_error: Option<f64>) -> bool {
        differs("k", &current, &target, allowed_error, &ReconcileConfig::default()).unwrap()
    }

    #[test]
    fn test_int_exact_by_default() {
        assert!(!check(Value::Int(90), Value::Int(90), None));
        assert!(check(Value::Int(89), Value::Int(90), None));
    }

    #[test]
    fn test_int_tolerance_is_inclusive_boundary() {
        assert!(!check(Value::Int(85), Value::Int(90), Some(5.0)));
        assert!(check(Value::Int(84), Value::Int(90), Some(5.0)));
        // truncated, like an integer cast
        assert!(check(Value::Int(84), Value::Int(90), Some(5.9)));
    }

    #[test]
    fn test_int_extremes_do_not_overflow() {
        assert!(check(Value::Int(i64::MIN), Value::Int(i64::MAX), None));
        assert!(!check(Value::Int(i64::MIN), Value::Int(i64::MIN), None));
    }

    #[test]
    fn test_int_negative_tolerance_always_differs() {
        assert!(check(Value::Int(1), Value::Int(1), Some(-1.0)));
    }

    #[test]
    fn test_double_default_epsilon_boundary() {
        assert!(!check(Value::Double(1.0), Value::Double(1.0000001), None));
        assert!(!check(Value::Double(1.0), Value::Double(1.00000005), None));
        assert!(check(Value::Double(1.0), Value::Double(1.0000002), None));
    }

    #[test]
    fn test_double_large_magnitude_difference_is_not_absorbed() {
        assert!(check(
            Value::Double(1e16),
            Value::Double(1e16 + 2.0),
            Some(1.0)
        ));
        assert!(!check(
            Value::Double(1e16),
            Value::Double(1e16 + 2.0),
            Some(2.0)
        ));
    }

    #[test]
    fn test_double_tolerance_beyond_decimal_range() {
        assert!(!check(Value::Double(1.0), Value::Double(2.0), Some(1e30)));
        assert!(check(Value::Double(1e-30), Value::Double(0.0), Some(1e-31)));
    }

    #[test]
    fn test_double_zero_tolerance_is_exact() {
        let next = f64::from_bits(1.0_f64.to_bits() + 1);
        assert!(check(Value::Double(1.0), Value::Double(next), Some(0.0)));
        assert!(!check(Value::Double(1.0), Value::Double(1.0), Some(0.0)));
    }

    #[test]
    fn test_double_infinities() {
        assert!(check(Value::Double(f64::INFINITY), Value::Double(1.0), None));
        assert!(!check(
            Value::Double(f64::INFINITY),
            Value::Double(f64::INFINITY),
            None
        ));
        assert!(!check(Value::Double(f64::NAN), Value::Double(1.0), None));
    }

    #[test]
    fn test_float_uses_single_precision() {
        assert!(!check(Value::Float(0.5), Value::Float(0.5), None));
        assert!(check(Value::Float(0.5), Value::Float(0.6), None));
        assert!(!check(Value::Float(0.5), Value::Float(0.6), Some(0.2)));
    }

    #[test]
    fn test_float_difference_just_over_tolerance() {
        assert!(check(
            Value::Float(1000.0),
            Value::Float(1000.5),
            Some(0.4999)
        ));
        assert!(!check(Value::Float(1000.0), Value::Float(1000.5), Some(0.5)));
    }

    #[test]
    fn test_float_default_epsilon_boundary() {
        assert!(!check(Value::Float(1.0), Value::Float(1.0000001), None));
        assert!(check(Value::Float(1.0), Value::Float(1.0000002), None));
    }

    #[test]
    fn test_bool_and_string_ignore_tolerance() {
        assert!(check(Value::Boolean(false), Value::Boolean(true), Some(10.0)));
        assert!(!check(Value::Boolean(true), Value::Boolean(true), None));
        assert!(check(
            Value::String("dark".to_string()),
            Value::String("Dark".to_string()),
            Some(100.0)
        ));
    }

    #[test]
    fn test_kind_mismatch_is_error() {
        let result = differs(
            "k",
            &Value::Int(1),
            &Value::Double(1.0),
            None,
            &ReconcileConfig::default(),
        );
        assert!(result.is_err());
    }
}
