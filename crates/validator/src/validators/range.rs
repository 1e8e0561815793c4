//! `min` / `max`
//!
//! Integer fields compare on a signed 64-bit widening, with unsigned values
//! past `i64::MAX` saturating. Float fields compare natively, so `NaN` fails
//! both bounds.

use crate::core::value::Value;
use crate::rules::compile::Bound;

/// Inclusive lower bound.
#[must_use]
pub fn at_least(value: &Value<'_>, min: Bound) -> bool {
    match (min, value) {
        (Bound::Float(min), Value::Float(v)) => *v >= min,
        (Bound::Int(min), _) => value.as_i64().is_none_or(|v| v >= min),
        _ => true,
    }
}

/// Inclusive upper bound.
#[must_use]
pub fn at_most(value: &Value<'_>, max: Bound) -> bool {
    match (max, value) {
        (Bound::Float(max), Value::Float(v)) => *v <= max,
        (Bound::Int(max), _) => value.as_i64().is_none_or(|v| v <= max),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Inspect;
    use rstest::rstest;

    #[rstest]
    #[case(9, false)]
    #[case(10, true)]
    #[case(20, true)]
    #[case(21, true)]
    fn lower_bound_is_inclusive(#[case] input: i32, #[case] ok: bool) {
        assert_eq!(at_least(&input.inspect(), Bound::Int(10)), ok);
    }

    #[rstest]
    #[case(9, true)]
    #[case(20, true)]
    #[case(21, false)]
    fn upper_bound_is_inclusive(#[case] input: i32, #[case] ok: bool) {
        assert_eq!(at_most(&input.inspect(), Bound::Int(20)), ok);
    }

    #[test]
    fn huge_unsigned_saturates() {
        assert!(at_most(&u64::MAX.inspect(), Bound::Int(i64::MAX)));
        assert!(!at_most(&u64::MAX.inspect(), Bound::Int(i64::MAX - 1)));
    }

    #[test]
    fn floats_compare_natively() {
        assert!(at_least(&0.1f64.inspect(), Bound::Float(0.1)));
        assert!(!at_least(&f64::NAN.inspect(), Bound::Float(0.0)));
        assert!(!at_most(&f64::NAN.inspect(), Bound::Float(0.0)));
    }
}
