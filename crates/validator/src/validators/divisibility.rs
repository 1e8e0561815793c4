//! `multipleOf`

use crate::core::value::Value;
use crate::rules::compile::{Bound, FLOAT_SCALE};

/// Integer fields fail on a non-zero remainder. Float fields are scaled by
/// 10^6 and truncated before taking the remainder; the divisor arrives
/// pre-scaled.
#[must_use]
pub fn is_multiple(value: &Value<'_>, divisor: Bound) -> bool {
    match (divisor, value) {
        (Bound::Int(divisor), _) => value
            .as_i64()
            .is_none_or(|v| v.checked_rem(divisor).is_none_or(|r| r == 0)),
        (Bound::Float(scaled_divisor), Value::Float(v)) => {
            #[allow(clippy::cast_possible_truncation)]
            let (scaled, divisor) = ((v * FLOAT_SCALE) as i64, scaled_divisor as i64);
            scaled.checked_rem(divisor).is_none_or(|r| r == 0)
        }
        _ => true,
    }
}
