//! `minItems` / `maxItems`

use crate::core::value::Value;

fn item_count(value: &Value<'_>) -> Option<usize> {
    match value {
        Value::List(items) => Some(items.len()),
        Value::Map(len) => Some(*len),
        _ => None,
    }
}

/// Inclusive minimum element count.
#[must_use]
pub fn at_least(value: &Value<'_>, min: usize) -> bool {
    item_count(value).is_none_or(|n| n >= min)
}

/// Inclusive maximum element count.
#[must_use]
pub fn at_most(value: &Value<'_>, max: usize) -> bool {
    item_count(value).is_none_or(|n| n <= max)
}
