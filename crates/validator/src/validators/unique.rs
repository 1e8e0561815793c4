//! `uniqueItems`

use std::collections::HashSet;

use crate::core::value::Value;

/// Fails when two elements compare equal. `NaN` never equals anything.
#[must_use]
pub fn all_distinct(value: &Value<'_>) -> bool {
    let Value::List(items) = value else {
        return true;
    };
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter_map(Value::unique_key)
        .all(|key| seen.insert(key))
}
