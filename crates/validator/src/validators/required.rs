//! `required`

use crate::core::value::Value;

/// Fails only on the kind's zero value.
#[must_use]
pub fn is_present(value: &Value<'_>) -> bool {
    !value.is_zero()
}
