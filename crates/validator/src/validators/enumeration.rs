//! `enum`

use crate::core::value::Value;
use crate::rules::compile::Choices;

/// Fails unless the value equals one of the allowed literals.
///
/// Literals were parsed for the field's kind up front, so `enum=1|2` on a
/// `u8` field compares numbers, not text.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_allowed(value: &Value<'_>, choices: &Choices) -> bool {
    match (choices, value) {
        (Choices::Str(allowed), Value::Str(s)) => allowed.iter().any(|a| a == s),
        (Choices::Int(allowed), Value::Int(n)) => allowed.contains(n),
        (Choices::Uint(allowed), Value::Uint(n)) => allowed.contains(n),
        (Choices::Float(allowed), Value::Float(f)) => allowed.iter().any(|a| a == f),
        (_, Value::Null) => true,
        _ => false,
    }
}
