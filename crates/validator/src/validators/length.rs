//! `minlength` / `maxlength`
//!
//! Lengths count Unicode scalar values, not bytes.

use crate::core::value::Value;

fn char_count(value: &Value<'_>) -> Option<usize> {
    match value {
        Value::Str(s) => Some(s.chars().count()),
        _ => None,
    }
}

/// Inclusive minimum character count.
#[must_use]
pub fn at_least(value: &Value<'_>, min: usize) -> bool {
    char_count(value).is_none_or(|len| len >= min)
}

/// Inclusive maximum character count.
#[must_use]
pub fn at_most(value: &Value<'_>, max: usize) -> bool {
    char_count(value).is_none_or(|len| len <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Inspect;

    #[test]
    fn minimum() {
        assert!(!at_least(&"ab".inspect(), 3));
        assert!(at_least(&"abc".inspect(), 3));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(at_most(&"Ωμέγ".inspect(), 4));
        assert!(!at_least(&"日本".inspect(), 3));
    }
}
