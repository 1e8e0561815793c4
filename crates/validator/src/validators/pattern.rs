//! `pattern`

use regex::Regex;

use crate::core::value::Value;

/// Fails when the string does not match. A pattern that did not compile
/// (`None`) fails every string.
#[must_use]
pub fn matches(value: &Value<'_>, regex: Option<&Regex>) -> bool {
    match value {
        Value::Str(s) => regex.is_some_and(|re| re.is_match(s)),
        _ => true,
    }
}
