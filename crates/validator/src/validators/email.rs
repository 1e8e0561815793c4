//! `format=email`
//!
//! Two grammars are tried in turn: a strict ASCII one and an internationalised
//! one that also admits letters and digits from any script in the local part
//! and the domain labels.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::value::Value;

static ASCII_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("ASCII email grammar compiles")
});

static UNICODE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}\p{M}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}])?)*$",
    )
    .expect("Unicode email grammar compiles")
});

/// Whether `s` is an email address under either grammar.
#[must_use]
pub fn is_email(s: &str) -> bool {
    ASCII_EMAIL.is_match(s) || UNICODE_EMAIL.is_match(s)
}

/// Strings are checked; date-time values (where `format` is also legal)
/// pass.
#[must_use]
pub fn is_email_value(value: &Value<'_>) -> bool {
    match value {
        Value::Str(s) => is_email(s),
        _ => true,
    }
}
