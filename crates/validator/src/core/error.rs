//! Error and diagnostic types
//!
//! Two very different things live here:
//!
//! - [`FieldError`] is a *validation failure*: data returned to the caller,
//!   never raised. An empty list means the value is valid.
//! - [`Diagnostic`] is a *configuration problem* in a rule annotation. It is
//!   logged once when a record's descriptors are derived and never blocks
//!   request handling.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A validation failure at a field path.
///
/// Serializes to exactly `{"field": ..., "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dot-joined wire-visible path, e.g. `address.zip` or `tags[1]`.
    pub field: String,
    /// Human-readable message.
    pub error: String,
    /// Rule that produced the failure.
    #[serde(skip)]
    pub rule: Cow<'static, str>,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
            rule: Cow::Borrowed(""),
        }
    }

    /// Records which rule failed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: impl Into<Cow<'static, str>>) -> Self {
        self.rule = rule.into();
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.error)
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Why a rule annotation was not (fully) honoured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticReason {
    /// The rule name is not part of the grammar.
    #[error("unknown rule")]
    UnknownRule,

    /// The rule exists but not for this field kind.
    #[error("rule does not apply to a field of kind {kind}")]
    NotApplicable {
        /// Field kind, as rendered by [`Shape`](crate::core::Shape)'s `Display`.
        kind: String,
    },

    /// The rule needs an argument and has none.
    #[error("rule requires an argument")]
    MissingArgument,

    /// The argument could not be parsed for this field kind.
    #[error("invalid argument {arg:?}: {detail}")]
    InvalidArgument {
        /// Argument as written.
        arg: String,
        /// What was wrong with it.
        detail: String,
    },

    /// The pattern does not compile; the rule fails every value.
    #[error("invalid pattern, every value will fail: {0}")]
    InvalidPattern(String),

    /// The format is accepted but only `email` is enforced.
    #[error("format {0:?} is not enforced at runtime")]
    UnenforcedFormat(String),

    /// `uniqueItems` on elements without a native equality.
    #[error("elements of kind {kind} are not comparable")]
    NotComparable {
        /// Element kind.
        kind: String,
    },
}

/// A configuration diagnostic for one rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{record}.{field}: `{rule}` {reason}")]
pub struct Diagnostic {
    /// Record type name.
    pub record: &'static str,
    /// Rust field name.
    pub field: &'static str,
    /// Offending rule token.
    pub rule: String,
    /// What went wrong.
    pub reason: DiagnosticReason,
}

impl Diagnostic {
    /// Whether this diagnostic reports a deliberate no-op rather than a
    /// misconfiguration.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self.reason, DiagnosticReason::UnenforcedFormat(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_serializes_two_keys() {
        let err = FieldError::new("Name", "is required").with_rule("required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"field": "Name", "error": "is required"}));
    }

    #[test]
    fn diagnostic_display_names_location() {
        let diag = Diagnostic {
            record: "Signup",
            field: "age",
            rule: "minlength=3".into(),
            reason: DiagnosticReason::NotApplicable { kind: "i32".into() },
        };
        assert_eq!(
            diag.to_string(),
            "Signup.age: `minlength=3` rule does not apply to a field of kind i32"
        );
        assert!(!diag.is_informational());
    }
}
