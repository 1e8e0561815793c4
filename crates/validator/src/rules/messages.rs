//! Error message resolution
//!
//! Custom messages come from a second annotation of `rule=message` pairs
//! separated by semicolons:
//!
//! ```text
//! required=Tell us your name;minlength=Names are at least two letters
//! ```
//!
//! Custom messages are used verbatim. Built-in messages interpolate the rule
//! argument.

use crate::rules::applicability::RuleKind;

/// Fixed message for zero-valued elements in date-time / identifier slices.
pub const EMPTY_ITEM_MESSAGE: &str = "must not contain empty items";

/// Parsed custom-message overrides for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    entries: Vec<(String, String)>,
}

impl Messages {
    /// Parses a `rule=message;rule=message` annotation.
    ///
    /// Pairs without `=` and pairs with an empty rule name are ignored. When a
    /// rule appears twice the first message wins.
    #[must_use]
    pub fn parse(annotation: &str) -> Self {
        let entries = annotation
            .split(';')
            .filter_map(|pair| {
                let (rule, message) = pair.split_once('=')?;
                let rule = rule.trim();
                (!rule.is_empty()).then(|| (rule.to_owned(), message.trim().to_owned()))
            })
            .collect();
        Self { entries }
    }

    /// Custom message registered for `rule`, if any.
    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, message)| message.as_str())
    }

    /// Returns the custom message for `rule`, or `fallback`.
    #[must_use]
    pub fn resolve(&self, rule: &str, fallback: String) -> String {
        self.get(rule).map_or(fallback, str::to_owned)
    }

    /// Whether no overrides are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in phrase for a failing rule.
///
/// `arg` is the rule argument as written; `enum` alternatives are listed
/// comma-separated.
#[must_use]
pub fn default_message(rule: RuleKind, arg: &str) -> String {
    match rule {
        RuleKind::Required => "is required".to_owned(),
        RuleKind::Min => format!("must be ≥ {arg}"),
        RuleKind::Max => format!("must be ≤ {arg}"),
        RuleKind::MultipleOf => format!("must be a multiple of {arg}"),
        RuleKind::MinLength => format!("must have at least {arg} characters"),
        RuleKind::MaxLength => format!("must have at most {arg} characters"),
        RuleKind::MinItems => format!("must have at least {arg} items"),
        RuleKind::MaxItems => format!("must have at most {arg} items"),
        RuleKind::UniqueItems => "must not contain duplicate items".to_owned(),
        RuleKind::EmptyItemsAllowed => EMPTY_ITEM_MESSAGE.to_owned(),
        RuleKind::Pattern => format!("must match the pattern {arg}"),
        RuleKind::Format if arg == "email" => "is not a valid email address".to_owned(),
        RuleKind::Format => format!("is not a valid {arg}"),
        RuleKind::Enum => {
            let allowed: Vec<&str> = arg.split('|').map(str::trim).collect();
            format!("must be one of: {}", allowed.join(", "))
        }
    }
}
