//! Type-applicability checking
//!
//! Decides whether a rule is legal for a field's kind:
//!
//! | Rule | Legal kinds |
//! |---|---|
//! | `required` | any |
//! | `min`, `max`, `multipleOf` | integer, float (and slices thereof) |
//! | `minlength`, `maxlength` | string (and slice-of-string) |
//! | `minItems`, `maxItems` | slice, map |
//! | `uniqueItems`, `emptyItemsAllowed` | slice |
//! | `pattern` | string (and slice-of-string) |
//! | `format` | string, date-time (and slices thereof) |
//! | `enum` | string, integer, float (and slices thereof) |
//!
//! A mismatch is reported as a [`DiagnosticReason`]; the caller logs it and
//! carries on with the rules that do apply.

use std::fmt;
use std::str::FromStr;

use crate::core::error::DiagnosticReason;
use crate::core::shape::{KindClass, ScalarClass, Shape};

/// The closed set of rule names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Min,
    Max,
    MultipleOf,
    MinLength,
    MaxLength,
    MinItems,
    MaxItems,
    UniqueItems,
    EmptyItemsAllowed,
    Pattern,
    Format,
    Enum,
}

impl RuleKind {
    /// The name as written in annotations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::MultipleOf => "multipleOf",
            RuleKind::MinLength => "minlength",
            RuleKind::MaxLength => "maxlength",
            RuleKind::MinItems => "minItems",
            RuleKind::MaxItems => "maxItems",
            RuleKind::UniqueItems => "uniqueItems",
            RuleKind::EmptyItemsAllowed => "emptyItemsAllowed",
            RuleKind::Pattern => "pattern",
            RuleKind::Format => "format",
            RuleKind::Enum => "enum",
        }
    }

    /// Whether the rule needs a `=value` argument.
    #[must_use]
    pub fn takes_argument(self) -> bool {
        !matches!(
            self,
            RuleKind::Required | RuleKind::UniqueItems | RuleKind::EmptyItemsAllowed
        )
    }

    /// Whether the rule is evaluated per element on slice fields.
    #[must_use]
    pub fn is_element_rule(self) -> bool {
        matches!(
            self,
            RuleKind::Min
                | RuleKind::Max
                | RuleKind::MultipleOf
                | RuleKind::MinLength
                | RuleKind::MaxLength
                | RuleKind::Pattern
                | RuleKind::Format
                | RuleKind::Enum
        )
    }
}

impl FromStr for RuleKind {
    type Err = DiagnosticReason;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "required" => RuleKind::Required,
            "min" => RuleKind::Min,
            "max" => RuleKind::Max,
            "multipleOf" => RuleKind::MultipleOf,
            "minlength" => RuleKind::MinLength,
            "maxlength" => RuleKind::MaxLength,
            "minItems" => RuleKind::MinItems,
            "maxItems" => RuleKind::MaxItems,
            "uniqueItems" => RuleKind::UniqueItems,
            "emptyItemsAllowed" => RuleKind::EmptyItemsAllowed,
            "pattern" => RuleKind::Pattern,
            "format" => RuleKind::Format,
            "enum" => RuleKind::Enum,
            _ => return Err(DiagnosticReason::UnknownRule),
        })
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks `rule` against the field's shape.
///
/// # Errors
///
/// Returns [`DiagnosticReason::UnknownRule`] for names outside the grammar and
/// [`DiagnosticReason::NotApplicable`] when the kind is not in the table.
pub fn check(rule: &str, shape: &Shape) -> Result<RuleKind, DiagnosticReason> {
    let kind = rule.parse::<RuleKind>()?;
    if is_applicable(kind, shape.class()) {
        Ok(kind)
    } else {
        Err(DiagnosticReason::NotApplicable {
            kind: shape.to_string(),
        })
    }
}

fn is_applicable(rule: RuleKind, class: KindClass) -> bool {
    use ScalarClass as S;

    let element = class.element();
    match rule {
        RuleKind::Required => true,
        RuleKind::Min | RuleKind::Max | RuleKind::MultipleOf => {
            element.is_some_and(ScalarClass::is_numeric)
        }
        RuleKind::MinLength | RuleKind::MaxLength | RuleKind::Pattern => {
            element == Some(S::String)
        }
        RuleKind::MinItems | RuleKind::MaxItems => {
            matches!(class, KindClass::Slice(_) | KindClass::Map)
        }
        RuleKind::UniqueItems | RuleKind::EmptyItemsAllowed => {
            matches!(class, KindClass::Slice(_))
        }
        RuleKind::Format => matches!(element, Some(S::String | S::DateTime)),
        RuleKind::Enum => matches!(element, Some(S::String | S::Integer | S::Float)),
    }
}
