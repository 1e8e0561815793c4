//! Rule predicates
//!
//! One module per rule family. Each predicate looks at a single [`Value`]:
//! collection-level rules (`minItems`, `uniqueItems`, ...) receive the whole
//! collection, element-level rules receive one element at a time.
//!
//! A value whose kind the check does not understand passes. Applicability is
//! settled when the descriptor is built, so this only happens for absent
//! optionals, which the engine filters out before getting here.

pub mod divisibility;
pub mod email;
pub mod enumeration;
pub mod length;
pub mod pattern;
pub mod range;
pub mod required;
pub mod size;
pub mod unique;

use crate::core::value::Value;
use crate::rules::compile::{Check, Format};

impl Check {
    /// Whether `value` satisfies the check.
    #[must_use]
    pub fn passes(&self, value: &Value<'_>) -> bool {
        match self {
            Check::Required => required::is_present(value),
            Check::Min(bound) => range::at_least(value, *bound),
            Check::Max(bound) => range::at_most(value, *bound),
            Check::MultipleOf(divisor) => divisibility::is_multiple(value, *divisor),
            Check::MinLength(min) => length::at_least(value, *min),
            Check::MaxLength(max) => length::at_most(value, *max),
            Check::MinItems(min) => size::at_least(value, *min),
            Check::MaxItems(max) => size::at_most(value, *max),
            Check::UniqueItems => unique::all_distinct(value),
            Check::Pattern(regex) => pattern::matches(value, regex.as_ref()),
            Check::Format(Format::Email) => email::is_email_value(value),
            Check::Format(Format::Other(_)) | Check::EmptyItemsAllowed => true,
            Check::Enum(choices) => enumeration::is_allowed(value, choices),
        }
    }
}
