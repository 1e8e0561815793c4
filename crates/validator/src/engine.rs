//! Recursive validator
//!
//! Walks a record's field descriptors depth-first, in declaration order, and
//! evaluates every compiled check against the live value. Failures become
//! [`FieldError`]s; nothing here returns `Err`.
//!
//! Paths are built from wire-visible names: `address.zip` for nested records,
//! `tags[2]` for element rules, `items[0].name` for records inside slices.

use std::collections::HashSet;

use crate::core::descriptor::FieldDescriptor;
use crate::core::error::{Diagnostic, FieldError};
use crate::core::shape::{RecordRef, Shape};
use crate::core::traits::{Describe, Record};
use crate::core::value::Value;
use crate::rules::applicability::RuleKind;
use crate::rules::compile::CompiledRule;
use crate::rules::messages::{EMPTY_ITEM_MESSAGE, default_message};

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates `value` against the rules declared on its type.
///
/// An empty list means the value is valid.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldmark_validator::prelude::*;
///
/// #[derive(Describe)]
/// struct Range {
///     #[validate("min=10,max=20")]
///     n: i32,
/// }
///
/// assert!(validate(&Range { n: 10 }).is_empty());
/// assert_eq!(validate(&Range { n: 21 })[0].field, "n");
/// ```
#[must_use]
pub fn validate<T: Describe>(value: &T) -> Vec<FieldError> {
    validate_record(value)
}

/// Validates a record behind a trait object.
#[must_use]
pub fn validate_record(record: &dyn Record) -> Vec<FieldError> {
    let mut errors = Vec::new();
    walk(record, "", &mut errors);
    if !errors.is_empty() {
        tracing::debug!(
            record = record.record_name(),
            errors = errors.len(),
            "validation failed"
        );
    }
    errors
}

/// Derives the descriptors of `T` and every record reachable from it, and
/// returns all configuration diagnostics found.
///
/// Descriptors are otherwise derived lazily, the first time a type is
/// validated or documented. Call this while registering routes to surface
/// annotation mistakes at start-up instead.
#[must_use]
pub fn prepare<T: Describe>() -> Vec<&'static Diagnostic> {
    let mut seen = HashSet::new();
    let mut diagnostics = Vec::new();
    collect_diagnostics(RecordRef::of::<T>(), &mut seen, &mut diagnostics);
    diagnostics
}

fn collect_diagnostics(
    record: RecordRef,
    seen: &mut HashSet<&'static str>,
    out: &mut Vec<&'static Diagnostic>,
) {
    if !seen.insert(record.type_name) {
        return;
    }
    for desc in record.fields() {
        out.extend(desc.diagnostics());
        if let Some(nested) = nested_record(desc.shape()) {
            collect_diagnostics(nested, seen, out);
        }
    }
}

fn nested_record(shape: &Shape) -> Option<RecordRef> {
    match shape {
        Shape::Record(record) => Some(*record),
        Shape::Optional(inner) | Shape::Array(inner) | Shape::Map(inner) => nested_record(inner),
        _ => None,
    }
}

// ============================================================================
// TRAVERSAL
// ============================================================================

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

fn walk(record: &dyn Record, prefix: &str, errors: &mut Vec<FieldError>) {
    for (index, desc) in record.descriptors().iter().enumerate() {
        let path = join(prefix, desc.path_name());
        validate_field(desc, &record.field(index), &path, errors);
    }
}

fn fail(desc: &FieldDescriptor, compiled: &CompiledRule, path: String) -> FieldError {
    let message = desc.message(
        compiled.kind.as_str(),
        default_message(compiled.kind, compiled.arg()),
    );
    FieldError::new(path, message).with_rule(compiled.kind.as_str())
}

fn validate_field(desc: &FieldDescriptor, value: &Value<'_>, path: &str, errors: &mut Vec<FieldError>) {
    let optional = desc.shape().is_optional();

    if matches!(value, Value::Null) {
        if let Some(required) = desc.check(RuleKind::Required) {
            errors.push(fail(desc, required, path.to_owned()));
        }
        return;
    }

    for compiled in desc.checks() {
        // A present optional satisfies `required` whatever it holds.
        if compiled.kind == RuleKind::Required && optional {
            continue;
        }
        match value {
            Value::List(items) if compiled.kind.is_element_rule() => {
                for (i, item) in items.iter().enumerate() {
                    if !compiled.check.passes(item) {
                        errors.push(fail(desc, compiled, format!("{path}[{i}]")));
                    }
                }
            }
            _ => {
                if !compiled.check.passes(value) {
                    errors.push(fail(desc, compiled, path.to_owned()));
                }
            }
        }
    }

    if let Value::List(items) = value {
        if has_special_elements(desc.shape())
            && !desc.has_rule(RuleKind::EmptyItemsAllowed)
            && items.iter().any(Value::is_zero)
        {
            let message = desc.message(
                RuleKind::EmptyItemsAllowed.as_str(),
                EMPTY_ITEM_MESSAGE.to_owned(),
            );
            errors.push(
                FieldError::new(path, message).with_rule(RuleKind::EmptyItemsAllowed.as_str()),
            );
        }
    }

    match value {
        Value::Record(nested) => walk(*nested, path, errors),
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if let Value::Record(nested) = item {
                    walk(*nested, &format!("{path}[{i}]"), errors);
                }
            }
        }
        _ => {}
    }
}

fn has_special_elements(shape: &Shape) -> bool {
    matches!(shape.element(), Some(Shape::DateTime | Shape::Uuid))
}
