//! Rule compilation
//!
//! Turns a parsed [`Rule`] into a typed [`Check`] for one field kind, once,
//! when the field's descriptor is derived. Numeric arguments are parsed per
//! the field's numeric kind, patterns are compiled, enum literals are parsed.
//! Problems are pushed onto a diagnostic list instead of being raised.

use regex::Regex;

use crate::core::error::DiagnosticReason;
use crate::core::shape::Shape;
use crate::rules::applicability::{self, RuleKind};
use crate::rules::grammar::Rule;

/// Scale applied to both operands of a float `multipleOf`.
pub(crate) const FLOAT_SCALE: f64 = 1_000_000.0;

// ============================================================================
// CHECKS
// ============================================================================

/// A numeric rule argument, parsed for the field's kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Integer fields compare on a signed 64-bit widening.
    Int(i64),
    /// Float fields compare natively.
    Float(f64),
}

/// Enum alternatives, parsed for the field's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices {
    Str(Vec<String>),
    Int(Vec<i64>),
    Uint(Vec<u64>),
    Float(Vec<f64>),
}

/// Value format named by `format=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Enforced with the email grammar.
    Email,
    /// Accepted for documentation, not enforced.
    Other(String),
}

impl Format {
    /// Name as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Format::Email => "email",
            Format::Other(name) => name,
        }
    }
}

/// A compiled, kind-specific check.
#[derive(Debug, Clone)]
pub enum Check {
    Required,
    Min(Bound),
    Max(Bound),
    /// Integer divisor, or the float divisor pre-scaled by 10^6.
    MultipleOf(Bound),
    MinLength(usize),
    MaxLength(usize),
    MinItems(usize),
    MaxItems(usize),
    UniqueItems,
    EmptyItemsAllowed,
    /// `None` when the pattern failed to compile; every value then fails.
    Pattern(Option<Regex>),
    Format(Format),
    Enum(Choices),
}

/// A rule that survived applicability checking, ready for evaluation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Rule name.
    pub kind: RuleKind,
    /// Token as declared, for messages and schema output.
    pub rule: Rule,
    /// Typed check.
    pub check: Check,
}

impl CompiledRule {
    /// Argument as written.
    #[must_use]
    pub fn arg(&self) -> &str {
        self.rule.arg_or_empty()
    }
}

// ============================================================================
// COMPILATION
// ============================================================================

/// Compiles `rule` for a field of `shape`.
///
/// Returns `None` when the rule has to be dropped. Every reason for dropping
/// or degrading a rule is appended to `notes`.
pub fn compile(rule: &Rule, shape: &Shape, notes: &mut Vec<DiagnosticReason>) -> Option<CompiledRule> {
    let kind = match applicability::check(&rule.name, shape) {
        Ok(kind) => kind,
        Err(reason) => {
            notes.push(reason);
            return None;
        }
    };

    if kind.takes_argument() && rule.arg.as_deref().is_none_or(str::is_empty) {
        notes.push(DiagnosticReason::MissingArgument);
        return None;
    }

    let class = shape.class().element();
    let elem = shape.element().unwrap_or_else(|| shape.unwrap_optional());
    let arg = rule.arg_or_empty();
    let check = match kind {
        RuleKind::Required => Check::Required,
        RuleKind::UniqueItems => match class {
            Some(elem) if elem.is_comparable() => Check::UniqueItems,
            _ => {
                notes.push(DiagnosticReason::NotComparable {
                    kind: shape.element().map_or_else(|| shape.to_string(), ToString::to_string),
                });
                return None;
            }
        },
        RuleKind::EmptyItemsAllowed => Check::EmptyItemsAllowed,
        RuleKind::Min => Check::Min(parse_bound(arg, elem, notes)?),
        RuleKind::Max => Check::Max(parse_bound(arg, elem, notes)?),
        RuleKind::MultipleOf => Check::MultipleOf(parse_divisor(arg, elem, notes)?),
        RuleKind::MinLength => Check::MinLength(parse_count(arg, notes)?),
        RuleKind::MaxLength => Check::MaxLength(parse_count(arg, notes)?),
        RuleKind::MinItems => Check::MinItems(parse_count(arg, notes)?),
        RuleKind::MaxItems => Check::MaxItems(parse_count(arg, notes)?),
        RuleKind::Pattern => match Regex::new(arg) {
            Ok(regex) => Check::Pattern(Some(regex)),
            Err(err) => {
                notes.push(DiagnosticReason::InvalidPattern(err.to_string()));
                Check::Pattern(None)
            }
        },
        RuleKind::Format if arg == "email" => Check::Format(Format::Email),
        RuleKind::Format => {
            notes.push(DiagnosticReason::UnenforcedFormat(arg.to_owned()));
            Check::Format(Format::Other(arg.to_owned()))
        }
        RuleKind::Enum => Check::Enum(parse_choices(rule, shape, notes)),
    };

    Some(CompiledRule {
        kind,
        rule: rule.clone(),
        check,
    })
}

fn invalid(arg: &str, detail: impl Into<String>) -> DiagnosticReason {
    DiagnosticReason::InvalidArgument {
        arg: arg.to_owned(),
        detail: detail.into(),
    }
}

fn parse_int(arg: &str) -> Option<i64> {
    arg.parse::<i64>().ok().or_else(|| {
        // Unsigned literals beyond the signed range saturate like the values do.
        arg.parse::<u64>().ok().map(|_| i64::MAX)
    })
}

/// Parses a float literal at the field's width, then widens it.
///
/// `0.1` on an `f32` field has to equal the widened `0.1_f32`, not `0.1_f64`.
fn parse_float(arg: &str, bits: u8) -> Option<f64> {
    if bits == 32 {
        arg.parse::<f32>().ok().map(f64::from)
    } else {
        arg.parse::<f64>().ok()
    }
}

fn parse_bound(arg: &str, elem: &Shape, notes: &mut Vec<DiagnosticReason>) -> Option<Bound> {
    let bound = match elem {
        Shape::Float { bits } => parse_float(arg, *bits).map(Bound::Float),
        _ => parse_int(arg).map(Bound::Int),
    };
    if bound.is_none() {
        notes.push(invalid(arg, "not a number for this field kind"));
    }
    bound
}

fn parse_divisor(arg: &str, elem: &Shape, notes: &mut Vec<DiagnosticReason>) -> Option<Bound> {
    let divisor = match parse_bound(arg, elem, notes)? {
        Bound::Int(n) => Bound::Int(n),
        Bound::Float(f) => Bound::Float((f * FLOAT_SCALE).trunc()),
    };
    let is_zero = match divisor {
        Bound::Int(n) => n == 0,
        Bound::Float(f) => f == 0.0,
    };
    if is_zero {
        notes.push(invalid(arg, "divisor is zero"));
        return None;
    }
    Some(divisor)
}

fn parse_count(arg: &str, notes: &mut Vec<DiagnosticReason>) -> Option<usize> {
    let count = arg.parse::<usize>().ok();
    if count.is_none() {
        notes.push(invalid(arg, "not a non-negative integer"));
    }
    count
}

fn parse_choices(rule: &Rule, shape: &Shape, notes: &mut Vec<DiagnosticReason>) -> Choices {
    fn collect<T, F>(rule: &Rule, notes: &mut Vec<DiagnosticReason>, parse: F) -> Vec<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        rule.alternatives()
            .filter_map(|alt| {
                let parsed = parse(alt);
                if parsed.is_none() {
                    notes.push(invalid(alt, "enum literal does not parse for this field kind"));
                }
                parsed
            })
            .collect()
    }

    let elem = shape.element().unwrap_or_else(|| shape.unwrap_optional());
    match elem {
        Shape::Integer { signed: true, .. } => Choices::Int(collect(rule, notes, |s| s.parse().ok())),
        Shape::Integer { signed: false, .. } => Choices::Uint(collect(rule, notes, |s| s.parse().ok())),
        Shape::Float { bits } => Choices::Float(collect(rule, notes, |s| parse_float(s, *bits))),
        _ => Choices::Str(rule.alternatives().map(str::to_owned).collect()),
    }
}
