//! Example and default literals
//!
//! `#[schema(example = ..)]` and `#[schema(default = ..)]` are carried as text.
//! They are rendered as JSON of the field's kind; text that does not parse
//! for the kind is kept as a string and logged.

use fieldmark_validator::Shape;
use serde_json::Value;

/// Renders `literal` as a JSON value for a field of `shape`.
pub(crate) fn typed(literal: &str, shape: &Shape, record: &str, field: &str) -> Value {
    match parse(literal, shape.unwrap_optional()) {
        Some(value) => value,
        None => {
            tracing::warn!(
                record,
                field,
                literal,
                kind = %shape,
                "schema literal does not match the field kind, keeping it as text"
            );
            Value::String(literal.to_owned())
        }
    }
}

fn parse(literal: &str, shape: &Shape) -> Option<Value> {
    match shape {
        Shape::String | Shape::DateTime | Shape::Uuid => Some(Value::String(literal.to_owned())),
        Shape::Integer { signed: true, .. } => literal.parse::<i64>().ok().map(Value::from),
        Shape::Integer { signed: false, .. } => literal.parse::<u64>().ok().map(Value::from),
        Shape::Float { .. } => literal
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number),
        Shape::Bool => literal.parse::<bool>().ok().map(Value::Bool),
        Shape::Array(_) => match serde_json::from_str(literal) {
            Ok(value @ Value::Array(_)) => Some(value),
            _ => None,
        },
        Shape::Map(_) | Shape::Record(_) => match serde_json::from_str(literal) {
            Ok(value @ Value::Object(_)) => Some(value),
            _ => None,
        },
        Shape::Optional(inner) => parse(literal, inner),
    }
}
