//! Rule-to-constraint mapping
//!
//! Each compiled rule of a field becomes the schema keyword that documents
//! it. Collection rules land on the collection node; element rules on a slice
//! land on its `items` node, mirroring where the validator evaluates them.

use fieldmark_validator::Shape;
use fieldmark_validator::rules::{Bound, Check, Choices, CompiledRule};
use serde_json::{Number, Value};

use crate::node::SchemaNode;

/// Applies every compiled rule of a field to its node.
pub(crate) fn apply(node: &mut SchemaNode, shape: &Shape, checks: &[CompiledRule]) {
    let is_map = matches!(shape.unwrap_optional(), Shape::Map(_));
    let is_slice = shape.element().is_some();

    for compiled in checks {
        match &compiled.check {
            // Collected into the parent's `required` list.
            Check::Required | Check::EmptyItemsAllowed => {}
            Check::MinItems(n) if is_map => node.min_properties = Some(*n),
            Check::MaxItems(n) if is_map => node.max_properties = Some(*n),
            Check::MinItems(n) => node.min_items = Some(*n),
            Check::MaxItems(n) => node.max_items = Some(*n),
            Check::UniqueItems => node.unique_items = Some(true),
            check if is_slice => {
                if let Some(items) = node.items_mut() {
                    apply_scalar(items, compiled, check);
                }
            }
            check => apply_scalar(node, compiled, check),
        }
    }
}

fn apply_scalar(node: &mut SchemaNode, compiled: &CompiledRule, check: &Check) {
    match check {
        Check::Min(bound) => node.minimum = bound_number(*bound),
        Check::Max(bound) => node.maximum = bound_number(*bound),
        // The compiled float divisor is pre-scaled; document the literal.
        Check::MultipleOf(_) => node.multiple_of = literal_number(compiled.arg()),
        Check::MinLength(n) => node.min_length = Some(*n),
        Check::MaxLength(n) => node.max_length = Some(*n),
        Check::Pattern(_) => node.pattern = Some(compiled.arg().to_owned()),
        Check::Format(format) => node.format = Some(format.as_str().to_owned()),
        Check::Enum(choices) => node.enum_values = Some(choice_values(choices)),
        Check::Required
        | Check::EmptyItemsAllowed
        | Check::MinItems(_)
        | Check::MaxItems(_)
        | Check::UniqueItems => {}
    }
}

fn bound_number(bound: Bound) -> Option<Number> {
    match bound {
        Bound::Int(n) => Some(Number::from(n)),
        Bound::Float(f) => Number::from_f64(f),
    }
}

fn literal_number(arg: &str) -> Option<Number> {
    if let Ok(n) = arg.parse::<i64>() {
        return Some(Number::from(n));
    }
    arg.parse::<f64>().ok().and_then(Number::from_f64)
}

fn choice_values(choices: &Choices) -> Vec<Value> {
    match choices {
        Choices::Str(values) => values.iter().cloned().map(Value::String).collect(),
        Choices::Int(values) => values.iter().map(|n| Value::from(*n)).collect(),
        Choices::Uint(values) => values.iter().map(|n| Value::from(*n)).collect(),
        Choices::Float(values) => values.iter().map(|f| Value::from(*f)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SchemaType;
    use fieldmark_validator::FieldDescriptor;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn node_for(shape: Shape, rules: &'static str, node: SchemaNode) -> Value {
        let desc = FieldDescriptor::builder("f", "f", shape.clone())
            .rules(rules)
            .build("Test");
        let mut node = node;
        apply(&mut node, &shape, desc.checks());
        serde_json::to_value(node).unwrap()
    }

    #[test]
    fn scalar_constraints() {
        let value = node_for(
            Shape::String,
            "required,minlength=3,maxlength=8,pattern=^[a-z]+$,enum=red|green",
            SchemaNode::of_type(SchemaType::String),
        );
        assert_eq!(
            value,
            json!({
                "type": "string",
                "minLength": 3,
                "maxLength": 8,
                "pattern": "^[a-z]+$",
                "enum": ["red", "green"],
            })
        );
    }

    #[test]
    fn float_divisor_is_documented_as_written() {
        let value = node_for(
            Shape::Float { bits: 64 },
            "min=0.5,multipleOf=0.25",
            SchemaNode::of_type(SchemaType::Number),
        );
        assert_eq!(value, json!({"type": "number", "minimum": 0.5, "multipleOf": 0.25}));
    }

    #[test]
    fn element_rules_go_on_items() {
        let shape = Shape::Array(Box::new(Shape::Integer {
            signed: true,
            bits: 32,
        }));
        let value = node_for(
            shape,
            "minItems=1,uniqueItems,max=9,enum=1|2|3",
            SchemaNode::array(SchemaNode::of_type(SchemaType::Integer).into()),
        );
        assert_eq!(
            value,
            json!({
                "type": "array",
                "items": {"type": "integer", "maximum": 9, "enum": [1, 2, 3]},
                "minItems": 1,
                "uniqueItems": true,
            })
        );
    }

    #[test]
    fn map_sizes_become_property_counts() {
        let value = node_for(
            Shape::Map(Box::new(Shape::Bool)),
            "minItems=1,maxItems=4",
            SchemaNode::map(SchemaNode::of_type(SchemaType::Boolean).into()),
        );
        assert_eq!(
            value,
            json!({
                "type": "object",
                "additionalProperties": {"type": "boolean"},
                "minProperties": 1,
                "maxProperties": 4,
            })
        );
    }

    #[test]
    fn format_overrides_the_kind_format() {
        let value = node_for(
            Shape::String,
            "format=email",
            SchemaNode::of_type(SchemaType::String),
        );
        assert_eq!(value, json!({"type": "string", "format": "email"}));
    }
}
