//! Schema generation
//!
//! Walks the same field descriptors the validator uses, but from type
//! information alone. Records are emitted once into the component table and
//! referenced everywhere else.

use std::collections::HashMap;

use fieldmark_validator::core::RecordRef;
use fieldmark_validator::{Describe, FieldDescriptor, Inspect, Shape};
use indexmap::IndexMap;

use crate::constraints;
use crate::dialect::Dialect;
use crate::literal;
use crate::node::{Reference, SchemaNode, SchemaOrRef, SchemaType, Xml};
use crate::registry::ComponentRegistry;

// ============================================================================
// GENERATOR
// ============================================================================

/// Builds schemas for bound types and collects their record components.
///
/// One generator serves one documentation build: generate every type the API
/// exposes, then call [`finish`](Self::finish) for the component table.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldmark_schema::{Dialect, SchemaGenerator};
///
/// let mut generator = SchemaGenerator::new(Dialect::Json);
/// let body = generator.generate::<Signup>();
/// let components = generator.finish();
/// assert!(components.contains("Signup"));
/// ```
#[derive(Debug, Default)]
pub struct SchemaGenerator {
    dialect: Dialect,
    components: IndexMap<String, SchemaNode>,
    /// Type identity to component name.
    names: HashMap<&'static str, String>,
}

impl SchemaGenerator {
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Schema of `T`: a reference for records, an inline node otherwise.
    pub fn generate<T: Inspect>(&mut self) -> SchemaOrRef {
        self.generate_shape(&T::shape())
    }

    /// Registers the record `T` and returns its reference.
    pub fn register<T: Describe>(&mut self) -> Reference {
        Reference::component(&self.register_record(RecordRef::of::<T>()))
    }

    /// Schema of an arbitrary field shape.
    pub fn generate_shape(&mut self, shape: &Shape) -> SchemaOrRef {
        match shape {
            Shape::String => SchemaNode::of_type(SchemaType::String).into(),
            Shape::Integer { signed, bits } => {
                let narrow = if *signed { *bits <= 32 } else { *bits <= 16 };
                let format = if narrow { "int32" } else { "int64" };
                SchemaNode::of_type(SchemaType::Integer).with_format(format).into()
            }
            Shape::Float { bits } => {
                let format = if *bits <= 32 { "float" } else { "double" };
                SchemaNode::of_type(SchemaType::Number).with_format(format).into()
            }
            Shape::Bool => SchemaNode::of_type(SchemaType::Boolean).into(),
            Shape::DateTime => SchemaNode::of_type(SchemaType::String)
                .with_format("date-time")
                .into(),
            Shape::Uuid => SchemaNode::of_type(SchemaType::String).with_format("uuid").into(),
            Shape::Array(elem) => {
                let items = self.generate_shape(elem);
                SchemaNode::array(items).into()
            }
            Shape::Map(value) => {
                let values = self.generate_shape(value);
                SchemaNode::map(values).into()
            }
            Shape::Optional(inner) => {
                let mut node = self.generate_shape(inner).into_decorated();
                node.nullable = Some(true);
                node.into()
            }
            Shape::Record(record) => Reference::component(&self.register_record(*record)).into(),
        }
    }

    /// Ends the build phase.
    #[must_use]
    pub fn finish(self) -> ComponentRegistry {
        ComponentRegistry::new(self.components)
    }

    // ========================================================================
    // RECORDS
    // ========================================================================

    fn register_record(&mut self, record: RecordRef) -> String {
        if let Some(name) = self.names.get(record.type_name) {
            return name.clone();
        }

        let name = self.unique_name(record);
        self.names.insert(record.type_name, name.clone());
        // Reserve the slot so self-references resolve to this entry.
        self.components.insert(name.clone(), SchemaNode::default());

        let node = self.record_node(record);
        self.components.insert(name.clone(), node);
        tracing::debug!(record = record.name, component = %name, "registered schema component");
        name
    }

    fn unique_name(&self, record: RecordRef) -> String {
        if !self.components.contains_key(record.name) {
            return record.name.to_owned();
        }
        let name = (2..)
            .map(|n| format!("{}{n}", record.name))
            .find(|candidate| !self.components.contains_key(candidate))
            .unwrap_or_else(|| record.type_name.to_owned());
        tracing::warn!(
            record = record.name,
            type_name = record.type_name,
            component = %name,
            "component name already taken by another type"
        );
        name
    }

    fn record_node(&mut self, record: RecordRef) -> SchemaNode {
        let mut node = SchemaNode::of_type(SchemaType::Object);
        node.description = record.description.map(str::to_owned);
        if self.dialect.is_xml() {
            node.xml = Some(Xml {
                name: Some(record.xml_name.unwrap_or(record.name).to_owned()),
                attribute: None,
            });
        }

        for desc in record.fields() {
            let (name, attribute) = self.property_name(desc);
            let property = self.property(record, desc, attribute);
            if desc.is_required() {
                node.required.push(name.clone());
            }
            node.properties.insert(name, property);
        }
        node
    }

    fn property_name(&self, desc: &FieldDescriptor) -> (String, bool) {
        let wire = desc.wire_name();
        match wire.strip_prefix(Dialect::ATTRIBUTE_PREFIX) {
            Some(stripped) if self.dialect.is_xml() => (stripped.to_owned(), true),
            _ => (wire.to_owned(), false),
        }
    }

    fn property(&mut self, record: RecordRef, desc: &FieldDescriptor, attribute: bool) -> SchemaOrRef {
        let generated = self.generate_shape(desc.shape());
        let decorated = attribute
            || desc.description().is_some()
            || desc.example().is_some()
            || desc.default_value().is_some();
        if matches!(generated, SchemaOrRef::Ref(_)) && !decorated {
            return generated;
        }

        let mut node = generated.into_decorated();
        constraints::apply(&mut node, desc.shape(), desc.checks());
        if let Some(text) = desc.description() {
            node.description = Some(text.to_owned());
        }
        if let Some(text) = desc.example() {
            node.example = Some(literal::typed(text, desc.shape(), record.name, desc.name()));
        }
        if let Some(text) = desc.default_value() {
            node.default = Some(literal::typed(text, desc.shape(), record.name, desc.name()));
        }
        if attribute {
            node.xml = Some(Xml {
                name: None,
                attribute: Some(true),
            });
        }
        node.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn integer_formats_follow_width() {
        let mut generator = SchemaGenerator::default();
        let format = |g: &mut SchemaGenerator, shape: Shape| {
            g.generate_shape(&shape)
                .as_schema()
                .and_then(|n| n.format.clone())
        };
        let int = |signed, bits| Shape::Integer { signed, bits };

        assert_eq!(format(&mut generator, int(true, 32)).as_deref(), Some("int32"));
        assert_eq!(format(&mut generator, int(true, 64)).as_deref(), Some("int64"));
        assert_eq!(format(&mut generator, int(false, 16)).as_deref(), Some("int32"));
        assert_eq!(format(&mut generator, int(false, 32)).as_deref(), Some("int64"));
        assert_eq!(format(&mut generator, Shape::Float { bits: 32 }).as_deref(), Some("float"));
        assert_eq!(format(&mut generator, Shape::Float { bits: 64 }).as_deref(), Some("double"));
    }

    #[test]
    fn optional_scalars_are_nullable() {
        let mut generator = SchemaGenerator::default();
        let schema = generator.generate::<Option<String>>();
        assert_eq!(
            serde_json::to_value(schema).unwrap(),
            json!({"type": "string", "nullable": true})
        );
    }

    #[test]
    fn collections() {
        let mut generator = SchemaGenerator::default();
        let schema = generator.generate_shape(&Shape::Map(Box::new(Shape::Array(Box::new(
            Shape::Uuid,
        )))));
        assert_eq!(
            serde_json::to_value(schema).unwrap(),
            json!({
                "type": "object",
                "additionalProperties": {
                    "type": "array",
                    "items": {"type": "string", "format": "uuid"},
                },
            })
        );
        assert!(generator.finish().is_empty());
    }
}
