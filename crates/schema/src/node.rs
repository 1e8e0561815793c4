//! Schema node model
//!
//! An OpenAPI 3.0 schema object, reduced to the keywords fieldmark emits.
//! Unset keywords are omitted from the serialized form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Prefix of every component reference.
pub const COMPONENTS_PREFIX: &str = "#/components/schemas/";

// ============================================================================
// TYPES
// ============================================================================

/// JSON type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

/// XML placement hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xml {
    /// Element or attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rendered as an attribute of the parent element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<bool>,
}

// ============================================================================
// NODE
// ============================================================================

/// Structural description of a type or field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Used to decorate a reference with nullability or field docs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<SchemaOrRef>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<Xml>,
}

impl SchemaNode {
    /// A node of the given type.
    #[must_use]
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    /// Adds a `format` keyword.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// An `array` of `items`.
    #[must_use]
    pub fn array(items: SchemaOrRef) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type(SchemaType::Array)
        }
    }

    /// An `object` whose values follow `values`.
    #[must_use]
    pub fn map(values: SchemaOrRef) -> Self {
        Self {
            additional_properties: Some(Box::new(values)),
            ..Self::of_type(SchemaType::Object)
        }
    }

    /// Inline item schema of an array node, if any.
    pub fn items_mut(&mut self) -> Option<&mut SchemaNode> {
        match self.items.as_deref_mut() {
            Some(SchemaOrRef::Schema(items)) => Some(items),
            _ => None,
        }
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

/// A `$ref` to a registered component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    /// Reference to the component named `name`.
    #[must_use]
    pub fn component(name: &str) -> Self {
        Self {
            reference: format!("{COMPONENTS_PREFIX}{name}"),
        }
    }

    /// Name of the referenced component, for local component references.
    #[must_use]
    pub fn component_name(&self) -> Option<&str> {
        self.reference.strip_prefix(COMPONENTS_PREFIX)
    }
}

/// Either an inline node or a reference to a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref(Reference),
    Schema(SchemaNode),
}

impl SchemaOrRef {
    /// The inline node, if this is not a reference.
    #[must_use]
    pub fn as_schema(&self) -> Option<&SchemaNode> {
        match self {
            SchemaOrRef::Schema(node) => Some(node),
            SchemaOrRef::Ref(_) => None,
        }
    }

    /// The reference, if this is one.
    #[must_use]
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            SchemaOrRef::Ref(reference) => Some(reference),
            SchemaOrRef::Schema(_) => None,
        }
    }

    /// Turns a reference into an `allOf` wrapper so keywords can sit next to
    /// it; inline nodes are returned as they are.
    #[must_use]
    pub fn into_decorated(self) -> SchemaNode {
        match self {
            SchemaOrRef::Schema(node) => node,
            reference @ SchemaOrRef::Ref(_) => SchemaNode {
                all_of: vec![reference],
                ..SchemaNode::default()
            },
        }
    }
}

impl From<SchemaNode> for SchemaOrRef {
    fn from(node: SchemaNode) -> Self {
        SchemaOrRef::Schema(node)
    }
}

impl From<Reference> for SchemaOrRef {
    fn from(reference: Reference) -> Self {
        SchemaOrRef::Ref(reference)
    }
}
