use indexmap::IndexMap;
use serde::Serialize;

use crate::node::{Reference, SchemaNode, SchemaOrRef};

/// Named record schemas collected during a documentation build.
///
/// Produced by [`SchemaGenerator::finish`](crate::SchemaGenerator::finish)
/// and read-only from then on. Entries keep registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentRegistry {
    schemas: IndexMap<String, SchemaNode>,
}

impl ComponentRegistry {
    pub(crate) fn new(schemas: IndexMap<String, SchemaNode>) -> Self {
        Self { schemas }
    }

    /// Schema registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Follows a component reference; inline nodes are returned as is.
    #[must_use]
    pub fn resolve<'a>(&'a self, schema: &'a SchemaOrRef) -> Option<&'a SchemaNode> {
        match schema {
            SchemaOrRef::Schema(node) => Some(node),
            SchemaOrRef::Ref(reference) => reference
                .component_name()
                .and_then(|name| self.get(name)),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Component names and schemas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.schemas.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Reference to a registered component.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<Reference> {
        self.contains(name).then(|| Reference::component(name))
    }

    /// Renders the OpenAPI `components` object: `{"schemas": {...}}`.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
