use serde::{Deserialize, Serialize};

/// Serialization dialect a schema is generated for.
///
/// Both dialects share the rule-to-constraint mapping. The XML dialect also
/// names records with `xml.name` and places `@`-prefixed fields as attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Json,
    Xml,
}

impl Dialect {
    /// Prefix marking a field as an XML attribute.
    pub const ATTRIBUTE_PREFIX: char = '@';

    #[must_use]
    pub fn is_xml(self) -> bool {
        matches!(self, Dialect::Xml)
    }
}
