//! Field kinds
//!
//! [`Shape`] is the closed set of kinds a bound field can have. It is derived
//! from the Rust type once (through [`Inspect::shape`](crate::core::Inspect::shape))
//! and drives both rule evaluation and schema generation, so every place that
//! needs to know "what is this field" dispatches on the same enum.

use std::fmt;

use crate::core::descriptor::FieldDescriptor;

// ============================================================================
// SHAPE
// ============================================================================

/// Type-level description of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// UTF-8 text.
    String,
    /// Fixed-width integer.
    Integer {
        /// `true` for `i*`, `false` for `u*`.
        signed: bool,
        /// Width in bits (`isize`/`usize` report 64).
        bits: u8,
    },
    /// IEEE-754 float.
    Float {
        /// 32 or 64.
        bits: u8,
    },
    /// `bool`.
    Bool,
    /// A point in time (`chrono::DateTime<Utc>`, `chrono::NaiveDateTime`).
    DateTime,
    /// A unique identifier (`uuid::Uuid`).
    Uuid,
    /// Ordered or unordered collection of elements.
    Array(Box<Shape>),
    /// Key/value collection; only the value shape is described.
    Map(Box<Shape>),
    /// A field that may be absent (`Option<T>`).
    Optional(Box<Shape>),
    /// A nested record with its own field descriptors.
    Record(RecordRef),
}

impl Shape {
    /// Strips any number of [`Shape::Optional`] layers.
    #[must_use]
    pub fn unwrap_optional(&self) -> &Shape {
        match self {
            Shape::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    /// Returns `true` for `Option<T>` fields.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        matches!(self, Shape::Optional(_))
    }

    /// Element shape of an array, looking through optional layers.
    #[must_use]
    pub fn element(&self) -> Option<&Shape> {
        match self.unwrap_optional() {
            Shape::Array(elem) => Some(elem.unwrap_optional()),
            _ => None,
        }
    }

    /// Kind class used by the applicability table.
    #[must_use]
    pub fn class(&self) -> KindClass {
        match self.unwrap_optional() {
            Shape::Array(elem) => KindClass::Slice(ScalarClass::of(elem.unwrap_optional())),
            Shape::Map(_) => KindClass::Map,
            other => KindClass::Scalar(ScalarClass::of(other)),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Integer { signed: true, bits } => write!(f, "i{bits}"),
            Shape::Integer { signed: false, bits } => write!(f, "u{bits}"),
            Shape::Float { bits } => write!(f, "f{bits}"),
            Shape::Bool => f.write_str("bool"),
            Shape::DateTime => f.write_str("date-time"),
            Shape::Uuid => f.write_str("uuid"),
            Shape::Array(elem) => write!(f, "[{elem}]"),
            Shape::Map(value) => write!(f, "map<{value}>"),
            Shape::Optional(inner) => write!(f, "{inner}?"),
            Shape::Record(record) => f.write_str(record.name),
        }
    }
}

// ============================================================================
// KIND CLASSES
// ============================================================================

/// Coarse kind of a single (non-collection) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarClass {
    String,
    Integer,
    Float,
    Bool,
    DateTime,
    Uuid,
    Record,
    /// Nested collections (`Vec<Vec<T>>`, `Vec<HashMap<..>>`).
    Collection,
}

impl ScalarClass {
    fn of(shape: &Shape) -> Self {
        match shape {
            Shape::String => Self::String,
            Shape::Integer { .. } => Self::Integer,
            Shape::Float { .. } => Self::Float,
            Shape::Bool => Self::Bool,
            Shape::DateTime => Self::DateTime,
            Shape::Uuid => Self::Uuid,
            Shape::Record(_) => Self::Record,
            Shape::Array(_) | Shape::Map(_) => Self::Collection,
            Shape::Optional(inner) => Self::of(inner),
        }
    }

    /// Numeric rules (`min`, `max`, `multipleOf`) accept this class.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Elements of this class can be compared for `uniqueItems`.
    #[must_use]
    pub fn is_comparable(self) -> bool {
        !matches!(self, Self::Record | Self::Collection)
    }
}

/// Kind class of a field, as consulted by the applicability checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindClass {
    /// A single value.
    Scalar(ScalarClass),
    /// A slice / vector / set of elements of the given class.
    Slice(ScalarClass),
    /// A map.
    Map,
}

impl KindClass {
    /// The class of the individual values rules are evaluated against.
    #[must_use]
    pub fn element(self) -> Option<ScalarClass> {
        match self {
            KindClass::Scalar(class) | KindClass::Slice(class) => Some(class),
            KindClass::Map => None,
        }
    }
}

// ============================================================================
// RECORD REFERENCE
// ============================================================================

/// Static handle on a record type, carried inside [`Shape::Record`].
///
/// Holds a function pointer rather than the descriptors themselves so that
/// self-referential records (`struct Node { children: Vec<Node> }`) can be
/// described without recursing at derivation time.
#[derive(Clone, Copy)]
pub struct RecordRef {
    /// Short type name, used as the component name.
    pub name: &'static str,
    /// Fully qualified type name, used as the component identity.
    pub type_name: &'static str,
    /// Element name for the XML dialect.
    pub xml_name: Option<&'static str>,
    /// Documentation of the record type.
    pub description: Option<&'static str>,
    fields: fn() -> &'static [FieldDescriptor],
}

impl RecordRef {
    /// Builds the reference for a described record type.
    #[must_use]
    pub fn of<T: crate::core::Describe>() -> Self {
        Self {
            name: T::NAME,
            type_name: std::any::type_name::<T>(),
            xml_name: T::XML_NAME,
            description: T::DESCRIPTION,
            fields: T::fields,
        }
    }

    /// Field descriptors of the referenced record, derived on first use.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        (self.fields)()
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRef")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RecordRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}
