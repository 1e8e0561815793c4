//! Borrowed value views
//!
//! [`Value`] is what a rule actually looks at. Every [`Inspect`] type maps
//! itself onto one variant, so rule evaluation never needs to know the
//! concrete Rust type of a field.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::core::shape::Shape;
use crate::core::traits::{Inspect, Record};

// ============================================================================
// VALUE
// ============================================================================

/// Kind-tagged view of a live field value.
#[derive(Clone)]
pub enum Value<'a> {
    /// An absent optional value.
    Null,
    /// Text.
    Str(&'a str),
    /// Signed integer, widened to 64 bits.
    Int(i64),
    /// Unsigned integer, widened to 64 bits.
    Uint(u64),
    /// Float, widened to 64 bits.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Date-time normalised to UTC.
    DateTime(DateTime<Utc>),
    /// Unique identifier.
    Uuid(Uuid),
    /// Collection elements, in iteration order.
    List(Vec<Value<'a>>),
    /// A map; only its size is visible to rules.
    Map(usize),
    /// A nested record.
    Record(&'a dyn Record),
}

impl Value<'_> {
    /// Whether this is the kind's zero value.
    ///
    /// Records are zero when every field is zero. Optional fields of a record
    /// are zero only when absent, mirroring nil-pointer semantics.
    ///
    /// The zero date-time is `DateTime::<Utc>::default()`, the Unix epoch, so
    /// `1970-01-01T00:00:00Z` counts as empty. Use `Option<DateTime<Utc>>`
    /// where the epoch is a legitimate value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Bool(b) => !*b,
            Value::DateTime(dt) => *dt == DateTime::<Utc>::default(),
            Value::Uuid(id) => id.is_nil(),
            Value::List(items) => items.is_empty(),
            Value::Map(len) => *len == 0,
            Value::Record(record) => record
                .descriptors()
                .iter()
                .enumerate()
                .all(|(index, desc)| {
                    let value = record.field(index);
                    if desc.shape().is_optional() {
                        matches!(value, Value::Null)
                    } else {
                        value.is_zero()
                    }
                }),
        }
    }

    /// Signed 64-bit view of an integer; unsigned values beyond `i64::MAX`
    /// saturate.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Uint(n) => Some(i64::try_from(*n).unwrap_or(i64::MAX)),
            _ => None,
        }
    }

    /// Hashable identity used by `uniqueItems`; `None` for values that are
    /// never equal to anything (NaN) or not comparable at all.
    #[must_use]
    pub fn unique_key(&self) -> Option<UniqueKey<'_>> {
        match self {
            Value::Null => Some(UniqueKey::Null),
            Value::Str(s) => Some(UniqueKey::Str(s)),
            Value::Int(n) => Some(UniqueKey::Int(*n)),
            Value::Uint(n) => Some(UniqueKey::Uint(*n)),
            Value::Float(n) if n.is_nan() => None,
            // -0.0 == 0.0 under native equality.
            Value::Float(n) if *n == 0.0 => Some(UniqueKey::Float(0f64.to_bits())),
            Value::Float(n) => Some(UniqueKey::Float(n.to_bits())),
            Value::Bool(b) => Some(UniqueKey::Bool(*b)),
            Value::DateTime(dt) => Some(UniqueKey::DateTime(*dt)),
            Value::Uuid(id) => Some(UniqueKey::Uuid(*id)),
            Value::List(_) | Value::Map(_) | Value::Record(_) => None,
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Value::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Value::Uuid(id) => f.debug_tuple("Uuid").field(id).finish(),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(len) => f.debug_tuple("Map").field(len).finish(),
            Value::Record(record) => f.debug_tuple("Record").field(&record.record_name()).finish(),
        }
    }
}

/// Equality key for `uniqueItems`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueKey<'a> {
    Null,
    Str(&'a str),
    Int(i64),
    Uint(u64),
    Float(u64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
}

// ============================================================================
// SCALAR IMPLEMENTATIONS
// ============================================================================

impl Inspect for String {
    fn shape() -> Shape {
        Shape::String
    }

    fn inspect(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl Inspect for &str {
    fn shape() -> Shape {
        Shape::String
    }

    fn inspect(&self) -> Value<'_> {
        Value::Str(*self)
    }
}

impl Inspect for Cow<'_, str> {
    fn shape() -> Shape {
        Shape::String
    }

    fn inspect(&self) -> Value<'_> {
        Value::Str(self.as_ref())
    }
}

macro_rules! inspect_int {
    ($($ty:ty => $variant:ident, $signed:literal, $bits:literal);* $(;)?) => {
        $(
            impl Inspect for $ty {
                fn shape() -> Shape {
                    Shape::Integer { signed: $signed, bits: $bits }
                }

                #[allow(trivial_numeric_casts)]
                fn inspect(&self) -> Value<'_> {
                    Value::$variant(*self as _)
                }
            }
        )*
    };
}

inspect_int! {
    i8 => Int, true, 8;
    i16 => Int, true, 16;
    i32 => Int, true, 32;
    i64 => Int, true, 64;
    isize => Int, true, 64;
    u8 => Uint, false, 8;
    u16 => Uint, false, 16;
    u32 => Uint, false, 32;
    u64 => Uint, false, 64;
    usize => Uint, false, 64;
}

impl Inspect for f32 {
    fn shape() -> Shape {
        Shape::Float { bits: 32 }
    }

    fn inspect(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn shape() -> Shape {
        Shape::Float { bits: 64 }
    }

    fn inspect(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl Inspect for bool {
    fn shape() -> Shape {
        Shape::Bool
    }

    fn inspect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

// ============================================================================
// SPECIAL TYPES
// ============================================================================

impl Inspect for DateTime<Utc> {
    fn shape() -> Shape {
        Shape::DateTime
    }

    fn inspect(&self) -> Value<'_> {
        Value::DateTime(*self)
    }
}

impl Inspect for DateTime<FixedOffset> {
    fn shape() -> Shape {
        Shape::DateTime
    }

    fn inspect(&self) -> Value<'_> {
        Value::DateTime(self.with_timezone(&Utc))
    }
}

impl Inspect for NaiveDateTime {
    fn shape() -> Shape {
        Shape::DateTime
    }

    fn inspect(&self) -> Value<'_> {
        Value::DateTime(self.and_utc())
    }
}

impl Inspect for Uuid {
    fn shape() -> Shape {
        Shape::Uuid
    }

    fn inspect(&self) -> Value<'_> {
        Value::Uuid(*self)
    }
}

// ============================================================================
// WRAPPERS AND COLLECTIONS
// ============================================================================

impl<T: Inspect> Inspect for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(Box::new(T::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        self.as_ref().map_or(Value::Null, Inspect::inspect)
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn inspect(&self) -> Value<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        Value::List(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, S: BuildHasher> Inspect for HashSet<T, S> {
    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        Value::List(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn shape() -> Shape {
        Shape::Array(Box::new(T::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        Value::List(self.iter().map(Inspect::inspect).collect())
    }
}

impl<K, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Map(Box::new(V::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        Value::Map(self.len())
    }
}

impl<K, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map(Box::new(V::shape()))
    }

    fn inspect(&self) -> Value<'_> {
        Value::Map(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values() {
        assert!(String::new().inspect().is_zero());
        assert!(0u8.inspect().is_zero());
        assert!(0.0f64.inspect().is_zero());
        assert!(false.inspect().is_zero());
        assert!(Uuid::nil().inspect().is_zero());
        assert!(DateTime::<Utc>::default().inspect().is_zero());
        assert!(Vec::<i32>::new().inspect().is_zero());
        assert!(Inspect::inspect(&None::<String>).is_zero());

        assert!(!"x".inspect().is_zero());
        assert!(!(-1i32).inspect().is_zero());
        assert!(!Uuid::from_u128(7).inspect().is_zero());
    }

    #[test]
    fn unsigned_saturates_into_signed_range() {
        assert_eq!(u64::MAX.inspect().as_i64(), Some(i64::MAX));
        assert_eq!(42u32.inspect().as_i64(), Some(42));
        assert_eq!("42".inspect().as_i64(), None);
    }

    #[test]
    fn float_keys_follow_native_equality() {
        assert_eq!((-0.0f64).inspect().unique_key(), 0.0f64.inspect().unique_key());
        assert_eq!(f64::NAN.inspect().unique_key(), None);
    }

    #[test]
    fn option_flattens_present_values() {
        assert!(matches!(Inspect::inspect(&Some(3u8)), Value::Uint(3)));
        assert_eq!(
            <Option<Vec<String>>>::shape(),
            Shape::Optional(Box::new(Shape::Array(Box::new(Shape::String))))
        );
    }
}
