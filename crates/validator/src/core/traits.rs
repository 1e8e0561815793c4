//! Introspection traits
//!
//! Reflection is replaced by three small traits:
//!
//! - [`Inspect`] is implemented by every bindable field type; reports the
//!   static [`Shape`] and exposes a borrowed [`Value`] view of a live value.
//! - [`Record`] is the object-safe face of a struct: its descriptors plus
//!   positional access to field values. The validator walks `&dyn Record`.
//! - [`Describe`] is the sized face of a struct, with its names and the
//!   descriptor table derived on first use.
//!
//! All three are normally produced by `#[derive(Describe)]`.

use crate::core::descriptor::FieldDescriptor;
use crate::core::shape::Shape;
use crate::core::value::Value;

/// A type the engine can look inside.
pub trait Inspect {
    /// Static kind of the type.
    fn shape() -> Shape;

    /// Borrowed, kind-tagged view of the value.
    fn inspect(&self) -> Value<'_>;
}

/// Object-safe access to a record's fields.
pub trait Record {
    /// Short name of the record type.
    fn record_name(&self) -> &'static str;

    /// Field descriptors, in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Value of the field at `index` in [`Record::descriptors`].
    ///
    /// Out-of-range indices yield [`Value::Null`].
    fn field(&self, index: usize) -> Value<'_>;
}

/// A record type with a static descriptor table.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldmark_validator::prelude::*;
///
/// #[derive(Describe)]
/// struct Signup {
///     #[validate("required,minlength=2")]
///     name: String,
///     #[validate("min=0")]
///     age: i32,
/// }
///
/// let errors = validate(&Signup { name: "A".into(), age: -5 });
/// assert_eq!(errors.len(), 2);
/// ```
pub trait Describe: Record + Inspect + Sized + 'static {
    /// Short type name, used for component names.
    const NAME: &'static str;

    /// Root element name in the XML dialect, when it differs from [`Describe::NAME`].
    const XML_NAME: Option<&'static str> = None;

    /// Type-level documentation.
    const DESCRIPTION: Option<&'static str> = None;

    /// Field descriptors, derived and checked once per type.
    fn fields() -> &'static [FieldDescriptor];
}
