//! Core types
//!
//! - [`Shape`] and [`Value`]: what a field is, and what it currently holds
//! - [`Inspect`], [`Record`], [`Describe`]: the introspection traits that
//!   `#[derive(Describe)]` implements
//! - [`FieldDescriptor`]: per-field metadata, derived once per type
//! - [`FieldError`] and [`Diagnostic`]: validation failures and
//!   configuration problems

pub mod descriptor;
pub mod error;
pub mod shape;
pub mod traits;
pub mod value;

pub use descriptor::{FieldDescriptor, FieldDescriptorBuilder};
pub use error::{Diagnostic, DiagnosticReason, FieldError};
pub use shape::{KindClass, RecordRef, ScalarClass, Shape};
pub use traits::{Describe, Inspect, Record};
pub use value::{UniqueKey, Value};
