//! # fieldmark-validator
//!
//! Declarative field validation driven by per-field rule annotations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldmark_validator::prelude::*;
//!
//! #[derive(Describe)]
//! struct Signup {
//!     #[validate("required,minlength=2")]
//!     name: String,
//!     #[validate("required,format=email")]
//!     email: String,
//!     #[validate("min=0")]
//!     #[errmsg("min=Age cannot be negative")]
//!     age: i32,
//! }
//!
//! let errors = validate(&Signup { name: "A".into(), email: "bad".into(), age: -5 });
//! assert_eq!(errors.len(), 3);
//! ```
//!
//! ## Rule grammar
//!
//! `#[validate("...")]` takes a comma-separated list of `name` or
//! `name=value` tokens:
//!
//! | Rule | Applies to |
//! |---|---|
//! | `required` | any field |
//! | `min`, `max`, `multipleOf` | integers, floats, and slices of them |
//! | `minlength`, `maxlength`, `pattern` | strings and slices of strings |
//! | `minItems`, `maxItems` | slices and maps |
//! | `uniqueItems`, `emptyItemsAllowed` | slices |
//! | `format` | strings, date-times, and slices of them |
//! | `enum` | strings, integers, floats, and slices of them |
//!
//! A rule on the wrong kind, an unknown rule or a bad argument is a
//! [`Diagnostic`](core::Diagnostic): logged once through `tracing` when the
//! type's descriptors are derived, never returned from [`validate`].

pub mod core;
mod engine;
pub mod prelude;
pub mod rules;
pub mod validators;

pub use crate::core::{
    Describe, Diagnostic, DiagnosticReason, FieldDescriptor, FieldError, Inspect, Record, Shape,
    Value,
};
pub use engine::{prepare, validate, validate_record};

#[cfg(feature = "derive")]
pub use fieldmark_validator_macros::Describe;
