//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use fieldmark_validator::prelude::*;
//! ```

pub use crate::core::{
    Describe, Diagnostic, FieldDescriptor, FieldError, Inspect, Record, RecordRef, Shape, Value,
};
pub use crate::engine::{prepare, validate, validate_record};

#[cfg(feature = "derive")]
pub use fieldmark_validator_macros::Describe;
