//! Internal support utilities for the derive.
//!
//! Attribute parsing, diagnostics, and helpers over syn types.

pub mod attrs;
pub mod diag;
pub mod serde_attrs;
pub mod utils;
