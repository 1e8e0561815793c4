//! # fieldmark-validator-macros
//!
//! `#[derive(Describe)]` for `fieldmark-validator`.
//!
//! The derive implements `Record`, `Inspect` and `Describe` for a struct with
//! named fields, building the field descriptor table once, on first use.
//!
//! ## Attributes
//!
//! | Attribute | Where | Meaning |
//! |-----------|-------|---------|
//! | `#[validate("...")]` | field | Rule annotation, e.g. `"required,minlength=2"` |
//! | `#[errmsg("...")]` | field | Custom messages, e.g. `"required=Tell us your name"` |
//! | `#[schema(example = ..., default = ...)]` | field | Schema hints |
//! | `#[schema(skip)]` | field | Leave the field out entirely |
//! | `#[schema(xml_name = "...")]` | struct | Root element name in XML schemas |
//! | `#[serde(rename / rename_all / skip)]` | both | Honoured for wire names |
//!
//! Doc comments on the struct and its fields become schema descriptions.
//!
//! ## Example
//!
//! ```ignore
//! use fieldmark_validator::Describe;
//!
//! /// A new account.
//! #[derive(Describe, serde::Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct Signup {
//!     /// Display name.
//!     #[validate("required,minlength=2")]
//!     #[errmsg("required=Tell us your name")]
//!     display_name: String,
//!
//!     #[validate("min=0,max=150")]
//!     #[schema(example = 42)]
//!     age: u8,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod describe;
mod support;

/// Derives `Record`, `Inspect` and `Describe`.
///
/// See the [crate documentation](crate) for the supported attributes.
/// Generic structs, tuple structs, unit structs and enums are rejected.
#[proc_macro_derive(Describe, attributes(validate, errmsg, schema))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive(input)
}
