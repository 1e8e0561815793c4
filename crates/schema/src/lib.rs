//! # fieldmark-schema
//!
//! OpenAPI 3.0 schema derivation for types described with
//! `fieldmark_validator::Describe`.
//!
//! The validation rules a field declares are documented as the matching
//! schema keywords (`minlength=3` becomes `minLength: 3`, `enum=a|b` becomes
//! `enum: ["a", "b"]`). Records are registered once as named components and
//! referenced everywhere else.
//!
//! ```rust,ignore
//! use fieldmark_schema::{Dialect, SchemaGenerator};
//! use fieldmark_validator::Describe;
//!
//! #[derive(Describe)]
//! struct Address {
//!     #[validate("required,pattern=^[0-9]{5}$")]
//!     zip: String,
//! }
//!
//! #[derive(Describe)]
//! struct Order {
//!     shipping: Address,
//!     billing: Address,
//! }
//!
//! let mut generator = SchemaGenerator::new(Dialect::Json);
//! let body = generator.generate::<Order>();
//! let components = generator.finish();
//! assert_eq!(components.len(), 2);
//! ```

mod constraints;
mod dialect;
mod generator;
mod literal;
pub mod node;
mod registry;

pub use dialect::Dialect;
pub use generator::SchemaGenerator;
pub use node::{Reference, SchemaNode, SchemaOrRef, SchemaType, Xml};
pub use registry::ComponentRegistry;
