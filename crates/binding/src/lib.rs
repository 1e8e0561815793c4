//! # fieldmark-binding
//!
//! Request binding for types described with `fieldmark_validator::Describe`:
//! decode one part of an `http::Request<Bytes>` into `T`, then run the rules
//! declared on `T`.
//!
//! ```rust,ignore
//! use fieldmark_binding::bind_form;
//!
//! let bound = bind_form::<Signup>(&request)?;
//! if !bound.is_valid() {
//!     return unprocessable(bound.errors);
//! }
//! ```
//!
//! Three outcomes are kept apart:
//!
//! - `Err(BindError)` when the payload cannot be decoded at all
//! - `Ok` with a non-empty [`Bound::errors`] when rules fail
//! - `Ok` with no errors when the value is valid
//!
//! The free functions use [`Binder::default()`]; build a [`Binder`] to change
//! the body limit or content-type strictness.

mod binder;
mod bound;
mod config;
mod error;
mod params;

pub use binder::Binder;
pub use bound::Bound;
pub use config::{BindConfig, DEFAULT_MAX_BODY_SIZE};
pub use error::{BindError, Location};
pub use params::PathParams;

use bytes::Bytes;
use fieldmark_validator::Describe;
use http::Request;
use serde::de::DeserializeOwned;

/// Binds a JSON body; rules run only when `validate` is set.
pub fn bind_json<T>(request: &Request<Bytes>, validate: bool) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().json(request, validate)
}

/// Binds an XML body; rules run only when `validate` is set.
pub fn bind_xml<T>(request: &Request<Bytes>, validate: bool) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().xml(request, validate)
}

/// Binds and validates a URL-encoded form body.
pub fn bind_form<T>(request: &Request<Bytes>) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().form(request)
}

/// Binds and validates the query string.
pub fn bind_query<T, B>(request: &Request<B>) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().query(request)
}

/// Binds and validates the router's path parameters.
pub fn bind_path<T, B>(request: &Request<B>) -> Bound<T>
where
    T: Describe + DeserializeOwned + Default,
{
    Binder::default().path(request)
}

/// Binds and validates headers named after `T`'s fields.
pub fn bind_header<T, B>(request: &Request<B>) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().header(request)
}

/// Binds and validates cookies named after `T`'s fields.
pub fn bind_cookie<T, B>(request: &Request<B>) -> Result<Bound<T>, BindError>
where
    T: Describe + DeserializeOwned,
{
    Binder::default().cookie(request)
}
