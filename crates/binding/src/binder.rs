//! Decode-then-validate entry points
//!
//! Every entry point decodes one part of the request into `T` and then runs
//! the rules declared on `T`. A decode failure is an `Err` and skips
//! validation; rule failures travel in [`Bound::errors`] next to the value.

use bytes::Bytes;
use fieldmark_validator::Describe;
use http::Request;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::bound::Bound;
use crate::config::BindConfig;
use crate::error::{BindError, Location};
use crate::params::{self, PathParams};

const JSON: &str = "application/json";
const XML: &str = "application/xml";
const FORM: &str = "application/x-www-form-urlencoded";

/// Binds requests under one [`BindConfig`].
#[derive(Debug, Clone, Default)]
pub struct Binder {
    config: BindConfig,
}

impl Binder {
    #[must_use]
    pub fn new(config: BindConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BindConfig {
        &self.config
    }

    // ========================================================================
    // BODY
    // ========================================================================

    /// Decodes a JSON body. Rules run only when `validate` is set.
    pub fn json<T>(&self, request: &Request<Bytes>, validate: bool) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let body = self.body(request, JSON, is_json)?;
        let value: T = serde_json::from_slice(body).inspect_err(|err| {
            tracing::debug!(record = T::NAME, format = "json", error = %err, "body could not be decoded");
        })?;
        Ok(finish(value, validate))
    }

    /// Decodes an XML body. Rules run only when `validate` is set.
    ///
    /// Fields renamed with an `@` prefix are read from attributes.
    pub fn xml<T>(&self, request: &Request<Bytes>, validate: bool) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let body = self.body(request, XML, is_xml)?;
        let value: T = quick_xml::de::from_reader(body).inspect_err(|err| {
            tracing::debug!(record = T::NAME, format = "xml", error = %err, "body could not be decoded");
        })?;
        Ok(finish(value, validate))
    }

    /// Decodes a URL-encoded form body and validates it.
    ///
    /// A repeated key fills a sequence field, so `tags=a&tags=b` binds to a
    /// `Vec` and the slice rules run on it.
    pub fn form<T>(&self, request: &Request<Bytes>) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let body = self.body(request, FORM, is_form)?;
        let value: T = serde_html_form::from_bytes(body).map_err(|err| {
            tracing::debug!(record = T::NAME, format = "form", error = %err, "body could not be decoded");
            BindError::Form(err)
        })?;
        Ok(Bound::checked(value))
    }

    // ========================================================================
    // PARAMETERS
    // ========================================================================

    /// Decodes the query string and validates it.
    pub fn query<T, B>(&self, request: &Request<B>) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let query = request.uri().query().unwrap_or_default();
        let value: T = serde_html_form::from_str(query).map_err(|source| BindError::Params {
            location: Location::Query,
            source,
        })?;
        Ok(Bound::checked(value))
    }

    /// Decodes the router's [`PathParams`] and validates them.
    ///
    /// Never fails: parameters that do not decode are logged and replaced by
    /// `T::default()`, which is then validated like any other value.
    pub fn path<T, B>(&self, request: &Request<B>) -> Bound<T>
    where
        T: Describe + DeserializeOwned + Default,
    {
        let empty = PathParams::default();
        let params = request.extensions().get::<PathParams>().unwrap_or(&empty);
        let value = match params::decode(Location::Path, params.pairs()) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(record = T::NAME, error = %err, "path parameters could not be decoded, using defaults");
                T::default()
            }
        };
        Bound::checked(value)
    }

    /// Decodes headers named after `T`'s fields and validates them.
    pub fn header<T, B>(&self, request: &Request<B>) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let pairs = params::header_pairs::<T, B>(request)?;
        let value = params::decode(Location::Header, &pairs)?;
        Ok(Bound::checked(value))
    }

    /// Decodes cookies named after `T`'s fields and validates them.
    pub fn cookie<T, B>(&self, request: &Request<B>) -> Result<Bound<T>, BindError>
    where
        T: Describe + DeserializeOwned,
    {
        let pairs = params::cookie_pairs::<T, B>(request)?;
        let value = params::decode(Location::Cookie, &pairs)?;
        Ok(Bound::checked(value))
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn body<'r>(
        &self,
        request: &'r Request<Bytes>,
        expected: &'static str,
        accepts: fn(&str) -> bool,
    ) -> Result<&'r [u8], BindError> {
        let body = request.body();
        if body.len() > self.config.max_body_size {
            return Err(BindError::PayloadTooLarge {
                limit: self.config.max_body_size,
                actual: body.len(),
            });
        }

        if self.config.strict_content_type
            && let Some(header) = request.headers().get(CONTENT_TYPE)
        {
            let found = header.to_str().map(media_type).unwrap_or_default();
            if !accepts(&found) {
                return Err(BindError::UnsupportedContentType { expected, found });
            }
        }
        Ok(body)
    }
}

fn finish<T: Describe>(value: T, validate: bool) -> Bound<T> {
    if validate {
        Bound::checked(value)
    } else {
        Bound::unchecked(value)
    }
}

/// Essence of a `Content-Type` value: parameters dropped, lowercased.
fn media_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn is_json(media: &str) -> bool {
    media == JSON || media.ends_with("+json")
}

fn is_xml(media: &str) -> bool {
    media == XML || media == "text/xml" || media.ends_with("+xml")
}

fn is_form(media: &str) -> bool {
    media == FORM
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("application/json", true)]
    #[case("application/JSON; charset=utf-8", true)]
    #[case("application/problem+json", true)]
    #[case("text/plain", false)]
    fn json_media_types(#[case] header: &str, #[case] expected: bool) {
        assert_eq!(is_json(&media_type(header)), expected);
    }

    #[rstest]
    #[case("application/xml", true)]
    #[case("text/xml; charset=utf-8", true)]
    #[case("application/atom+xml", true)]
    #[case("application/json", false)]
    fn xml_media_types(#[case] header: &str, #[case] expected: bool) {
        assert_eq!(is_xml(&media_type(header)), expected);
    }

    #[test]
    fn form_media_type_ignores_charset() {
        assert!(is_form(&media_type(
            "application/x-www-form-urlencoded; charset=UTF-8"
        )));
    }
}
