//! Named parameters outside the body
//!
//! Path segments, headers and cookies arrive as name/value text. They are
//! collected into pairs and decoded with the same URL-encoded deserializer
//! the query string uses, so `age=7` becomes an integer the same way in
//! every location.

use fieldmark_validator::Describe;
use http::Request;
use http::header::COOKIE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BindError, Location};

// ============================================================================
// PATH PARAMETERS
// ============================================================================

/// Path parameters captured by the router.
///
/// Insert it as a request extension before binding:
///
/// ```rust,ignore
/// request.extensions_mut().insert(PathParams::from_iter([("id", "42")]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Value of the first parameter called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ============================================================================
// DECODING
// ============================================================================

/// Decodes name/value pairs into `T`.
pub(crate) fn decode<T, K, V>(location: Location, pairs: &[(K, V)]) -> Result<T, BindError>
where
    T: DeserializeOwned,
    K: Serialize,
    V: Serialize,
{
    let encoded = serde_html_form::to_string(pairs)
        .map_err(|source| BindError::Encode { location, source })?;
    serde_html_form::from_str(&encoded).map_err(|source| BindError::Params { location, source })
}

/// Header values for every field of `T`, looked up by wire-visible name.
///
/// Header names are case-insensitive; the first value of a repeated header
/// is used.
pub(crate) fn header_pairs<T: Describe, B>(
    request: &Request<B>,
) -> Result<Vec<(&'static str, &str)>, BindError> {
    let mut pairs = Vec::new();
    for desc in T::fields() {
        let Some(value) = request.headers().get(desc.wire_name()) else {
            continue;
        };
        let text = value.to_str().map_err(|_| BindError::InvalidHeader {
            name: desc.wire_name().to_owned(),
        })?;
        pairs.push((desc.wire_name(), text));
    }
    Ok(pairs)
}

/// Cookie values for every field of `T`, looked up by wire-visible name.
///
/// Cookie names are case-sensitive. All `Cookie` headers are merged; the
/// first occurrence of a name wins.
pub(crate) fn cookie_pairs<T: Describe, B>(
    request: &Request<B>,
) -> Result<Vec<(&'static str, &str)>, BindError> {
    let mut jar = Vec::new();
    for header in request.headers().get_all(COOKIE) {
        let text = header.to_str().map_err(|_| BindError::InvalidHeader {
            name: COOKIE.as_str().to_owned(),
        })?;
        jar.extend(parse_cookies(text));
    }

    Ok(T::fields()
        .iter()
        .filter_map(|desc| {
            jar.iter()
                .find(|(name, _)| *name == desc.wire_name())
                .map(|(_, value)| (desc.wire_name(), *value))
        })
        .collect())
}

/// Splits a `Cookie` header into name/value pairs.
fn parse_cookies(header: &str) -> impl Iterator<Item = (&str, &str)> {
    header.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        (!name.is_empty()).then(|| (name, value.trim().trim_matches('"')))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cookie_header_parsing() {
        let pairs: Vec<_> = parse_cookies("session=abc; theme=\"dark\"; junk; =x").collect();
        assert_eq!(pairs, [("session", "abc"), ("theme", "dark")]);
    }

    #[test]
    fn path_params_lookup() {
        let params = PathParams::from_iter([("id", "42"), ("slug", "intro")]);
        assert_eq!(params.get("slug"), Some("intro"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn pairs_decode_with_type_coercion() {
        #[derive(serde::Deserialize)]
        struct Page {
            page: u32,
            q: String,
        }

        let page: Page = decode(Location::Query, &[("page", "3"), ("q", "a b&c")]).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.q, "a b&c");
    }

    #[test]
    fn repeated_names_decode_into_a_sequence() {
        #[derive(serde::Deserialize)]
        struct Ids {
            id: Vec<u32>,
        }

        let ids: Ids = decode(Location::Path, &[("id", "1"), ("id", "2")]).unwrap();
        assert_eq!(ids.id, [1, 2]);
    }

    #[test]
    fn decode_failure_names_the_location() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Page {
            page: u32,
        }

        let err = decode::<Page, _, _>(Location::Cookie, &[("page", "x")]).unwrap_err();
        assert!(matches!(
            err,
            BindError::Params {
                location: Location::Cookie,
                ..
            }
        ));
    }
}
