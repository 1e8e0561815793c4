//! Binding error types.

use std::fmt;

/// Where a set of named parameters was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Query,
    Path,
    Header,
    Cookie,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Location::Query => "query",
            Location::Path => "path",
            Location::Header => "header",
            Location::Cookie => "cookie",
        })
    }
}

/// The request could not be decoded into the target type.
///
/// Validation never runs when binding fails with one of these; rule
/// failures are reported through [`Bound::errors`](crate::Bound::errors).
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// `Content-Type` is present and names another format.
    #[error("unsupported content type: expected {expected}, found {found}")]
    UnsupportedContentType {
        /// Media type the entry point decodes.
        expected: &'static str,
        /// Media type the request declared.
        found: String,
    },

    /// Body exceeds the configured limit.
    #[error("payload too large: {actual} bytes > {limit} bytes")]
    PayloadTooLarge {
        /// Configured maximum body size.
        limit: usize,
        /// Actual body size.
        actual: usize,
    },

    /// Malformed JSON body.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed XML body.
    #[error("invalid XML body: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Malformed URL-encoded form body.
    #[error("invalid form body: {0}")]
    Form(#[source] serde::de::value::Error),

    /// Named parameters that do not decode into the target type.
    #[error("invalid {location} parameters: {source}")]
    Params {
        /// Parameter source.
        location: Location,
        #[source]
        source: serde::de::value::Error,
    },

    /// Parameters that could not be re-encoded for decoding.
    #[error("could not encode {location} parameters: {source}")]
    Encode {
        /// Parameter source.
        location: Location,
        #[source]
        source: serde_html_form::ser::Error,
    },

    /// A header value that is not visible ASCII.
    #[error("header {name} is not valid text")]
    InvalidHeader {
        /// Header name.
        name: String,
    },
}

impl BindError {
    /// Whether the client sent something this endpoint never accepts, as
    /// opposed to a payload that merely failed to parse.
    #[must_use]
    pub fn is_rejected_request(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedContentType { .. } | Self::PayloadTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_too_large_display() {
        let err = BindError::PayloadTooLarge {
            limit: 10,
            actual: 25,
        };
        assert_eq!(err.to_string(), "payload too large: 25 bytes > 10 bytes");
        assert!(err.is_rejected_request());
    }

    #[test]
    fn content_type_display() {
        let err = BindError::UnsupportedContentType {
            expected: "application/json",
            found: "text/plain".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported content type: expected application/json, found text/plain"
        );
    }

    #[test]
    fn decode_errors_are_not_rejections() {
        let err: BindError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(!err.is_rejected_request());
        assert!(err.to_string().starts_with("invalid JSON body"));
    }
}
