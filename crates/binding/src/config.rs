//! Binder configuration

use serde::{Deserialize, Serialize};

/// Default body limit: 2 MiB.
pub const DEFAULT_MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Limits and strictness applied by a [`Binder`](crate::Binder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindConfig {
    /// Largest accepted body, in bytes.
    pub max_body_size: usize,

    /// Reject bodies whose `Content-Type` names another format. A request
    /// without `Content-Type` is always decoded.
    pub strict_content_type: bool,
}

impl Default for BindConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            strict_content_type: true,
        }
    }
}
