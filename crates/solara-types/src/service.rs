//! Auxiliary documents returned by the calculation service.

use serde::{Deserialize, Serialize};

/// Root document served at `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name banner.
    pub message: String,
    /// Path of the interactive API docs.
    #[serde(default)]
    pub docs: String,
}

/// Error body sent with a non-success status.
///
/// Only a string `detail` is meaningful to the user; validation failures on
/// the service side may carry a structured `detail` instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Error detail, in whatever shape the service produced.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extracts a human-readable detail from a raw response body.
    ///
    /// Returns `None` if the body is not JSON, has no `detail`, or the
    /// `detail` is not a string.
    ///
    /// # Example
    ///
    /// ```
    /// use solara_types::ErrorBody;
    ///
    /// assert_eq!(ErrorBody::detail_from(r#"{"detail":"X"}"#).as_deref(), Some("X"));
    /// assert_eq!(ErrorBody::detail_from("<html>"), None);
    /// ```
    #[must_use]
    pub fn detail_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body).ok()?.detail_text()
    }

    /// Returns the detail if it is a string.
    #[must_use]
    pub fn detail_text(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        }
    }
}
