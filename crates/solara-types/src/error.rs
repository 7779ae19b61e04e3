//! Error types for solara.

use thiserror::Error;

use crate::ValidationError;

/// Message used when the service fails without a readable `detail`.
pub const GENERIC_SERVER_ERROR: &str = "Unexpected server error.";

/// Result type alias for estimate requests.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors surfaced to the user for a submission.
///
/// All variants display as the bare message, so the user sees one error
/// string whatever the cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The input was rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// The service's `detail`, or [`GENERIC_SERVER_ERROR`].
        message: String,
    },

    /// The request failed before a usable response arrived.
    #[error("{0}")]
    Network(String),
}

impl RequestError {
    /// Creates a service error, falling back to the generic message when the
    /// service gave no detail.
    #[must_use]
    pub fn service(status: u16, detail: Option<String>) -> Self {
        Self::Service {
            status,
            message: detail.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        }
    }

    /// Creates a network error from any error, including its source chain.
    #[must_use]
    pub fn network(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::Network(message)
    }

    /// Returns the user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the HTTP status for service errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
