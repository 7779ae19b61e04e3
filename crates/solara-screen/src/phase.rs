//! Submission phases of the estimate screen.

use solara_types::RequestError;

/// Observable phase of the estimate screen.
///
/// ```text
/// Idle -> Validating -> ValidationFailed
///                    -> Submitting -> Success | ServiceError | NetworkError
/// ```
///
/// Every phase except `Validating` and `Submitting` accepts a new
/// submission, which goes back through `Validating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Input is being checked.
    Validating,
    /// Input was rejected locally.
    ValidationFailed,
    /// A request is outstanding.
    Submitting,
    /// The last request produced an estimate.
    Success,
    /// The service answered with an error status.
    ServiceError,
    /// The request failed in transport.
    NetworkError,
}

impl Phase {
    /// Returns true while a request is outstanding.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Returns true if a new submission may start from this phase.
    #[must_use]
    pub const fn accepts_submit(&self) -> bool {
        !matches!(self, Self::Validating | Self::Submitting)
    }

    /// Returns true if the phase shows an error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed | Self::ServiceError | Self::NetworkError
        )
    }

    /// Returns true if `next` is a legal successor of this phase.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        match (self, next) {
            (Self::Validating, Self::ValidationFailed | Self::Submitting) => true,
            (Self::Submitting, Self::Success | Self::ServiceError | Self::NetworkError) => true,
            (_, Self::Validating) => self.accepts_submit(),
            _ => false,
        }
    }

    /// Returns the failure phase matching a request error.
    #[must_use]
    pub const fn for_error(error: &RequestError) -> Self {
        match error {
            RequestError::Validation(_) => Self::ValidationFailed,
            RequestError::Service { .. } => Self::ServiceError,
            RequestError::Network(_) => Self::NetworkError,
        }
    }

    /// Returns the phase as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::ValidationFailed => "validation_failed",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::ServiceError => "service_error",
            Self::NetworkError => "network_error",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
