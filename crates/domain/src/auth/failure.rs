//! Classified authentication failures.

use thiserror::Error;

use super::AuthenticationState;

/// Why an exchange with the identity endpoint did not yield tokens.
///
/// The classification is total: every possible outcome of the network
/// call maps to exactly one variant, and every variant maps to exactly
/// one terminal [`AuthenticationState`]. Nothing else escapes the
/// controller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// The endpoint rejected the credentials or refresh token (HTTP 401).
    #[error("credentials or refresh token rejected")]
    InvalidCredentials,

    /// No response was obtained at all (connect failure, timeout, reset).
    #[error("network error: {message}")]
    Network {
        /// Transport-level error description.
        message: String,
    },

    /// The endpoint answered, but not in a way this client understands.
    #[error("unexpected response{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Unexpected {
        /// HTTP status, if a response was received.
        status: Option<u16>,
        /// What was wrong with it.
        message: String,
    },
}

impl AuthFailure {
    /// The terminal state this failure lands the flow in.
    #[must_use]
    pub const fn state(&self) -> AuthenticationState {
        match self {
            Self::InvalidCredentials => AuthenticationState::AuthenticationFailed,
            Self::Network { .. } => AuthenticationState::NetworkError,
            Self::Unexpected { .. } => AuthenticationState::UnknownError,
        }
    }

    /// Convenience constructor for transport failures.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Convenience constructor for unexpected responses.
    #[must_use]
    pub fn unexpected(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Unexpected {
            status,
            message: message.into(),
        }
    }
}
