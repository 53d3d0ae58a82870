//! Authentication state machine values for UI binding.
//!
//! This module defines the observable states of a login attempt,
//! enabling the UI to display appropriate feedback at each stage.

use serde::{Deserialize, Serialize};

/// Current state of the authentication flow.
///
/// This enum enables the UI to show appropriate feedback:
/// - `Unauthenticated`: login form interactive, no attempt made
/// - `InProgress`: attempt in flight, show spinner and disable inputs
/// - `Authenticated`: tokens obtained, navigate onwards
/// - failure states: show the matching message, re-enable inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationState {
    /// No attempt has been made yet.
    #[default]
    Unauthenticated,

    /// An exchange with the identity endpoint is in flight.
    InProgress,

    /// The most recent attempt succeeded; tokens are readable.
    Authenticated,

    /// The endpoint rejected the credentials or refresh token (HTTP 401).
    AuthenticationFailed,

    /// The endpoint could not be reached at all.
    NetworkError,

    /// The endpoint answered with an unexpected status or body.
    UnknownError,
}

impl AuthenticationState {
    /// Returns true if this state ends one login attempt cycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Authenticated
                | Self::AuthenticationFailed
                | Self::NetworkError
                | Self::UnknownError
        )
    }

    /// Returns true while an exchange is in flight.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns true for the failure terminals.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed | Self::NetworkError | Self::UnknownError
        )
    }

    /// Whether the login inputs should accept interaction in this state.
    ///
    /// Inputs are locked only while a request is in flight; every failure
    /// state hands control back to the user.
    #[must_use]
    pub const fn allows_input(self) -> bool {
        !self.is_in_progress()
    }

    /// Get a user-friendly message for this state.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unauthenticated => "Please sign in",
            Self::InProgress => "Signing in...",
            Self::Authenticated => "Signed in",
            Self::AuthenticationFailed => "Invalid username or password",
            Self::NetworkError => "Could not reach the server, check your connection",
            Self::UnknownError => "Something went wrong, please try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminal_states() {
        assert!(!AuthenticationState::Unauthenticated.is_terminal());
        assert!(!AuthenticationState::InProgress.is_terminal());
        assert!(AuthenticationState::Authenticated.is_terminal());
        assert!(AuthenticationState::AuthenticationFailed.is_terminal());
        assert!(AuthenticationState::NetworkError.is_terminal());
        assert!(AuthenticationState::UnknownError.is_terminal());
    }

    #[test]
    fn test_inputs_locked_only_in_progress() {
        assert!(AuthenticationState::Unauthenticated.allows_input());
        assert!(!AuthenticationState::InProgress.allows_input());
        assert!(AuthenticationState::AuthenticationFailed.allows_input());
        assert!(AuthenticationState::NetworkError.allows_input());
        assert!(AuthenticationState::UnknownError.allows_input());
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        let failures = [
            AuthenticationState::AuthenticationFailed,
            AuthenticationState::NetworkError,
            AuthenticationState::UnknownError,
        ];
        for a in failures {
            assert!(a.is_failure());
            for b in failures {
                if a != b {
                    assert_ne!(a.message(), b.message());
                }
            }
        }
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&AuthenticationState::AuthenticationFailed)
            .unwrap_or_default();
        assert_eq!(json, "\"authentication_failed\"");
    }
}
