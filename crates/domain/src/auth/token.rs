//! Token pair obtained from a successful exchange.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access/refresh token pair with metadata.
///
/// Produced only from a successful identity-endpoint response; immutable
/// once constructed. The access token lives in memory only, the refresh
/// token is handed to durable storage by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// The access token string.
    pub access_token: String,
    /// Token type (usually "Bearer").
    pub token_type: String,
    /// Validity window reported by the endpoint, in seconds.
    pub expires_in: u64,
    /// Refresh token for obtaining new access tokens.
    pub refresh_token: String,
    /// When this pair was obtained.
    pub obtained_at: DateTime<Utc>,
}

impl TokenPair {
    /// Create a new pair with the current timestamp.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: u64,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_in,
            refresh_token: refresh_token.into(),
            obtained_at: Utc::now(),
        }
    }

    /// When the access token expires, based on the reported window.
    ///
    /// Informational only; no variant of the flow schedules proactive
    /// refresh off this value.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.obtained_at + chrono::Duration::seconds(self.expires_in.cast_signed())
    }

    /// Time until expiry in seconds (negative once past).
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at() - Utc::now()).num_seconds()
    }

    /// Returns the Authorization header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}
