//! Identity endpoint port.

use async_trait::async_trait;
use sesame_domain::{AuthFailure, TokenPair};

/// Port for the remote identity endpoint.
///
/// Implementations perform a single token exchange per call and classify
/// every outcome into [`AuthFailure`]; they never panic and never surface
/// a raw transport error to the caller.
#[async_trait]
pub trait AuthenticationClient: Send + Sync {
    /// Exchange user credentials for a token pair (`grant_type=password`).
    ///
    /// # Errors
    ///
    /// Returns the classified failure: rejected credentials, transport
    /// failure, or an unexpected response.
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<TokenPair, AuthFailure>;

    /// Exchange a refresh token for a fresh pair (`grant_type=refresh_token`).
    ///
    /// # Errors
    ///
    /// Returns the classified failure: rejected token, transport failure,
    /// or an unexpected response.
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthFailure>;
}
