//! Token storage with a memory/durable split.
//!
//! The access token lives only in process memory and disappears on
//! restart by construction; the refresh token is delegated to the
//! injected durable store so a returning user can be resumed silently.

use std::sync::Arc;
use tokio::sync::RwLock;

use sesame_domain::TokenPair;

use crate::ports::SecureStore;

/// Key of the refresh-token slot in the durable store.
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Holder for the two session tokens.
///
/// Mutated exclusively by the [`AuthenticationController`] on a successful
/// exchange; a failed or in-flight attempt never touches it.
///
/// [`AuthenticationController`]: crate::session::AuthenticationController
#[derive(Debug)]
pub struct TokenStore {
    access_token: RwLock<Option<String>>,
    store: Arc<dyn SecureStore>,
}

impl TokenStore {
    /// Create a token store over the given durable backend.
    #[must_use]
    pub fn new(store: Arc<dyn SecureStore>) -> Self {
        Self {
            access_token: RwLock::new(None),
            store,
        }
    }

    /// The in-memory access token, if a successful exchange has happened.
    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    /// Replace the in-memory access token.
    pub async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }

    /// The durably stored refresh token, surviving process restarts.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Write (or clear) the durable refresh token.
    ///
    /// The write is observable by the next read before this returns.
    pub fn set_refresh_token(&self, token: Option<&str>) {
        self.store.set(REFRESH_TOKEN_KEY, token);
    }

    /// Record a successful exchange: both tokens, atomically from the
    /// caller's point of view (the controller publishes `Authenticated`
    /// only after this returns).
    pub async fn store(&self, tokens: &TokenPair) {
        self.set_access_token(Some(tokens.access_token.clone())).await;
        self.set_refresh_token(Some(&tokens.refresh_token));
    }
}
