//! Authentication state machine.
//!
//! Turns a login request (or a startup resume from a stored refresh
//! token) into an observable sequence of states: `InProgress` followed by
//! exactly one terminal state. Failures are classified here and surfaced
//! only as states; nothing below this type throws into UI code.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use sesame_domain::{AuthFailure, AuthenticationState, TokenPair};

use crate::ports::AuthenticationClient;
use crate::session::TokenStore;

/// Which exchange a login attempt performs.
enum Grant {
    Password { username: String, password: String },
    Refresh { refresh_token: String },
}

/// Owner of the observable authentication state.
///
/// One controller per login surface. Constructed with its [`TokenStore`]
/// and an [`AuthenticationClient`] port; if a refresh token is already
/// stored, construction triggers a silent resume through the same path
/// as an explicit login.
///
/// State is published on a `watch` channel: single writer, any number of
/// readers, safe to observe from a rendering context while the network
/// completion writes from elsewhere.
pub struct AuthenticationController {
    tokens: Arc<TokenStore>,
    client: Arc<dyn AuthenticationClient>,
    state_tx: watch::Sender<AuthenticationState>,
    /// Generation of the most recently issued request. A resolution
    /// carrying an older generation is discarded, so a superseded
    /// in-flight call can never clobber a newer outcome.
    generation: AtomicU64,
}

impl AuthenticationController {
    /// Create the controller and, when a refresh token is stored,
    /// start the silent resume attempt.
    ///
    /// Must be called within a tokio runtime: attempts run on spawned
    /// tasks that hold only a `Weak` reference back to the controller.
    #[must_use]
    pub fn new(tokens: Arc<TokenStore>, client: Arc<dyn AuthenticationClient>) -> Arc<Self> {
        let (state_tx, _) = watch::channel(AuthenticationState::Unauthenticated);
        let controller = Arc::new(Self {
            tokens,
            client,
            state_tx,
            generation: AtomicU64::new(0),
        });

        if let Some(refresh_token) = controller.tokens.refresh_token() {
            tracing::info!("stored refresh token found, resuming session");
            controller.start(Grant::Refresh { refresh_token });
        }

        controller
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthenticationState> {
        self.state_tx.subscribe()
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> AuthenticationState {
        *self.state_tx.borrow()
    }

    /// Shared handle to the token store this controller owns.
    #[must_use]
    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Start a password login. Permitted from any state; a call made
    /// while another attempt is in flight supersedes it.
    pub fn login(self: &Arc<Self>, username: &str, password: &str) {
        self.start(Grant::Password {
            username: username.to_string(),
            password: password.to_string(),
        });
    }

    /// Start a refresh-token login (the explicit form of silent resume).
    pub fn login_with_token(self: &Arc<Self>, refresh_token: &str) {
        self.start(Grant::Refresh {
            refresh_token: refresh_token.to_string(),
        });
    }

    fn start(self: &Arc<Self>, grant: Grant) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_replace(AuthenticationState::InProgress);

        let client = Arc::clone(&self.client);
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            let outcome = match grant {
                Grant::Password { username, password } => {
                    tracing::info!("starting password login");
                    client.authenticate(&username, &password).await
                }
                Grant::Refresh { refresh_token } => {
                    tracing::info!("starting refresh-token login");
                    client.refresh(&refresh_token).await
                }
            };

            // A disposed controller drops the result on the floor.
            if let Some(controller) = weak.upgrade() {
                controller.finish(generation, outcome).await;
            }
        });
    }

    async fn finish(&self, generation: u64, outcome: Result<TokenPair, AuthFailure>) {
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding superseded login result");
            return;
        }

        match outcome {
            Ok(tokens) => {
                // Tokens are readable before any observer sees Authenticated.
                self.tokens.store(&tokens).await;
                tracing::info!("authentication succeeded");
                self.state_tx.send_replace(AuthenticationState::Authenticated);
            }
            Err(failure) => {
                match &failure {
                    AuthFailure::Unexpected { .. } => {
                        tracing::warn!(%failure, "anomalous identity endpoint response");
                    }
                    _ => tracing::info!(%failure, "authentication failed"),
                }
                self.state_tx.send_replace(failure.state());
            }
        }
    }
}
