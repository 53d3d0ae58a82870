//! Sesame session client - Main Entry Point
//!
//! Headless wiring of the session core: opens the durable store,
//! attempts a silent resume from the persisted refresh token, and when
//! credentials are provided via the environment, runs a password login.
//! Every observed state transition is logged.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use sesame_application::{
    AuthenticationClient, AuthenticationController, LoginForm, SecureStore, TokenStore,
};
use sesame_domain::AuthenticationState;
use sesame_infrastructure::{FileSecureStore, IdentityClient, IdentityConfig};

/// Fallback identity server base when `SESAME_IDENTITY_URL` is unset.
const DEFAULT_IDENTITY_URL: &str = "https://auth.example.com";

/// Fallback client identifier when `SESAME_CLIENT_ID` is unset.
const DEFAULT_CLIENT_ID: &str = "69bfdce9-2c9f-4a12-aa7b-4fe15e1228dc";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let identity_url = std::env::var("SESAME_IDENTITY_URL")
        .unwrap_or_else(|_| DEFAULT_IDENTITY_URL.to_string());
    let client_id =
        std::env::var("SESAME_CLIENT_ID").unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string());
    let state_dir = match std::env::var("SESAME_STATE_DIR") {
        Ok(dir) => std::path::PathBuf::from(dir),
        Err(_) => dirs::data_dir()
            .ok_or("no platform data directory; set SESAME_STATE_DIR")?
            .join("sesame"),
    };

    let base = Url::parse(&identity_url)?;
    let config = IdentityConfig::from_base_url(&base, client_id)?;
    tracing::info!(token_url = %config.token_url, "starting sesame v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(FileSecureStore::open(&state_dir)?) as Arc<dyn SecureStore>;
    let tokens = Arc::new(TokenStore::new(store));
    let client = Arc::new(IdentityClient::new(config)) as Arc<dyn AuthenticationClient>;
    let had_stored_token = tokens.refresh_token().is_some();

    let controller = AuthenticationController::new(tokens, client);
    let mut state_rx = controller.subscribe();

    if had_stored_token {
        let resumed = *state_rx.wait_for(|s| s.is_terminal()).await?;
        tracing::info!(state = ?resumed, "silent resume finished: {}", resumed.message());
        if resumed == AuthenticationState::Authenticated {
            return Ok(());
        }
    }

    let (Ok(username), Ok(password)) = (
        std::env::var("SESAME_USERNAME"),
        std::env::var("SESAME_PASSWORD"),
    ) else {
        tracing::info!("no credentials in environment, nothing to do");
        return Ok(());
    };

    let form = LoginForm::new(Arc::clone(&controller));
    form.set_username(username);
    form.set_password(password);
    if !*form.login_enabled().borrow() {
        return Err("username and password must be non-empty".into());
    }
    form.login();

    let finished = *state_rx.wait_for(|s| s.is_terminal()).await?;
    tracing::info!(state = ?finished, "login finished: {}", finished.message());

    if finished == AuthenticationState::Authenticated {
        Ok(())
    } else {
        Err(finished.message().into())
    }
}
