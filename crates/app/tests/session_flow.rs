//! Integration tests for the full session flow.
//!
//! These tests wire the real adapters together: the reqwest identity
//! client against a mock HTTP server and the file-backed store in a
//! temporary directory, verifying login followed by a silent resume
//! across a simulated process restart.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sesame_application::{
    AuthenticationClient, AuthenticationController, SecureStore, TokenStore,
};
use sesame_domain::AuthenticationState;
use sesame_infrastructure::{FileSecureStore, IdentityClient, IdentityConfig};

fn build_controller(server_uri: &str, state_dir: &Path) -> Arc<AuthenticationController> {
    let token_url = Url::parse(server_uri)
        .and_then(|base| base.join("/token"))
        .unwrap();
    let client = Arc::new(IdentityClient::new(IdentityConfig::new(
        token_url,
        "integration-client",
    ))) as Arc<dyn AuthenticationClient>;
    let store = Arc::new(FileSecureStore::open(state_dir).unwrap()) as Arc<dyn SecureStore>;
    let tokens = Arc::new(TokenStore::new(store));
    AuthenticationController::new(tokens, client)
}

async fn wait_terminal(controller: &Arc<AuthenticationController>) -> AuthenticationState {
    let mut rx = controller.subscribe();
    *rx.wait_for(|s| s.is_terminal()).await.unwrap()
}

#[tokio::test]
async fn test_login_then_silent_resume_across_restart() {
    let server = MockServer::start().await;
    let state_dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "first-access",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "first-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First run: password login persists the refresh token.
    {
        let controller = build_controller(&server.uri(), state_dir.path());
        assert_eq!(controller.state(), AuthenticationState::Unauthenticated);

        controller.login("goodUser", "goodPassword");
        assert_eq!(wait_terminal(&controller).await, AuthenticationState::Authenticated);
        assert_eq!(
            controller.tokens().access_token().await.as_deref(),
            Some("first-access")
        );
    }

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=first-refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "second-access",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "second-refresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Second run over the same directory: construction alone resumes.
    let controller = build_controller(&server.uri(), state_dir.path());
    assert_eq!(wait_terminal(&controller).await, AuthenticationState::Authenticated);
    assert_eq!(
        controller.tokens().access_token().await.as_deref(),
        Some("second-access")
    );
    assert_eq!(
        controller.tokens().refresh_token().as_deref(),
        Some("second-refresh")
    );
}

#[tokio::test]
async fn test_expired_stored_token_lands_in_failed_state() {
    let server = MockServer::start().await;
    let state_dir = tempfile::tempdir().unwrap();

    {
        let store = FileSecureStore::open(state_dir.path()).unwrap();
        store.set("refresh_token", Some("expired-token"));
    }

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let controller = build_controller(&server.uri(), state_dir.path());
    assert_eq!(
        wait_terminal(&controller).await,
        AuthenticationState::AuthenticationFailed
    );

    // The failed resume must not clear the stored token.
    assert_eq!(
        controller.tokens().refresh_token().as_deref(),
        Some("expired-token")
    );
}
