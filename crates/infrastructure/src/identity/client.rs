//! reqwest-based implementation of the `AuthenticationClient` port.
//!
//! Performs the form-encoded token exchange against the identity
//! endpoint and classifies every outcome into an `AuthFailure`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use sesame_application::AuthenticationClient;
use sesame_domain::{AuthFailure, TokenPair};

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token endpoint path below the identity server base URL.
pub const TOKEN_ENDPOINT_PATH: &str = "idp/api/v1/token";

/// Successful token response from the identity endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    refresh_token: String,
}

/// Error response body some endpoints return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Configuration for the identity endpoint.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Full URL of the token endpoint.
    pub token_url: Url,
    /// Client identifier sent with every grant.
    pub client_id: String,
}

impl IdentityConfig {
    /// Build a config pointing directly at a token endpoint.
    #[must_use]
    pub fn new(token_url: Url, client_id: impl Into<String>) -> Self {
        Self {
            token_url,
            client_id: client_id.into(),
        }
    }

    /// Build a config from an identity server base URL, appending the
    /// fixed token endpoint path.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot serve as a base.
    pub fn from_base_url(
        base: &Url,
        client_id: impl Into<String>,
    ) -> Result<Self, url::ParseError> {
        Ok(Self::new(base.join(TOKEN_ENDPOINT_PATH)?, client_id))
    }
}

/// Identity endpoint client.
pub struct IdentityClient {
    config: IdentityConfig,
    http: reqwest::Client,
}

impl IdentityClient {
    /// Create a client for the configured endpoint.
    #[must_use]
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create with an existing reqwest client (shared connection pool).
    #[must_use]
    pub const fn with_http_client(config: IdentityConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Perform one token exchange and classify the outcome.
    async fn token_request(&self, params: &[(&str, &str)]) -> Result<TokenPair, AuthFailure> {
        let body = serde_urlencoded::to_string(params)
            .map_err(|e| AuthFailure::unexpected(None, format!("failed to encode form: {e}")))?;

        let response = self
            .http
            .post(self.config.token_url.clone())
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e: reqwest::Error| AuthFailure::network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let token_response: TokenResponse = response.json().await.map_err(|e| {
                    AuthFailure::unexpected(
                        Some(StatusCode::OK.as_u16()),
                        format!("malformed token response: {e}"),
                    )
                })?;
                Ok(TokenPair::new(
                    token_response.access_token,
                    token_response.token_type,
                    token_response.expires_in,
                    token_response.refresh_token,
                ))
            }
            StatusCode::UNAUTHORIZED => Err(AuthFailure::InvalidCredentials),
            status => {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<TokenErrorResponse>(&text).map_or_else(
                    |_| text.trim().to_string(),
                    |e| e.error_description.unwrap_or(e.error),
                );
                tracing::warn!(status = status.as_u16(), "unexpected token endpoint status");
                Err(AuthFailure::unexpected(Some(status.as_u16()), message))
            }
        }
    }
}

#[async_trait]
impl AuthenticationClient for IdentityClient {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AuthFailure> {
        self.token_request(&[
            ("username", username),
            ("password", password),
            ("grant_type", "password"),
            ("client_id", &self.config.client_id),
        ])
        .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthFailure> {
        self.token_request(&[
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
            ("client_id", &self.config.client_id),
        ])
        .await
    }
}
