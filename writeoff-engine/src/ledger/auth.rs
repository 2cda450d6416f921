//! Ledger access tokens
//!
//! The ledger authenticates every API call with a bearer token obtained
//! through a client-credentials OAuth exchange.

use async_trait::async_trait;
use serde::Deserialize;
use shared::{AppError, AppResult};

use crate::core::Config;

/// Bearer token for ledger API calls
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

/// Capability that issues ledger access tokens
///
/// The batcher asks for a token before every chunk; implementations decide
/// whether to cache. The production implementation never does: chunk counts
/// per invoice are small, and a stale cached token would fail an entire
/// chunk.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> AppResult<AccessToken>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client-credentials OAuth exchange against the ledger's auth endpoint
pub struct OAuthTokenProvider {
    client: reqwest::Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
}

impl OAuthTokenProvider {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            auth_url: config.auth_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn access_token(&self) -> AppResult<AccessToken> {
        let response = self
            .client
            .post(&self.auth_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::auth(format!("Token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::auth(format!(
                "Token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::auth(format!("Failed to parse token response: {e}")))?;

        Ok(AccessToken::new(token.access_token))
    }
}
