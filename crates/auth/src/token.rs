use {async_trait::async_trait, secrecy::Secret, serde::Deserialize, tracing::debug};

use flowgate_config::ServiceAccountKey;

use crate::{
    error::AuthError,
    jwt::{sign_assertion, unix_now},
};

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Source of bearer tokens for the proxy handler.
///
/// The gateway depends on this trait rather than the live implementation so
/// tests can inject a static token and exercise the full request pipeline
/// offline.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Obtain a fresh access token for `key`. Called once per request; the
    /// token is used for a single upstream call and then discarded.
    async fn access_token(&self, key: &ServiceAccountKey) -> Result<Secret<String>, AuthError>;
}

/// Live provider: signed-JWT exchange against the key's token endpoint.
pub struct ServiceAccountTokenProvider {
    client: reqwest::Client,
}

impl ServiceAccountTokenProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ServiceAccountTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self, key: &ServiceAccountKey) -> Result<Secret<String>, AuthError> {
        let assertion = sign_assertion(key, unix_now())?;
        debug!(client_email = %key.client_email, "exchanging signed assertion for access token");
        exchange_assertion(&self.client, &key.token_uri, &assertion).await
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Exchange a signed JWT assertion for an access token at `token_uri`.
pub async fn exchange_assertion(
    client: &reqwest::Client,
    token_uri: &str,
    assertion: &str,
) -> Result<Secret<String>, AuthError> {
    let resp = client
        .post(token_uri)
        .header("Accept", "application/json")
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(AuthError::Rejected { status, body });
    }

    let body: TokenResponse = resp.json().await?;
    body.access_token
        .filter(|token| !token.is_empty())
        .map(Secret::new)
        .ok_or(AuthError::MissingToken)
}
