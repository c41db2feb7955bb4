use {
    http::StatusCode,
    secrecy::{ExposeSecret, Secret},
    serde_json::Value,
    tracing::debug,
};

use crate::{error::DialogflowError, request::session_path};

/// Production Dialogflow REST endpoint.
pub const DIALOGFLOW_BASE_URL: &str = "https://dialogflow.googleapis.com";

/// Status and JSON body of a `detectIntent` call, relayed to the caller
/// verbatim — success and upstream error responses alike.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Thin client over the `detectIntent` REST call.
///
/// The base URL is injectable so tests can point the client at a local mock
/// server.
pub struct DialogflowClient {
    http: reqwest::Client,
    base_url: String,
}

impl DialogflowClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DIALOGFLOW_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST `body` to the session's `detectIntent` endpoint and return the
    /// upstream status and JSON body without interpretation.
    pub async fn detect_intent(
        &self,
        project_id: &str,
        session_id: &str,
        body: &Value,
        token: &Secret<String>,
    ) -> Result<UpstreamResponse, DialogflowError> {
        let url = format!("{}/{}", self.base_url, session_path(project_id, session_id));
        debug!(%project_id, "dispatching detectIntent");

        let resp = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", token.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.json::<Value>().await?;
        Ok(UpstreamResponse { status, body })
    }
}

impl Default for DialogflowClient {
    fn default() -> Self {
        Self::new()
    }
}
