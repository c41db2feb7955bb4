use std::sync::Arc;

use {
    flowgate_auth::{AccessTokenProvider, ServiceAccountTokenProvider},
    flowgate_config::{CredentialsProvider, EnvCredentials},
    flowgate_dialogflow::DialogflowClient,
};

/// Shared app state. Every collaborator is injected at construction so the
/// handler pipeline is fully testable offline.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialsProvider>,
    pub tokens: Arc<dyn AccessTokenProvider>,
    pub dialogflow: Arc<DialogflowClient>,
}

impl AppState {
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialsProvider>,
        tokens: Arc<dyn AccessTokenProvider>,
        dialogflow: Arc<DialogflowClient>,
    ) -> Self {
        Self {
            credentials,
            tokens,
            dialogflow,
        }
    }

    /// Production wiring: env-resolved credentials, signed-JWT token
    /// exchange, and the real Dialogflow endpoint.
    #[must_use]
    pub fn live() -> Self {
        Self::new(
            Arc::new(EnvCredentials::new()),
            Arc::new(ServiceAccountTokenProvider::new()),
            Arc::new(DialogflowClient::new()),
        )
    }
}
