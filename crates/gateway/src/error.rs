use {
    axum::{
        Json,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    serde_json::json,
    thiserror::Error,
    tracing::error,
};

use {
    flowgate_auth::AuthError, flowgate_config::ConfigError, flowgate_dialogflow::DialogflowError,
};

/// Request-terminal failures of the proxy pipeline.
///
/// `IntoResponse` maps each class to its contractual status and JSON body:
/// validation → 400, configuration/auth → 500 with a fixed message,
/// everything else → 500 with the error message and a timestamp. Every 500
/// is also logged.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing sessionId")]
    MissingSessionId,

    #[error("Missing queryInput or text")]
    MissingQuery,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to obtain access token")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upstream(#[from] DialogflowError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            err @ (Self::MissingSessionId | Self::MissingQuery) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
            Self::Config(err) => {
                error!("credential resolution failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            },
            Self::Auth(source) => {
                error!("token acquisition failed: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to obtain access token" })),
                )
                    .into_response()
            },
            Self::Upstream(err) => internal_error(err.to_string()),
            Self::Internal(err) => internal_error(format!("{err:#}")),
        }
    }
}

/// Unclassified 500: the error message plus a timestamp, mirroring the
/// catch-all shape the proxy contract promises to callers.
fn internal_error(message: String) -> Response {
    error!("dialogflow proxy error: {message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}
