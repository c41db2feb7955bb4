use {
    axum::{
        Json,
        extract::State,
        response::{IntoResponse, Response},
    },
    serde::Deserialize,
    serde_json::Value,
    tracing::debug,
};

use flowgate_dialogflow::QueryPayload;

use crate::{error::GatewayError, state::AppState};

/// Inbound request body, validated at the boundary before any business
/// logic. All fields are optional at the serde level so a missing
/// `sessionId` surfaces as the contractual 400 rather than a generic
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectIntentParams {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub query_input: Option<Value>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The proxy pipeline: validate → resolve credentials → acquire token →
/// synthesize request → dispatch → relay.
///
/// Linear, no retries. Credentials are resolved fresh on every request and
/// the access token is used once and dropped.
pub async fn detect_intent(
    State(state): State<AppState>,
    Json(params): Json<DetectIntentParams>,
) -> Result<Response, GatewayError> {
    let session_id = params
        .session_id
        .filter(|id| !id.is_empty())
        .ok_or(GatewayError::MissingSessionId)?;
    let payload = QueryPayload::from_parts(params.query_input, params.text)
        .ok_or(GatewayError::MissingQuery)?;

    let key = state.credentials.resolve()?;
    let token = state.tokens.access_token(&key).await?;

    debug!(project_id = %key.project_id, "forwarding detectIntent for session");
    let upstream = state
        .dialogflow
        .detect_intent(&key.project_id, &session_id, &payload.into_body(), &token)
        .await?;

    Ok((upstream.status, Json(upstream.body)).into_response())
}
