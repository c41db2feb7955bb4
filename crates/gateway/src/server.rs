use std::net::SocketAddr;

use {
    axum::{
        Json, Router,
        http::{HeaderValue, StatusCode, header},
        response::IntoResponse,
        routing::{get, post},
    },
    tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer},
    tracing::{info, warn},
};

use crate::{handler::detect_intent, state::AppState};

// ── Router construction ──────────────────────────────────────────────────────

/// Build the proxy router (shared between production startup and tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            post(detect_intent)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health))
        // Browsers need the origin header on the actual response too, not
        // just the preflight.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the proxy HTTP server.
pub async fn serve(bind: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    match flowgate_config::configured_env_key() {
        Some(name) => info!("service account credentials: {name}"),
        None => warn!(
            "no service account credentials configured; requests will fail until one of {:?} is set",
            flowgate_config::CREDENTIAL_ENV_KEYS
        ),
    }

    let app = build_app(state);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("flowgate v{} listening on http://{addr}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// CORS preflight. Handled explicitly (rather than by a CORS middleware) so
/// every OPTIONS request gets the contractual 204 with an empty body.
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                "Content-Type, Authorization",
            ),
        ],
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed. Use POST." })),
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
