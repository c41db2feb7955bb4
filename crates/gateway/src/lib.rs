//! HTTP surface of the proxy: routing, CORS, request validation, the
//! detectIntent handler pipeline, and error-to-response mapping.

pub mod error;
pub mod handler;
pub mod server;
pub mod state;

pub use {
    error::GatewayError,
    handler::DetectIntentParams,
    server::{build_app, serve},
    state::AppState,
};
