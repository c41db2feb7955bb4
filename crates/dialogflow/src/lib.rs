//! Dialogflow v2 `detectIntent` client: request synthesis, session URL
//! construction, dispatch, and verbatim relay of the upstream response.

pub mod client;
pub mod error;
pub mod request;

pub use {
    client::{DIALOGFLOW_BASE_URL, DialogflowClient, UpstreamResponse},
    error::DialogflowError,
    request::{DEFAULT_LANGUAGE_CODE, QueryPayload, session_path},
};
