use thiserror::Error;

/// Credential configuration failures. Both map to an HTTP 500 at the edge;
/// the messages are part of the response contract.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing service account configuration")]
    MissingCredentials,

    #[error("Invalid service account configuration")]
    InvalidCredentials(#[source] serde_json::Error),
}
