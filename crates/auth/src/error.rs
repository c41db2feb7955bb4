use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The key's PEM material could not be used for RS256 signing.
    #[error("invalid service account private key: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    /// The token endpoint was unreachable or returned garbage.
    #[error("token exchange failed: {0}")]
    Exchange(#[from] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("token exchange rejected ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The token endpoint answered 200 but without an access token.
    #[error("token endpoint returned no access token")]
    MissingToken,
}
