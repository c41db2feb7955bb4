use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogflowError {
    /// Network failure, or an upstream body that is not JSON. Terminal for
    /// the request — there is no retry policy.
    #[error("dialogflow request failed: {0}")]
    Request(#[from] reqwest::Error),
}
