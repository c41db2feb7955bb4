use {
    jsonwebtoken::{Algorithm, EncodingKey, Header},
    serde::Serialize,
};

use flowgate_config::ServiceAccountKey;

use crate::error::AuthError;

/// OAuth scope requested for every token. Dialogflow accepts the broad
/// cloud-platform scope; narrower Dialogflow-only scopes exist but are not
/// granted on all agent setups.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Assertion lifetime. Google caps JWT assertions at one hour.
const ASSERTION_TTL_SECS: u64 = 3600;

/// Claims of the signed JWT presented to the token endpoint.
#[derive(Debug, Serialize)]
pub struct AssertionClaims {
    /// Issuer: the service account email.
    pub iss: String,
    /// Requested OAuth scope.
    pub scope: String,
    /// Audience: the token endpoint itself.
    pub aud: String,
    /// Issued-at, Unix seconds.
    pub iat: u64,
    /// Expiry, Unix seconds.
    pub exp: u64,
}

/// Build the claim set for `key`, issued at `issued_at` (Unix seconds).
///
/// Split from [`sign_assertion`] so the claim shape is testable without a
/// real RSA key.
#[must_use]
pub fn assertion_claims(key: &ServiceAccountKey, issued_at: u64) -> AssertionClaims {
    AssertionClaims {
        iss: key.client_email.clone(),
        scope: CLOUD_PLATFORM_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat: issued_at,
        exp: issued_at + ASSERTION_TTL_SECS,
    }
}

/// Sign an RS256 assertion over the key's private key.
pub(crate) fn sign_assertion(key: &ServiceAccountKey, issued_at: u64) -> Result<String, AuthError> {
    let claims = assertion_claims(key, issued_at);
    let header = Header::new(Algorithm::RS256);
    let encoding_key =
        EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(AuthError::InvalidKey)?;
    jsonwebtoken::encode(&header, &claims, &encoding_key).map_err(AuthError::InvalidKey)
}

pub(crate) fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
