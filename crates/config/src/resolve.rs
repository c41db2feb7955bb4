use crate::{error::ConfigError, schema::ServiceAccountKey};

/// Environment variables checked for the service-account key JSON, in
/// priority order. The first variable that is set wins.
pub const CREDENTIAL_ENV_KEYS: [&str; 2] = ["GOOGLE_SERVICE_ACCOUNT_JSON", "SERVICE_ACCOUNT_JSON"];

/// Source of service-account credentials for the proxy handler.
///
/// Injected into the gateway at construction so tests can supply a fixed key
/// without touching the process environment.
pub trait CredentialsProvider: Send + Sync {
    /// Resolve the current key. Called once per request; implementations must
    /// not cache across calls.
    fn resolve(&self) -> Result<ServiceAccountKey, ConfigError>;
}

/// Live provider reading [`CREDENTIAL_ENV_KEYS`] from the process environment.
#[derive(Debug, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CredentialsProvider for EnvCredentials {
    fn resolve(&self) -> Result<ServiceAccountKey, ConfigError> {
        resolve_with(|name| std::env::var(name).ok())
    }
}

/// Resolve a key using a custom variable lookup.
///
/// This is the implementation behind [`EnvCredentials`]; the separate
/// signature makes the candidate-order logic testable without mutating the
/// process environment.
fn resolve_with(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ServiceAccountKey, ConfigError> {
    let raw = CREDENTIAL_ENV_KEYS
        .iter()
        .find_map(|name| lookup(name))
        .ok_or(ConfigError::MissingCredentials)?;
    ServiceAccountKey::from_json(&raw)
}

/// Name of the first credential variable currently set, if any.
///
/// Used for startup logging — the name only, never the value.
#[must_use]
pub fn configured_env_key() -> Option<&'static str> {
    CREDENTIAL_ENV_KEYS
        .iter()
        .find(|name| std::env::var(name).is_ok())
        .copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const KEY_JSON: &str =
        r#"{"project_id":"p","client_email":"e@p.iam.gserviceaccount.com","private_key":"pem"}"#;

    #[test]
    fn preferred_variable_wins() {
        let lookup = |name: &str| match name {
            "GOOGLE_SERVICE_ACCOUNT_JSON" => Some(KEY_JSON.to_string()),
            "SERVICE_ACCOUNT_JSON" => Some(r#"{"project_id":"other"}"#.to_string()),
            _ => None,
        };
        let key = resolve_with(lookup).unwrap();
        assert_eq!(key.project_id, "p");
    }

    #[test]
    fn falls_back_to_second_variable() {
        let lookup = |name: &str| match name {
            "SERVICE_ACCOUNT_JSON" => Some(KEY_JSON.to_string()),
            _ => None,
        };
        let key = resolve_with(lookup).unwrap();
        assert_eq!(key.project_id, "p");
    }

    #[test]
    fn both_unset_is_missing_credentials() {
        let err = resolve_with(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials));
        assert_eq!(err.to_string(), "Missing service account configuration");
    }

    #[test]
    fn unparsable_value_is_invalid_credentials() {
        let err = resolve_with(|_| Some("{broken".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCredentials(_)));
        assert_eq!(err.to_string(), "Invalid service account configuration");
    }

    #[test]
    fn candidate_order_is_documented() {
        // The resolution order is part of the external contract.
        assert_eq!(CREDENTIAL_ENV_KEYS, [
            "GOOGLE_SERVICE_ACCOUNT_JSON",
            "SERVICE_ACCOUNT_JSON"
        ]);
    }
}
