//! Service-account credential schema and environment resolution.
//!
//! Credentials are read from the first set variable in [`CREDENTIAL_ENV_KEYS`]
//! on every resolution — nothing is cached across requests.

pub mod error;
pub mod resolve;
pub mod schema;

pub use {
    error::ConfigError,
    resolve::{CREDENTIAL_ENV_KEYS, CredentialsProvider, EnvCredentials, configured_env_key},
    schema::ServiceAccountKey,
};
