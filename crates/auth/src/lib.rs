//! Google OAuth2 service-account token acquisition.
//!
//! A per-request flow with no caching: sign a JWT assertion with the key's
//! RSA private key, exchange it at the key's token endpoint, hand the bearer
//! token to the caller, and forget it.

pub mod error;
mod jwt;
pub mod token;

pub use {
    error::AuthError,
    jwt::{AssertionClaims, CLOUD_PLATFORM_SCOPE, assertion_claims},
    token::{AccessTokenProvider, ServiceAccountTokenProvider, exchange_assertion},
};
