//! TokenForge - Time-scoped credential derivation for user-management APIs.
//!
//! This crate provides the building blocks a client needs to authenticate
//! against a shared-secret, timestamp-scoped user API:
//!
//! - **token**: Auth/bearer token derivation and transport-credential encoding
//! - **verify**: Server-side acceptance policy (lookback window + replay guard)
//! - **config**: Configuration management with environment variable support
//! - **client**: HTTP client for the path-embedded and header-based wire conventions
//! - **bootstrap**: Tracing initialization utilities
//!
//! # Features
//!
//! - `token` - Credential derivation (enabled by default)
//! - `verify` - Token acceptance policy (enabled by default)
//! - `config` - Configuration utilities (enabled by default)
//! - `bootstrap` - Tracing setup (enabled by default)
//! - `client` - Async HTTP client for the user API
//! - `full` - All features
//!
//! # Example
//!
//! ```rust,ignore
//! use tokenforge::{current_timestamp, derive_auth_token, derive_bearer_token,
//!                  encode_transport_credential, BearerFraming, ClientConfig, init_tracing};
//!
//! fn main() {
//!     init_tracing("tokenforge=debug");
//!     let config = ClientConfig::from_env();
//!
//!     let secret = config.require_auth_secret().unwrap();
//!     let auth = derive_auth_token(&config.user_hash, current_timestamp(), secret).unwrap();
//!
//!     let bearer_secret = config.require_bearer_secret().unwrap();
//!     let bearer = derive_bearer_token(
//!         &config.user_hash,
//!         &auth,
//!         bearer_secret,
//!         BearerFraming::Wrapped,
//!     ).unwrap();
//!
//!     let credential = encode_transport_credential(&config.user_hash, &auth, &bearer).unwrap();
//! }
//! ```

#[cfg(feature = "token")]
pub mod token;

#[cfg(feature = "verify")]
pub mod verify;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "bootstrap")]
pub mod bootstrap;

// Re-exports for convenience
#[cfg(feature = "token")]
pub use token::{
    current_timestamp, decode_transport_credential, derive_auth_token, derive_bearer_token,
    encode_transport_credential, BearerFraming, CredentialError, DecodedCredential,
    TransportCredentialError,
};

#[cfg(feature = "verify")]
pub use verify::{verify_bearer, ReplayGuard, TokenVerifier};

#[cfg(feature = "config")]
pub use config::{generate_user_hash, ClientConfig, ConfigError};

#[cfg(feature = "client")]
pub use client::{ApiResponse, ClientError, UserApiClient, UserData};

#[cfg(feature = "bootstrap")]
pub use bootstrap::init_tracing;
