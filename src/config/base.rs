//! Client configuration for the user API.

use std::fmt;

/// Error returned when a required configuration value is missing.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `AUTH_SECRET` was not set.
    MissingAuthSecret,
    /// `BEARER_SECRET` was not set.
    MissingBearerSecret,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAuthSecret => write!(f, "AUTH_SECRET is not configured"),
            Self::MissingBearerSecret => write!(f, "BEARER_SECRET is not configured"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a user-API client.
///
/// Reads from environment variables with sensible defaults:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `API_URL` | `http://127.0.0.1:8000` | Base URL of the user API |
/// | `USER_HASH` | (empty) | Identifier of the acting user |
/// | `AUTH_SECRET` | (none) | Shared secret for auth tokens |
/// | `BEARER_SECRET` | (none) | Second secret / special token for bearer tokens |
///
/// Secrets stay inside the config value and are handed to the derivation
/// functions explicitly at call time; nothing here is process-global.
///
/// # Example
///
/// ```rust
/// use tokenforge::ClientConfig;
///
/// let config = ClientConfig::from_env();
/// if !config.secrets_configured() {
///     eprintln!("set AUTH_SECRET and BEARER_SECRET first");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the user API (default: http://127.0.0.1:8000)
    pub base_url: String,
    /// Identifier of the acting user
    pub user_hash: String,
    /// Shared secret for auth token derivation
    pub auth_secret: Option<String>,
    /// Second secret (or per-user special token) for bearer derivation
    pub bearer_secret: Option<String>,
}

impl ClientConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            user_hash: std::env::var("USER_HASH").unwrap_or_default(),
            auth_secret: std::env::var("AUTH_SECRET").ok(),
            bearer_secret: std::env::var("BEARER_SECRET").ok(),
        }
    }

    /// Check whether both secrets are present.
    pub fn secrets_configured(&self) -> bool {
        self.auth_secret.is_some() && self.bearer_secret.is_some()
    }

    /// Get the auth secret, or fail if it is not configured.
    pub fn require_auth_secret(&self) -> Result<&str, ConfigError> {
        self.auth_secret
            .as_deref()
            .ok_or(ConfigError::MissingAuthSecret)
    }

    /// Get the bearer secret, or fail if it is not configured.
    pub fn require_bearer_secret(&self) -> Result<&str, ConfigError> {
        self.bearer_secret
            .as_deref()
            .ok_or(ConfigError::MissingBearerSecret)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
