//! Auth and bearer token derivation.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

/// Error returned when credential derivation is handed a degenerate input.
///
/// Hashing an empty identifier or secret would still produce a well-formed
/// digest, so these are rejected up front instead of silently succeeding.
#[derive(Debug, PartialEq, Eq)]
pub enum CredentialError {
    /// The user hash was empty.
    EmptyUserHash,
    /// The shared secret (or per-user special token) was empty.
    EmptySecret,
    /// The auth token to wrap was empty.
    EmptyAuthToken,
    /// The bearer token to encode was empty.
    EmptyBearerToken,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserHash => write!(f, "user hash must not be empty"),
            Self::EmptySecret => write!(f, "shared secret must not be empty"),
            Self::EmptyAuthToken => write!(f, "auth token must not be empty"),
            Self::EmptyBearerToken => write!(f, "bearer token must not be empty"),
        }
    }
}

impl std::error::Error for CredentialError {}

/// How the bearer token input string is framed before hashing.
///
/// Two incompatible conventions exist in the wild; the server decides which
/// one it accepts, so the choice is an explicit parameter rather than a
/// default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BearerFraming {
    /// Hash `":{user_hash}*{secret}*{auth_token}:"`, used alongside the
    /// path-embedded wire convention.
    Wrapped,
    /// Hash `"{user_hash}:{auth_token}:{secret}"`, used alongside the
    /// header-based wire convention. The secret slot carries the per-user
    /// special token there.
    Plain,
}

impl BearerFraming {
    fn frame(self, user_hash: &str, auth_token: &str, secret: &str) -> String {
        match self {
            Self::Wrapped => format!(":{user_hash}*{secret}*{auth_token}:"),
            Self::Plain => format!("{user_hash}:{auth_token}:{secret}"),
        }
    }
}

/// SHA-256 over the UTF-8 bytes of `input`, as lowercase hex.
fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    hex::encode(digest)
}

/// Derive an auth token from a user hash, a timestamp and the shared secret.
///
/// The token is the lowercase-hex SHA-256 digest of
/// `"{user_hash}:{timestamp}:{secret}"`. It is deterministic for a given
/// input triple; a server grants it only for timestamps inside its own
/// acceptance window, which is how the token expires without carrying any
/// expiry field.
///
/// # Example
///
/// ```rust
/// use tokenforge::{current_timestamp, derive_auth_token};
///
/// let token = derive_auth_token("822f3d5b9c91b570a4f1848c5d147b4709d2fb96",
///                               current_timestamp(),
///                               "super_secret_code").unwrap();
/// assert_eq!(token.len(), 64);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn derive_auth_token(
    user_hash: &str,
    timestamp: u64,
    secret: &str,
) -> Result<String, CredentialError> {
    if user_hash.is_empty() {
        return Err(CredentialError::EmptyUserHash);
    }
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }
    Ok(sha256_hex(&format!("{user_hash}:{timestamp}:{secret}")))
}

/// Derive a bearer token binding `auth_token` to `user_hash`.
///
/// The bearer inherits the auth token's implicit expiry: a new timestamp
/// yields a new auth token, which yields a new bearer. `secret` is the
/// second shared secret for [`BearerFraming::Wrapped`] and the per-user
/// special token for [`BearerFraming::Plain`].
pub fn derive_bearer_token(
    user_hash: &str,
    auth_token: &str,
    secret: &str,
    framing: BearerFraming,
) -> Result<String, CredentialError> {
    if user_hash.is_empty() {
        return Err(CredentialError::EmptyUserHash);
    }
    if auth_token.is_empty() {
        return Err(CredentialError::EmptyAuthToken);
    }
    if secret.is_empty() {
        return Err(CredentialError::EmptySecret);
    }
    Ok(sha256_hex(&framing.frame(user_hash, auth_token, secret)))
}

/// Seconds since the Unix epoch, the timestamp auth tokens are derived from.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "822f3d5b9c91b570a4f1848c5d147b4709d2fb96";
    const SECRET: &str = "super_secret_code";
    const BEARER_SECRET: &str = "super_secret_bearer_code";

    #[test]
    fn auth_token_known_vector() {
        // SHA-256 of "822f3d5b9c91b570a4f1848c5d147b4709d2fb96:0:super_secret_code"
        let token = derive_auth_token(USER, 0, SECRET).unwrap();
        assert_eq!(
            token,
            "46cd726065004ab042fca4b38229f512e2ae7ef9161afc33b21f9c388d376dae"
        );
    }

    #[test]
    fn auth_token_is_deterministic() {
        let a = derive_auth_token(USER, 1700000000, SECRET).unwrap();
        let b = derive_auth_token(USER, 1700000000, SECRET).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn auth_token_changes_with_timestamp() {
        let a = derive_auth_token(USER, 1700000000, SECRET).unwrap();
        let b = derive_auth_token(USER, 1700000001, SECRET).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn auth_token_sensitive_to_every_input() {
        let base = derive_auth_token(USER, 42, SECRET).unwrap();
        let changed_user = derive_auth_token("922f3d5b9c91b570a4f1848c5d147b4709d2fb96", 42, SECRET)
            .unwrap();
        let changed_secret = derive_auth_token(USER, 42, "super_secret_codf").unwrap();
        assert_ne!(base, changed_user);
        assert_ne!(base, changed_secret);
        assert_ne!(changed_user, changed_secret);
    }

    #[test]
    fn auth_token_rejects_empty_inputs() {
        assert_eq!(
            derive_auth_token("", 0, SECRET),
            Err(CredentialError::EmptyUserHash)
        );
        assert_eq!(
            derive_auth_token(USER, 0, ""),
            Err(CredentialError::EmptySecret)
        );
    }

    #[test]
    fn bearer_framings_disagree() {
        let auth = derive_auth_token(USER, 0, SECRET).unwrap();
        let wrapped =
            derive_bearer_token(USER, &auth, BEARER_SECRET, BearerFraming::Wrapped).unwrap();
        let plain = derive_bearer_token(USER, &auth, BEARER_SECRET, BearerFraming::Plain).unwrap();
        assert_ne!(wrapped, plain);
    }

    #[test]
    fn bearer_wrapped_known_vector() {
        // SHA-256 of ":{user}*super_secret_bearer_code*{auth}:" with the
        // timestamp-zero auth token above.
        let auth = derive_auth_token(USER, 0, SECRET).unwrap();
        let bearer =
            derive_bearer_token(USER, &auth, BEARER_SECRET, BearerFraming::Wrapped).unwrap();
        assert_eq!(
            bearer,
            "8e3e6c4e824d8d2b8169cec472056ad7b1374875f0dfb2e9e1a5769bb62e2faf"
        );
    }

    #[test]
    fn bearer_plain_known_vector() {
        let auth = derive_auth_token(USER, 0, SECRET).unwrap();
        let bearer = derive_bearer_token(USER, &auth, BEARER_SECRET, BearerFraming::Plain).unwrap();
        assert_eq!(
            bearer,
            "d0319cb95fbe2328706e937cae2863c7a56a00c6428b78634cce38dbd0216355"
        );
    }

    #[test]
    fn bearer_tracks_auth_token() {
        let auth_now = derive_auth_token(USER, 100, SECRET).unwrap();
        let auth_later = derive_auth_token(USER, 101, SECRET).unwrap();
        let bearer_now =
            derive_bearer_token(USER, &auth_now, BEARER_SECRET, BearerFraming::Wrapped).unwrap();
        let bearer_later =
            derive_bearer_token(USER, &auth_later, BEARER_SECRET, BearerFraming::Wrapped).unwrap();
        assert_ne!(bearer_now, bearer_later);
    }

    #[test]
    fn bearer_rejects_empty_inputs() {
        assert_eq!(
            derive_bearer_token("", "a", "s", BearerFraming::Plain),
            Err(CredentialError::EmptyUserHash)
        );
        assert_eq!(
            derive_bearer_token(USER, "", "s", BearerFraming::Plain),
            Err(CredentialError::EmptyAuthToken)
        );
        assert_eq!(
            derive_bearer_token(USER, "a", "", BearerFraming::Plain),
            Err(CredentialError::EmptySecret)
        );
    }

    #[test]
    fn current_timestamp_is_monotonic_enough() {
        let t = current_timestamp();
        // Anything past 2020 means the clock and the epoch math line up.
        assert!(t > 1_577_836_800);
    }
}
