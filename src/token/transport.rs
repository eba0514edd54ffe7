//! Reversible encoding for path-embedded credentials.
//!
//! Some deployments cannot set request headers, so the user hash, auth token
//! and bearer token travel as one base64 path segment. This is packaging,
//! not protection: the encoding adds no secrecy.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::derive::CredentialError;

/// Error returned when a transport credential cannot be decoded.
#[derive(Debug)]
pub enum TransportCredentialError {
    /// The input was not valid base64 (standard alphabet).
    InvalidEncoding(base64::DecodeError),
    /// The decoded bytes were not UTF-8.
    NotUtf8(std::string::FromUtf8Error),
    /// The decoded string did not split into exactly three `:` segments.
    MalformedCredential,
}

impl fmt::Display for TransportCredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding(e) => write!(f, "invalid base64: {e}"),
            Self::NotUtf8(e) => write!(f, "decoded credential is not utf-8: {e}"),
            Self::MalformedCredential => write!(f, "credential must have three segments"),
        }
    }
}

impl std::error::Error for TransportCredentialError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding(e) => Some(e),
            Self::NotUtf8(e) => Some(e),
            Self::MalformedCredential => None,
        }
    }
}

/// The three values recovered from a transport credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCredential {
    pub user_hash: String,
    pub auth_token: String,
    pub bearer_token: String,
}

/// Bundle a user hash and both tokens into one URL-path-safe segment.
///
/// The segments are joined with `:` and base64-encoded with the standard
/// (non-URL-safe) alphabet. [`decode_transport_credential`] is the exact
/// inverse.
///
/// # Example
///
/// ```rust
/// use tokenforge::{decode_transport_credential, encode_transport_credential};
///
/// let encoded = encode_transport_credential("alice", "tok1", "tok2").unwrap();
/// let decoded = decode_transport_credential(&encoded).unwrap();
/// assert_eq!(decoded.user_hash, "alice");
/// assert_eq!(decoded.auth_token, "tok1");
/// assert_eq!(decoded.bearer_token, "tok2");
/// ```
pub fn encode_transport_credential(
    user_hash: &str,
    auth_token: &str,
    bearer_token: &str,
) -> Result<String, CredentialError> {
    if user_hash.is_empty() {
        return Err(CredentialError::EmptyUserHash);
    }
    if auth_token.is_empty() {
        return Err(CredentialError::EmptyAuthToken);
    }
    if bearer_token.is_empty() {
        return Err(CredentialError::EmptyBearerToken);
    }
    Ok(STANDARD.encode(format!("{user_hash}:{auth_token}:{bearer_token}")))
}

/// Recover the user hash, auth token and bearer token from a transport
/// credential produced by [`encode_transport_credential`].
pub fn decode_transport_credential(
    encoded: &str,
) -> Result<DecodedCredential, TransportCredentialError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(TransportCredentialError::InvalidEncoding)?;
    let decoded = String::from_utf8(bytes).map_err(TransportCredentialError::NotUtf8)?;

    let mut parts = decoded.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(user_hash), Some(auth_token), Some(bearer_token))
            if !user_hash.is_empty() && !auth_token.is_empty() && !bearer_token.is_empty() =>
        {
            Ok(DecodedCredential {
                user_hash: user_hash.to_string(),
                auth_token: auth_token.to_string(),
                bearer_token: bearer_token.to_string(),
            })
        }
        _ => Err(TransportCredentialError::MalformedCredential),
    }
}
