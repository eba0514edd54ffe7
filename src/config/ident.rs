//! User identifier generation.

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

/// Length of a user hash in hex characters.
const USER_HASH_LEN: usize = 40;

/// Generate a fresh 40-character hex user hash.
///
/// Mixes the nanosecond clock with the process id and hashes the result, so
/// two calls never collide in practice. Suitable for provisioning new user
/// identifiers; not a secret and not cryptographically random.
///
/// # Example
///
/// ```rust
/// use tokenforge::generate_user_hash;
///
/// let hash = generate_user_hash();
/// assert_eq!(hash.len(), 40);
/// assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_user_hash() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let pid = std::process::id();
    let digest = Sha256::digest(format!("{timestamp}:{pid}").as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(USER_HASH_LEN);
    hash
}
