//! Windowed auth-token verification.

use crate::token::{current_timestamp, derive_auth_token, derive_bearer_token, BearerFraming};

use super::replay::ReplayGuard;

/// Default lookback window, in seconds.
///
/// A token derived up to this many seconds ago is still accepted; anything
/// older has expired. The window also bounds how long a presented token is
/// remembered by the replay guard.
pub const DEFAULT_WINDOW_SECS: u64 = 8;

/// Verifies auth tokens against the shared secret within a lookback window.
///
/// The verifier owns its replay state; two verifiers never share it. Which
/// window a deployment tolerates is policy, so it is a constructor
/// parameter, not a constant.
///
/// # Example
///
/// ```rust
/// use tokenforge::{derive_auth_token, TokenVerifier};
///
/// let token = derive_auth_token("some-user", 1_700_000_000, "super_secret_code").unwrap();
///
/// // Accepted at derivation time.
/// let verifier = TokenVerifier::new("super_secret_code".to_string());
/// assert!(verifier.verify_at("some-user", &token, 1_700_000_000));
///
/// // Expired once the window has passed, even for a verifier that has
/// // never seen the token before.
/// let verifier = TokenVerifier::new("super_secret_code".to_string());
/// assert!(!verifier.verify_at("some-user", &token, 1_700_000_000 + 8));
/// ```
pub struct TokenVerifier {
    secret: String,
    window: u64,
    replay: ReplayGuard,
}

impl TokenVerifier {
    /// Create a verifier with the default window of
    /// [`DEFAULT_WINDOW_SECS`] seconds.
    pub fn new(secret: String) -> Self {
        Self::with_window(secret, DEFAULT_WINDOW_SECS)
    }

    /// Create a verifier with a custom lookback window in seconds.
    pub fn with_window(secret: String, window: u64) -> Self {
        Self {
            secret,
            // A zero window would accept nothing; one second is the floor.
            window: window.max(1),
            replay: ReplayGuard::new(),
        }
    }

    /// Verify a presented auth token against the current wall clock.
    pub fn verify(&self, user_hash: &str, auth_token: &str) -> bool {
        self.verify_at(user_hash, auth_token, current_timestamp())
    }

    /// Verify a presented auth token as of `now` (seconds since epoch).
    ///
    /// A token is accepted when it matches the expected derivation for any
    /// of the last `window` seconds and has not been presented before
    /// within the current window. Malformed inputs are rejected, never an
    /// error: an abuser gets a refusal, not a diagnostic.
    pub fn verify_at(&self, user_hash: &str, auth_token: &str, now: u64) -> bool {
        if user_hash.is_empty() || auth_token.is_empty() {
            return false;
        }
        if !self.replay.check_and_record(user_hash, auth_token, now, self.window) {
            return false;
        }
        for age in 0..self.window {
            let timestamp = match now.checked_sub(age) {
                Some(t) => t,
                None => break,
            };
            match derive_auth_token(user_hash, timestamp, &self.secret) {
                Ok(expected) if expected == auth_token => return true,
                _ => {}
            }
        }
        false
    }
}

/// Verify a presented bearer token by recomputing it.
///
/// Pure recompute-and-compare: the caller has already verified `auth_token`
/// itself, so no replay state is involved. `secret` is the second shared
/// secret for [`BearerFraming::Wrapped`] or the per-user special token for
/// [`BearerFraming::Plain`].
pub fn verify_bearer(
    user_hash: &str,
    auth_token: &str,
    bearer_token: &str,
    secret: &str,
    framing: BearerFraming,
) -> bool {
    if bearer_token.is_empty() {
        return false;
    }
    match derive_bearer_token(user_hash, auth_token, secret, framing) {
        Ok(expected) => expected == bearer_token,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "822f3d5b9c91b570a4f1848c5d147b4709d2fb96";
    const SECRET: &str = "super_secret_code";
    const NOW: u64 = 1_700_000_000;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET.to_string())
    }

    #[test]
    fn accepts_fresh_token() {
        let token = derive_auth_token(USER, NOW, SECRET).unwrap();
        assert!(verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn accepts_token_at_window_edge() {
        let token = derive_auth_token(USER, NOW - (DEFAULT_WINDOW_SECS - 1), SECRET).unwrap();
        assert!(verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn rejects_expired_token() {
        let token = derive_auth_token(USER, NOW - DEFAULT_WINDOW_SECS, SECRET).unwrap();
        assert!(!verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn rejects_token_from_the_future() {
        let token = derive_auth_token(USER, NOW + 1, SECRET).unwrap();
        assert!(!verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = derive_auth_token(USER, NOW, "some_other_secret").unwrap();
        assert!(!verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn rejects_replayed_token() {
        let v = verifier();
        let token = derive_auth_token(USER, NOW, SECRET).unwrap();
        assert!(v.verify_at(USER, &token, NOW));
        assert!(!v.verify_at(USER, &token, NOW + 1));
    }

    #[test]
    fn fresh_token_accepted_after_replayed_one() {
        let v = verifier();
        let first = derive_auth_token(USER, NOW, SECRET).unwrap();
        assert!(v.verify_at(USER, &first, NOW));
        let second = derive_auth_token(USER, NOW + 1, SECRET).unwrap();
        assert!(v.verify_at(USER, &second, NOW + 1));
    }

    #[test]
    fn verifiers_do_not_share_replay_state() {
        let token = derive_auth_token(USER, NOW, SECRET).unwrap();
        assert!(verifier().verify_at(USER, &token, NOW));
        assert!(verifier().verify_at(USER, &token, NOW));
    }

    #[test]
    fn custom_window_is_honored() {
        let v = TokenVerifier::with_window(SECRET.to_string(), 2);
        let token = derive_auth_token(USER, NOW - 2, SECRET).unwrap();
        assert!(!v.verify_at(USER, &token, NOW));
        let token = derive_auth_token(USER, NOW - 1, SECRET).unwrap();
        assert!(v.verify_at(USER, &token, NOW));
    }

    #[test]
    fn rejects_empty_inputs() {
        let v = verifier();
        assert!(!v.verify_at("", "token", NOW));
        assert!(!v.verify_at(USER, "", NOW));
    }

    #[test]
    fn near_epoch_timestamps_do_not_underflow() {
        let v = verifier();
        let token = derive_auth_token(USER, 0, SECRET).unwrap();
        assert!(v.verify_at(USER, &token, 0));
    }

    #[test]
    fn bearer_verifies_with_matching_framing() {
        let auth = derive_auth_token(USER, NOW, SECRET).unwrap();
        let bearer = derive_bearer_token(USER, &auth, "bearer_secret", BearerFraming::Wrapped)
            .unwrap();
        assert!(verify_bearer(
            USER,
            &auth,
            &bearer,
            "bearer_secret",
            BearerFraming::Wrapped
        ));
        assert!(!verify_bearer(
            USER,
            &auth,
            &bearer,
            "bearer_secret",
            BearerFraming::Plain
        ));
    }

    #[test]
    fn bearer_rejects_tampering() {
        let auth = derive_auth_token(USER, NOW, SECRET).unwrap();
        let bearer =
            derive_bearer_token(USER, &auth, "bearer_secret", BearerFraming::Plain).unwrap();
        assert!(!verify_bearer(
            "other-user",
            &auth,
            &bearer,
            "bearer_secret",
            BearerFraming::Plain
        ));
        assert!(!verify_bearer(USER, &auth, "", "bearer_secret", BearerFraming::Plain));
    }
}
