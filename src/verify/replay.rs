//! Per-user replay tracking for presented auth tokens.

use std::collections::HashMap;
use std::sync::Mutex;

/// Tokens a user has presented since the last wipe.
#[derive(Debug)]
struct SeenTokens {
    last_wipe: u64,
    tokens: Vec<String>,
}

/// Remembers which auth tokens each user has already presented.
///
/// A token is only valid for a few seconds, so the store never needs to
/// grow: once a user's last wipe is older than the acceptance window, every
/// remembered token has expired anyway and the slate is cleared.
///
/// State is owned by the instance; embed the guard in whatever owns the
/// verification policy rather than sharing one process-wide.
#[derive(Debug, Default)]
pub struct ReplayGuard {
    entries: Mutex<HashMap<String, SeenTokens>>,
}

impl ReplayGuard {
    /// Create an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a presented token, returning `false` when it was already
    /// presented within the current window.
    ///
    /// `window` is the same lookback the verification policy uses: wipes
    /// are due once the previous wipe is more than `window` seconds old.
    pub fn check_and_record(&self, user_hash: &str, token: &str, now: u64, window: u64) -> bool {
        let mut entries = self.entries.lock().unwrap();

        let entry = entries.entry(user_hash.to_string()).or_insert(SeenTokens {
            last_wipe: now,
            tokens: Vec::new(),
        });

        // Everything remembered before the previous window has expired on
        // the policy side, so the slate can be cleared.
        if now > entry.last_wipe + window {
            entry.tokens.clear();
            entry.last_wipe = now;
        }

        if entry.tokens.iter().any(|t| t == token) {
            return false;
        }
        entry.tokens.push(token.to_string());
        true
    }
}
