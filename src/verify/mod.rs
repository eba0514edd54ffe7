//! Server-side token acceptance policy.
//!
//! A presented auth token carries no timestamp, so the verifier recomputes
//! the expected token for each second inside a lookback window and accepts
//! on any match. A replay guard rejects tokens that were already presented
//! within the current window.

mod policy;
mod replay;

pub use policy::{verify_bearer, TokenVerifier, DEFAULT_WINDOW_SECS};
pub use replay::ReplayGuard;
