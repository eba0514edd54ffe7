//! Configuration management with environment variable support.

mod base;
mod ident;

pub use base::{ClientConfig, ConfigError};
pub use ident::generate_user_hash;
