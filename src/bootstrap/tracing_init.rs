//! Tracing initialization utilities.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the given default filter.
///
/// The filter can be overridden by the `RUST_LOG` environment variable.
/// Output goes to stderr so piped stdout stays clean for response bodies.
///
/// # Example
///
/// ```rust
/// use tokenforge::init_tracing;
///
/// // Enable debug logging for this crate, info for everything else
/// init_tracing("tokenforge=debug,info");
/// ```
///
/// # Filter Syntax
///
/// The filter follows the `tracing_subscriber::EnvFilter` syntax:
/// - `info` - Enable info level for all targets
/// - `tokenforge=debug` - Enable debug level for `tokenforge`
/// - `tokenforge=debug,info` - Debug for `tokenforge`, info for everything else
/// - `tokenforge::client=trace` - Trace level for a specific module
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
