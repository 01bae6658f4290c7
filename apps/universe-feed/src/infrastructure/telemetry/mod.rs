//! Tracing Initialization
//!
//! Structured logging for the feed binary.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: `universe_feed=info`)
//!
//! # Usage
//!
//! ```ignore
//! use universe_feed::infrastructure::telemetry;
//!
//! // Initialize once at startup.
//! telemetry::init();
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "universe_feed=info";

/// Initialize the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
