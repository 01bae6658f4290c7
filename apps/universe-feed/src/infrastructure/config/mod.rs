//! Configuration Loading
//!
//! Environment-driven configuration for the feed binary.

mod settings;

pub use settings::{ConfigError, FeedConfig, FilterSettings};
