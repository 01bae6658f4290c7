//! Feed Configuration Settings
//!
//! Configuration types for the universe feed, loaded from environment
//! variables.

use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::domain::fundamentals::CoarseFilter;

/// Default broadcast channel capacity.
const DEFAULT_CHANNEL_CAPACITY: usize = 1_024;

/// Default minimum close price for the coarse filter.
const DEFAULT_MIN_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

// =============================================================================
// Filter Settings
// =============================================================================

/// Coarse filter knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSettings {
    /// Minimum close price.
    pub min_price: Decimal,
    /// Minimum daily dollar volume.
    pub min_dollar_volume: Decimal,
    /// Require detailed fundamental coverage.
    pub require_fundamentals: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            min_dollar_volume: Decimal::ZERO,
            require_fundamentals: false,
        }
    }
}

impl From<FilterSettings> for CoarseFilter {
    fn from(settings: FilterSettings) -> Self {
        let filter = Self::new(settings.min_price, settings.min_dollar_volume);
        if settings.require_fundamentals {
            filter.with_required_fundamentals()
        } else {
            filter
        }
    }
}

// =============================================================================
// Feed Configuration
// =============================================================================

/// Complete feed configuration.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Path to the newline-delimited JSON batch file to replay.
    pub snapshot_path: PathBuf,
    /// Broadcast channel capacity.
    pub channel_capacity: usize,
    /// Default coarse filter applied by the coordinator.
    pub filter: FilterSettings,
}

impl FeedConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `UNIVERSE_FEED_SNAPSHOT_PATH` is missing or
    /// empty, or an optional variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let snapshot_path = std::env::var("UNIVERSE_FEED_SNAPSHOT_PATH")
            .map_err(|_| ConfigError::MissingEnvVar("UNIVERSE_FEED_SNAPSHOT_PATH".to_string()))?;
        if snapshot_path.is_empty() {
            return Err(ConfigError::EmptyValue(
                "UNIVERSE_FEED_SNAPSHOT_PATH".to_string(),
            ));
        }

        let channel_capacity = parse_env_usize(
            "UNIVERSE_FEED_CHANNEL_CAPACITY",
            DEFAULT_CHANNEL_CAPACITY,
        )?;

        let defaults = FilterSettings::default();
        let filter = FilterSettings {
            min_price: parse_env_decimal("UNIVERSE_FEED_MIN_PRICE", defaults.min_price)?,
            min_dollar_volume: parse_env_decimal(
                "UNIVERSE_FEED_MIN_DOLLAR_VOLUME",
                defaults.min_dollar_volume,
            )?,
            require_fundamentals: parse_env_bool(
                "UNIVERSE_FEED_REQUIRE_FUNDAMENTALS",
                defaults.require_fundamentals,
            )?,
        };

        Ok(Self {
            snapshot_path: PathBuf::from(snapshot_path),
            channel_capacity,
            filter,
        })
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Environment variable failed to parse.
    #[error("environment variable {key} has invalid value: {message}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Parse error details.
        message: String,
    },
}

fn parse_env_usize(key: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{value} is not a valid count"),
        }),
    }
}

fn parse_env_decimal(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{value} is not a valid decimal"),
        }),
    }
}

fn parse_env_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{other} is not a valid boolean"),
            }),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
