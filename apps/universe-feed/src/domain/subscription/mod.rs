//! Subscription Configuration Types
//!
//! Describes the data stream backing a universe: which symbol is
//! subscribed, at what resolution, and how gaps and session boundaries
//! are treated. A configuration is a stable identity for the stream that
//! produced a batch of data, so it is comparable and hashable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

// =============================================================================
// Resolution
// =============================================================================

/// Bar resolution of a data subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Raw tick data.
    Tick,
    /// One-second bars.
    Second,
    /// One-minute bars.
    Minute,
    /// One-hour bars.
    Hour,
    /// Daily bars.
    #[default]
    Daily,
}

impl Resolution {
    /// Parse a resolution from string, defaulting to daily.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tick" => Self::Tick,
            "second" => Self::Second,
            "minute" => Self::Minute,
            "hour" => Self::Hour,
            _ => Self::Daily,
        }
    }

    /// Get the resolution name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tick => "tick",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Daily => "daily",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Subscription Configuration
// =============================================================================

/// Configuration of the data stream that produced a batch.
///
/// Stable for the lifetime of any notification that references it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionConfig {
    /// Subscribed symbol.
    pub symbol: Symbol,
    /// Bar resolution of the stream.
    pub resolution: Resolution,
    /// Whether missing bars are filled forward from the previous bar.
    pub fill_forward: bool,
    /// Whether extended-hours data is included.
    pub extended_hours: bool,
}

impl SubscriptionConfig {
    /// Create a configuration with fill-forward enabled and
    /// extended-hours data excluded.
    #[must_use]
    pub fn new(symbol: Symbol, resolution: Resolution) -> Self {
        Self {
            symbol,
            resolution,
            fill_forward: true,
            extended_hours: false,
        }
    }

    /// Create a daily-resolution configuration.
    #[must_use]
    pub fn daily(symbol: Symbol) -> Self {
        Self::new(symbol, Resolution::Daily)
    }

    /// Include extended-hours data.
    #[must_use]
    pub const fn with_extended_hours(mut self) -> Self {
        self.extended_hours = true;
        self
    }

    /// Disable fill-forward.
    #[must_use]
    pub const fn without_fill_forward(mut self) -> Self {
        self.fill_forward = false;
        self
    }
}

impl fmt::Display for SubscriptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.resolution)
    }
}

// =============================================================================
// Tests
// =============================================================================
