//! Daily Fundamental Data Types
//!
//! One snapshot per instrument per day: close price, share volume, and
//! dollar volume. These are the records carried by a fundamental
//! selection batch, and the input to coarse first-pass filtering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

// =============================================================================
// Fundamental Snapshot
// =============================================================================

/// Daily aggregate reference data for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Trading date the aggregates cover.
    pub date: NaiveDate,
    /// Daily close price.
    pub close: Decimal,
    /// Daily share volume.
    pub volume: i64,
    /// Daily dollar volume (close price times share volume).
    pub dollar_volume: Decimal,
    /// Whether detailed fundamental data exists for this instrument.
    pub has_fundamentals: bool,
}

impl FundamentalSnapshot {
    /// Create a snapshot, deriving dollar volume from close and volume.
    #[must_use]
    pub fn new(symbol: Symbol, date: NaiveDate, close: Decimal, volume: i64) -> Self {
        let dollar_volume = close * Decimal::from(volume);
        Self {
            symbol,
            date,
            close,
            volume,
            dollar_volume,
            has_fundamentals: false,
        }
    }

    /// Mark the instrument as having detailed fundamental coverage.
    #[must_use]
    pub const fn with_fundamentals(mut self) -> Self {
        self.has_fundamentals = true;
        self
    }
}

// =============================================================================
// Coarse Filter
// =============================================================================

/// First-pass filter over daily fundamental snapshots.
///
/// Applied by the consuming side to narrow a large instrument population
/// before any finer selection runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoarseFilter {
    /// Minimum close price an instrument must trade at.
    pub min_price: Decimal,
    /// Minimum daily dollar volume.
    pub min_dollar_volume: Decimal,
    /// Require detailed fundamental coverage.
    pub require_fundamentals: bool,
}

impl CoarseFilter {
    /// Create a filter with no fundamental-coverage requirement.
    #[must_use]
    pub const fn new(min_price: Decimal, min_dollar_volume: Decimal) -> Self {
        Self {
            min_price,
            min_dollar_volume,
            require_fundamentals: false,
        }
    }

    /// Require instruments to carry detailed fundamental data.
    #[must_use]
    pub const fn with_required_fundamentals(mut self) -> Self {
        self.require_fundamentals = true;
        self
    }

    /// Check whether a snapshot passes the filter.
    #[must_use]
    pub fn passes(&self, snapshot: &FundamentalSnapshot) -> bool {
        if snapshot.close < self.min_price {
            return false;
        }
        if snapshot.dollar_volume < self.min_dollar_volume {
            return false;
        }
        if self.require_fundamentals && !snapshot.has_fundamentals {
            return false;
        }
        true
    }
}

impl Default for CoarseFilter {
    fn default() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn snapshot(symbol: &str, close: i64, volume: i64) -> FundamentalSnapshot {
        FundamentalSnapshot::new(Symbol::new(symbol), date(), Decimal::from(close), volume)
    }

    #[test]
    fn dollar_volume_derived_from_close_and_volume() {
        let snap = snapshot("AAPL", 150, 1_000_000);
        assert_eq!(snap.dollar_volume, Decimal::from(150_000_000_i64));
    }

    #[test]
    fn with_fundamentals_sets_flag() {
        let snap = snapshot("AAPL", 150, 100).with_fundamentals();
        assert!(snap.has_fundamentals);
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let snap = snapshot("AAPL", 150, 1_000_000);
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: FundamentalSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn filter_rejects_below_min_price() {
        let filter = CoarseFilter::new(Decimal::from(5), Decimal::ZERO);
        assert!(!filter.passes(&snapshot("PENNY", 1, 1_000_000)));
        assert!(filter.passes(&snapshot("AAPL", 150, 1_000_000)));
    }

    #[test]
    fn filter_rejects_below_min_dollar_volume() {
        let filter = CoarseFilter::new(Decimal::ZERO, Decimal::from(1_000_000));
        assert!(!filter.passes(&snapshot("THIN", 10, 100)));
        assert!(filter.passes(&snapshot("AAPL", 150, 1_000_000)));
    }

    #[test]
    fn filter_price_boundary_is_inclusive() {
        let filter = CoarseFilter::new(Decimal::from(5), Decimal::ZERO);
        assert!(filter.passes(&snapshot("FIVE", 5, 100)));
    }

    #[test]
    fn filter_requires_fundamentals_when_asked() {
        let filter =
            CoarseFilter::new(Decimal::ZERO, Decimal::ZERO).with_required_fundamentals();
        assert!(!filter.passes(&snapshot("AAPL", 150, 100)));
        assert!(filter.passes(&snapshot("AAPL", 150, 100).with_fundamentals()));
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = CoarseFilter::default();
        assert!(filter.passes(&snapshot("ANY", 1, 1)));
    }
}
