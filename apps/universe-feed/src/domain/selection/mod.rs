//! Universe Selection Notification
//!
//! The notification raised by the data feed whenever a universe's
//! backing subscription yields a new batch of candidate records, and
//! consumed by universe coordination to update the active instrument
//! set. The notification is inert: an immutable snapshot of one
//! selection cycle's output plus the metadata a consumer needs to
//! process it without side-channel information.
//!
//! # Concurrency
//!
//! Every field is fixed at construction and the record storage sits
//! behind an `Arc`, so one event can be handed to any number of
//! concurrent handlers without synchronization. Cloning shares the same
//! record storage.

use std::fmt;
use std::sync::Arc;

use crate::domain::fundamentals::FundamentalSnapshot;
use crate::domain::shared::Timestamp;
use crate::domain::subscription::SubscriptionConfig;
use crate::domain::universe::UniverseId;

// =============================================================================
// Selection Kind
// =============================================================================

/// Classifies the bulk data that produced a selection batch.
///
/// Marked non-exhaustive: further kinds may be added, and consumers must
/// carry a wildcard arm rather than matching exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SelectionKind {
    /// Daily aggregate reference data (close, volume, dollar volume)
    /// used for coarse first-pass filtering of a large population.
    Fundamental,
}

impl SelectionKind {
    /// Get the kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fundamental => "fundamental",
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Construction Errors
// =============================================================================

/// Errors rejecting a degenerate notification at construction.
///
/// These are the only failures this type can produce. Failure is
/// immediate and local: a rejected notification is never delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionEventError {
    /// The universe handle carries no identity.
    #[error("universe handle is empty")]
    EmptyUniverse,
    /// The subscription configuration carries no symbol.
    #[error("subscription configuration has an empty symbol")]
    EmptySubscription,
}

// =============================================================================
// Universe Selection Event
// =============================================================================

/// Immutable snapshot of one universe-selection cycle's output.
///
/// Carries the universe that the batch belongs to, the kind of data that
/// produced it, the configuration of the subscription it came from, the
/// UTC instant it was raised, and the candidate records themselves. An
/// empty record sequence is a valid result meaning "no candidates this
/// cycle", which is distinct from no notification being raised at all.
///
/// Producers are expected to raise events with non-decreasing timestamps
/// per universe; that is a producer contract, not a check performed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseSelectionEvent {
    universe: UniverseId,
    kind: SelectionKind,
    config: SubscriptionConfig,
    occurred_at: Timestamp,
    records: Arc<[FundamentalSnapshot]>,
}

impl UniverseSelectionEvent {
    /// Assemble a notification.
    ///
    /// Pure data assembly: no side effects, no validation beyond the
    /// preconditions below.
    ///
    /// # Errors
    ///
    /// Returns an error if the universe handle or the subscription
    /// symbol is empty. Empty `records` are accepted.
    pub fn new(
        universe: UniverseId,
        kind: SelectionKind,
        config: SubscriptionConfig,
        occurred_at: Timestamp,
        records: impl Into<Arc<[FundamentalSnapshot]>>,
    ) -> Result<Self, SelectionEventError> {
        if universe.is_empty() {
            return Err(SelectionEventError::EmptyUniverse);
        }
        if config.symbol.is_empty() {
            return Err(SelectionEventError::EmptySubscription);
        }
        Ok(Self {
            universe,
            kind,
            config,
            occurred_at,
            records: records.into(),
        })
    }

    /// The universe this selection batch belongs to.
    #[must_use]
    pub const fn universe(&self) -> &UniverseId {
        &self.universe
    }

    /// The kind of bulk data that produced the batch.
    #[must_use]
    pub const fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// The configuration of the subscription that produced the batch.
    #[must_use]
    pub const fn config(&self) -> &SubscriptionConfig {
        &self.config
    }

    /// The UTC instant the selection was raised.
    #[must_use]
    pub const fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    /// The candidate records, in the exact order they were supplied.
    #[must_use]
    pub fn records(&self) -> &[FundamentalSnapshot] {
        &self.records
    }

    /// Number of candidate records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether this cycle produced no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
