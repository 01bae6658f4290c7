//! Port Interfaces
//!
//! Defines the interfaces (ports) for external systems following the
//! Hexagonal Architecture pattern.
//!
//! ## Driven Ports (Outbound)
//!
//! - `SnapshotSourcePort`: where the feed pulls candidate batches from

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::fundamentals::FundamentalSnapshot;
use crate::domain::shared::Timestamp;
use crate::domain::subscription::SubscriptionConfig;
use crate::domain::universe::UniverseId;

// =============================================================================
// Snapshot Batch
// =============================================================================

/// One selection cycle's worth of raw candidate data for a universe.
///
/// This is the feed's input shape; the feed turns it into a
/// [`UniverseSelectionEvent`](crate::domain::selection::UniverseSelectionEvent)
/// before anything downstream sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotBatch {
    /// Universe the batch belongs to.
    pub universe: UniverseId,
    /// Configuration of the stream that produced the batch.
    pub config: SubscriptionConfig,
    /// UTC instant the batch became available.
    pub as_of: Timestamp,
    /// Candidate records in source order.
    pub snapshots: Vec<FundamentalSnapshot>,
}

// =============================================================================
// Errors
// =============================================================================

/// Errors a snapshot source can produce.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotSourceError {
    /// Reading from the underlying source failed.
    #[error("snapshot source I/O error: {message}")]
    Io {
        /// Error details.
        message: String,
    },

    /// The source yielded data that does not parse as a batch.
    #[error("malformed snapshot batch at line {line}: {message}")]
    Malformed {
        /// One-based line number of the offending entry.
        line: usize,
        /// Parse error details.
        message: String,
    },
}

// =============================================================================
// Snapshot Source Port
// =============================================================================

/// Port for pulling candidate batches from an upstream source.
///
/// This is a driven (secondary/outbound) port. The infrastructure layer
/// provides implementations (e.g., the JSONL replay adapter).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotSourcePort: Send {
    /// Pull the next batch.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    async fn next_batch(&mut self) -> Result<Option<SnapshotBatch>, SnapshotSourceError>;
}
