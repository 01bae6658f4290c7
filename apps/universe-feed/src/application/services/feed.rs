//! Selection Feed Service
//!
//! The producing side of the notification contract: pulls candidate
//! batches from a snapshot source, packages each one into an immutable
//! [`UniverseSelectionEvent`], and publishes it on the selection hub.
//!
//! The feed honors the per-universe timestamp contract: successive
//! notifications for one universe carry non-decreasing timestamps. A
//! regression coming out of the source is logged and still delivered.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::application::ports::{SnapshotBatch, SnapshotSourceError, SnapshotSourcePort};
use crate::domain::selection::{SelectionKind, UniverseSelectionEvent};
use crate::domain::shared::Timestamp;
use crate::domain::universe::UniverseId;
use crate::infrastructure::broadcast::SharedSelectionHub;

// =============================================================================
// Feed Summary
// =============================================================================

/// Counters for one feed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Notifications published to the hub.
    pub published: usize,
    /// Degenerate batches dropped without a notification.
    pub skipped: usize,
}

// =============================================================================
// Selection Feed
// =============================================================================

/// Publishes universe selection notifications from a snapshot source.
pub struct SelectionFeed {
    hub: SharedSelectionHub,
    shutdown: CancellationToken,
    last_published: HashMap<UniverseId, Timestamp>,
    summary: FeedSummary,
}

impl SelectionFeed {
    /// Create a feed publishing to the given hub.
    #[must_use]
    pub fn new(hub: SharedSelectionHub, shutdown: CancellationToken) -> Self {
        Self {
            hub,
            shutdown,
            last_published: HashMap::new(),
            summary: FeedSummary::default(),
        }
    }

    /// Drain the source, publishing one notification per batch.
    ///
    /// Runs until the source is exhausted or the shutdown token fires.
    ///
    /// # Errors
    ///
    /// Returns the first error the source produces; batches published
    /// before the error stay delivered.
    pub async fn run<S: SnapshotSourcePort>(
        mut self,
        source: &mut S,
    ) -> Result<FeedSummary, SnapshotSourceError> {
        let shutdown = self.shutdown.clone();
        loop {
            let batch = tokio::select! {
                () = shutdown.cancelled() => {
                    debug!("selection feed shutting down");
                    break;
                }
                batch = source.next_batch() => batch?,
            };
            match batch {
                Some(batch) => self.publish_batch(batch),
                None => break,
            }
        }
        Ok(self.summary)
    }

    /// Package one batch into a notification and publish it.
    ///
    /// A batch that fails construction aborts this cycle only: the feed
    /// logs, counts the skip, and moves on to the next batch.
    fn publish_batch(&mut self, batch: SnapshotBatch) {
        let SnapshotBatch {
            universe,
            config,
            as_of,
            snapshots,
        } = batch;

        let event = match UniverseSelectionEvent::new(
            universe,
            SelectionKind::Fundamental,
            config,
            as_of,
            snapshots,
        ) {
            Ok(event) => event,
            Err(err) => {
                warn!(%err, "dropping degenerate selection cycle");
                self.summary.skipped += 1;
                return;
            }
        };

        if let Some(last) = self.last_published.get(event.universe())
            && event.occurred_at() < *last
        {
            warn!(
                universe = %event.universe(),
                at = %event.occurred_at(),
                last = %last,
                "selection timestamp regressed"
            );
        }
        self.last_published
            .insert(event.universe().clone(), event.occurred_at());

        match self.hub.publish(event) {
            Some(receivers) => debug!(receivers, "published selection"),
            None => debug!("published selection with no receivers"),
        }
        self.summary.published += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================
