//! Broadcast Channel Adapter
//!
//! Distributes universe selection notifications to any number of
//! in-process subscribers over a tokio broadcast channel. Each
//! subscriber gets its own clone of the event; clones share the
//! underlying record storage, so fan-out never copies the batch.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::domain::selection::UniverseSelectionEvent;

/// Default channel capacity.
const DEFAULT_CAPACITY: usize = 1_024;

// =============================================================================
// Selection Hub
// =============================================================================

/// Fan-out point for universe selection notifications.
///
/// # Example
///
/// ```rust
/// use universe_feed::infrastructure::broadcast::SelectionHub;
///
/// let hub = SelectionHub::with_defaults();
///
/// // Consumers subscribe before the feed starts publishing.
/// let mut rx = hub.subscribe();
///
/// // In another task: hub.publish(event);
/// ```
#[derive(Debug)]
pub struct SelectionHub {
    tx: broadcast::Sender<UniverseSelectionEvent>,
}

impl SelectionHub {
    /// Create a hub with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            tx: broadcast::channel(capacity).0,
        }
    }

    /// Create a hub with the default capacity.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Publish a notification to all subscribers.
    ///
    /// Returns the number of receivers the event reached, or `None`
    /// when nobody is listening. Publishing to an empty room is not an
    /// error.
    #[must_use]
    pub fn publish(&self, event: UniverseSelectionEvent) -> Option<usize> {
        self.tx.send(event).ok()
    }

    /// Get a new receiver for selection notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<UniverseSelectionEvent> {
        self.tx.subscribe()
    }

    /// Number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SelectionHub {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Shared selection hub reference.
pub type SharedSelectionHub = Arc<SelectionHub>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::domain::fundamentals::FundamentalSnapshot;
    use crate::domain::selection::SelectionKind;
    use crate::domain::shared::{Symbol, Timestamp};
    use crate::domain::subscription::SubscriptionConfig;
    use crate::domain::universe::UniverseId;

    use super::*;

    fn make_event() -> UniverseSelectionEvent {
        UniverseSelectionEvent::new(
            UniverseId::new("u1"),
            SelectionKind::Fundamental,
            SubscriptionConfig::daily(Symbol::new("SPY")),
            Timestamp::parse("2026-03-02T00:00:00Z").unwrap(),
            vec![FundamentalSnapshot::new(
                Symbol::new("AAPL"),
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                Decimal::from(150),
                1_000_000,
            )],
        )
        .unwrap()
    }

    #[test]
    fn receiver_count_tracks_subscriptions() {
        let hub = SelectionHub::with_defaults();
        assert_eq!(hub.receiver_count(), 0);

        let rx1 = hub.subscribe();
        assert_eq!(hub.receiver_count(), 1);

        {
            let _rx2 = hub.subscribe();
            assert_eq!(hub.receiver_count(), 2);
        }
        assert_eq!(hub.receiver_count(), 1);

        drop(rx1);
        assert_eq!(hub.receiver_count(), 0);
    }

    #[test]
    fn publish_with_no_receivers_returns_none() {
        let hub = SelectionHub::with_defaults();
        assert!(hub.publish(make_event()).is_none());
    }

    #[tokio::test]
    async fn publish_reaches_a_subscriber() {
        let hub = SelectionHub::with_defaults();
        let mut rx = hub.subscribe();

        let sent = hub.publish(make_event());
        assert_eq!(sent, Some(1));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.universe(), &UniverseId::new("u1"));
    }

    #[tokio::test]
    async fn every_subscriber_observes_the_same_event() {
        let hub = SelectionHub::with_defaults();
        let mut rx1 = hub.subscribe();
        let mut rx2 = hub.subscribe();

        let _ = hub.publish(make_event());

        let a = rx1.recv().await.unwrap();
        let b = rx2.recv().await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn events_arrive_in_publish_order() {
        let hub = SelectionHub::new(16);
        let mut rx = hub.subscribe();

        for _ in 0..3 {
            let _ = hub.publish(make_event());
        }

        for _ in 0..3 {
            assert!(rx.recv().await.is_ok());
        }
    }
}
