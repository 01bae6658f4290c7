//! Universe Coordinator Service
//!
//! The consuming side of the notification contract: receives selection
//! events, runs the coarse filter over the candidate records, and keeps
//! the per-universe active instrument set current.
//!
//! # Concurrency
//!
//! Per-universe state lives behind a `parking_lot::RwLock`, so handlers
//! on different tasks can process events concurrently. The coordinator
//! only reads the notification; the event and its records are never
//! mutated.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::domain::fundamentals::CoarseFilter;
use crate::domain::selection::{SelectionKind, UniverseSelectionEvent};
use crate::domain::shared::Symbol;
use crate::domain::universe::{ActiveSet, SelectionDelta, UniverseId};

// =============================================================================
// Per-Universe State
// =============================================================================

/// Filter and membership for one universe.
#[derive(Debug)]
struct UniverseState {
    filter: CoarseFilter,
    active: ActiveSet,
}

impl UniverseState {
    fn new(filter: CoarseFilter) -> Self {
        Self {
            filter,
            active: ActiveSet::new(),
        }
    }
}

// =============================================================================
// Universe Coordinator
// =============================================================================

/// Maintains active instrument sets from selection notifications.
///
/// Universes are registered explicitly with their own filter, or lazily
/// on first sight with the coordinator's default filter.
pub struct UniverseCoordinator {
    default_filter: CoarseFilter,
    universes: RwLock<HashMap<UniverseId, UniverseState>>,
}

impl UniverseCoordinator {
    /// Create a coordinator that applies `default_filter` to universes
    /// it has not been told about explicitly.
    #[must_use]
    pub fn new(default_filter: CoarseFilter) -> Self {
        Self {
            default_filter,
            universes: RwLock::new(HashMap::new()),
        }
    }

    /// Register a universe with its own filter, resetting any existing
    /// membership.
    pub fn register(&self, universe: UniverseId, filter: CoarseFilter) {
        self.universes
            .write()
            .insert(universe, UniverseState::new(filter));
    }

    /// Apply one selection notification.
    ///
    /// Returns the membership delta, or `None` when the event's kind is
    /// one this coordinator does not know how to interpret.
    pub fn handle_event(&self, event: &UniverseSelectionEvent) -> Option<SelectionDelta> {
        // The kind tag is open for extension; unhandled kinds are ignored.
        if event.kind() != SelectionKind::Fundamental {
            debug!(kind = %event.kind(), "ignoring selection of unhandled kind");
            return None;
        }

        let selected: HashSet<Symbol> = {
            let universes = self.universes.read();
            let filter = universes
                .get(event.universe())
                .map_or(&self.default_filter, |state| &state.filter);
            event
                .records()
                .iter()
                .filter(|snapshot| filter.passes(snapshot))
                .map(|snapshot| snapshot.symbol.clone())
                .collect()
        };

        let mut universes = self.universes.write();
        let state = universes
            .entry(event.universe().clone())
            .or_insert_with(|| UniverseState::new(self.default_filter.clone()));
        let delta = state.active.apply(selected);

        if delta.is_empty() {
            debug!(universe = %event.universe(), "selection left membership unchanged");
        } else {
            info!(
                universe = %event.universe(),
                added = delta.added.len(),
                removed = delta.removed.len(),
                active = state.active.len(),
                "universe membership updated"
            );
        }
        Some(delta)
    }

    /// Get a universe's active symbols, unordered.
    #[must_use]
    pub fn active_symbols(&self, universe: &UniverseId) -> Vec<Symbol> {
        self.universes
            .read()
            .get(universe)
            .map(|state| state.active.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of universes the coordinator is tracking.
    #[must_use]
    pub fn universe_count(&self) -> usize {
        self.universes.read().len()
    }
}

// =============================================================================
// Tests
// =============================================================================
