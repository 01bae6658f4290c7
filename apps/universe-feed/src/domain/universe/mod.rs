//! Universe Identity and Membership Types
//!
//! A universe is the set of instruments currently qualifying for a
//! trading session. This module holds its identity handle, its active
//! membership, and the delta produced when a new selection replaces the
//! previous membership.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::shared::Symbol;

// =============================================================================
// Universe Identifier
// =============================================================================

/// Opaque identity handle for a universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniverseId(String);

impl UniverseId {
    /// Create an identifier from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a new unique identifier using UUID v4.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the handle is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UniverseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UniverseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UniverseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UniverseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// =============================================================================
// Selection Delta
// =============================================================================

/// Membership changes produced by applying one selection cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    /// Symbols entering the universe this cycle.
    pub added: HashSet<Symbol>,
    /// Symbols leaving the universe this cycle.
    pub removed: HashSet<Symbol>,
}

impl SelectionDelta {
    /// Check if the selection left membership unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

// =============================================================================
// Active Set
// =============================================================================

/// The instruments currently active for one universe.
#[derive(Debug, Clone, Default)]
pub struct ActiveSet {
    members: HashSet<Symbol>,
}

impl ActiveSet {
    /// Create an empty active set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace membership with this cycle's selection.
    ///
    /// An empty selection is a valid outcome that removes every current
    /// member. Returns the delta between the old and new membership.
    pub fn apply(&mut self, selected: HashSet<Symbol>) -> SelectionDelta {
        let added = selected.difference(&self.members).cloned().collect();
        let removed = self.members.difference(&selected).cloned().collect();
        self.members = selected;
        SelectionDelta { added, removed }
    }

    /// Check whether a symbol is currently active.
    #[must_use]
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.members.contains(symbol)
    }

    /// Number of active instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the universe has no active instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate the active symbols in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.members.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
