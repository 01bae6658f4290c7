#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Universe Feed - Selection Notification Service
//!
//! Observes bulk fundamental data for universe-owning subscriptions,
//! packages each selection cycle's output into an immutable
//! notification, and fans the notification out to in-process consumers
//! that maintain the active instrument set for a trading session.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Core selection types
//!   - `selection`: The notification contract and its kind tag
//!   - `fundamentals`: Daily aggregate records and coarse filtering
//!   - `subscription`: Data stream configuration
//!   - `universe`: Universe identity and membership
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: Interface for snapshot sources
//!   - `services`: The producing feed and the consuming coordinator
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `broadcast`: Channel-based notification distribution
//!   - `replay`: File-backed snapshot source
//!   - `config`: Environment-driven configuration
//!   - `telemetry`: Tracing setup
//!
//! # Data Flow
//!
//! ```text
//! Snapshot Source ──► Selection Feed ──► Selection Hub ──► Coordinator
//!   (batches)          (notifications)    (broadcast)   ──► Consumer N
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Core selection types with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::fundamentals::{CoarseFilter, FundamentalSnapshot};
pub use domain::selection::{SelectionEventError, SelectionKind, UniverseSelectionEvent};
pub use domain::shared::{Symbol, SymbolError, Timestamp};
pub use domain::subscription::{Resolution, SubscriptionConfig};
pub use domain::universe::{ActiveSet, SelectionDelta, UniverseId};

// Application ports and services
pub use application::ports::{SnapshotBatch, SnapshotSourceError, SnapshotSourcePort};
pub use application::services::{FeedSummary, SelectionFeed, UniverseCoordinator};

// Infrastructure (for wiring and integration tests)
pub use infrastructure::broadcast::{SelectionHub, SharedSelectionHub};
pub use infrastructure::config::{ConfigError, FeedConfig, FilterSettings};
pub use infrastructure::replay::JsonlSnapshotSource;
pub use infrastructure::telemetry::init as init_telemetry;
