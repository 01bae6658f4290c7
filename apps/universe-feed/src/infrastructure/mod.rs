//! Infrastructure Layer - Adapters and external integrations.
//!
//! This layer contains the concrete implementations of the port
//! interfaces defined in the application layer.

/// Broadcast channel adapter for notification fan-out.
pub mod broadcast;

/// Configuration loading.
pub mod config;

/// File-backed replay snapshot source.
pub mod replay;

/// Tracing initialization.
pub mod telemetry;
