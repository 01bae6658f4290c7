//! Universe Feed Binary
//!
//! Replays a batch file through the selection pipeline: every batch
//! becomes a universe selection notification, and the coordinator logs
//! the membership changes each notification produces.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin universe-feed
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `UNIVERSE_FEED_SNAPSHOT_PATH`: Newline-delimited JSON batch file
//!
//! ## Optional
//! - `UNIVERSE_FEED_CHANNEL_CAPACITY`: Broadcast capacity (default: 1024)
//! - `UNIVERSE_FEED_MIN_PRICE`: Coarse filter minimum close (default: 5)
//! - `UNIVERSE_FEED_MIN_DOLLAR_VOLUME`: Coarse filter minimum dollar volume (default: 0)
//! - `UNIVERSE_FEED_REQUIRE_FUNDAMENTALS`: Require fundamental coverage (default: false)
//! - `RUST_LOG`: Log filter (default: universe_feed=info)

use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio_util::sync::CancellationToken;

use universe_feed::infrastructure::telemetry;
use universe_feed::{
    FeedConfig, JsonlSnapshotSource, SelectionFeed, SelectionHub, SharedSelectionHub,
    UniverseCoordinator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    telemetry::init();

    tracing::info!("Starting Universe Feed");

    let config = FeedConfig::from_env().context("loading configuration")?;
    log_config(&config);

    let shutdown_token = CancellationToken::new();

    let hub: SharedSelectionHub = Arc::new(SelectionHub::new(config.channel_capacity));
    let coordinator = Arc::new(UniverseCoordinator::new(config.filter.clone().into()));

    // Subscribe before the feed starts so no notification is missed.
    let consumer = spawn_coordinator_task(
        Arc::clone(&hub),
        Arc::clone(&coordinator),
        shutdown_token.clone(),
    );

    let mut source = JsonlSnapshotSource::open(&config.snapshot_path)
        .with_context(|| format!("opening {}", config.snapshot_path.display()))?;
    tracing::info!(batches = source.remaining(), "replay source ready");

    let feed = SelectionFeed::new(Arc::clone(&hub), shutdown_token.clone());
    let mut feed_handle = tokio::spawn(async move { feed.run(&mut source).await });

    let finished = tokio::select! {
        result = &mut feed_handle => Some(result),
        _ = signal::ctrl_c() => None,
    };
    let summary = match finished {
        Some(result) => result.context("feed task panicked")?,
        None => {
            tracing::info!("received ctrl-c, shutting down");
            shutdown_token.cancel();
            feed_handle.await.context("feed task panicked")?
        }
    }
    .context("running selection feed")?;

    shutdown_token.cancel();
    consumer.await.context("coordinator task panicked")?;

    tracing::info!(
        published = summary.published,
        skipped = summary.skipped,
        universes = coordinator.universe_count(),
        "universe feed finished"
    );
    Ok(())
}

/// Spawn the consuming side: receive notifications and apply them.
fn spawn_coordinator_task(
    hub: SharedSelectionHub,
    coordinator: Arc<UniverseCoordinator>,
    shutdown: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    let mut rx = hub.subscribe();
    tokio::spawn(async move {
        loop {
            let received = tokio::select! {
                () = shutdown.cancelled() => break,
                received = rx.recv() => received,
            };
            match received {
                Ok(event) => {
                    let _ = coordinator.handle_event(&event);
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "coordinator lagged behind the feed");
                }
                Err(RecvError::Closed) => return,
            }
        }

        // Drain what was already published before stopping.
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    let _ = coordinator.handle_event(&event);
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "coordinator lagged behind the feed");
                }
                Err(_) => break,
            }
        }
    })
}

/// Load .env file if present (development convenience).
fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("loaded environment from {}", path.display());
    }
}

/// Log the effective configuration.
fn log_config(config: &FeedConfig) {
    tracing::info!(
        snapshot_path = %config.snapshot_path.display(),
        channel_capacity = config.channel_capacity,
        min_price = %config.filter.min_price,
        min_dollar_volume = %config.filter.min_dollar_volume,
        require_fundamentals = config.filter.require_fundamentals,
        "configuration loaded"
    );
}
