//! Replay Snapshot Source
//!
//! File-backed snapshot source: reads newline-delimited JSON batches
//! and yields them in file order. Used by the feed binary and by
//! integration tests to drive the pipeline without an upstream vendor
//! connection.

use std::collections::VecDeque;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{SnapshotBatch, SnapshotSourceError, SnapshotSourcePort};

// =============================================================================
// JSONL Snapshot Source
// =============================================================================

/// Snapshot source backed by a newline-delimited JSON file.
///
/// One [`SnapshotBatch`] per line; blank lines are skipped. The whole
/// file is parsed up front, so malformed input fails at open time.
#[derive(Debug)]
pub struct JsonlSnapshotSource {
    batches: VecDeque<SnapshotBatch>,
}

impl JsonlSnapshotSource {
    /// Open and parse a batch file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any line fails to
    /// parse as a batch.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SnapshotSourceError> {
        let contents =
            std::fs::read_to_string(path.as_ref()).map_err(|err| SnapshotSourceError::Io {
                message: err.to_string(),
            })?;
        Self::parse(&contents)
    }

    /// Parse batch lines from a string.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first line that fails to parse.
    pub fn parse(contents: &str) -> Result<Self, SnapshotSourceError> {
        let mut batches = VecDeque::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let batch = serde_json::from_str(line).map_err(|err| {
                SnapshotSourceError::Malformed {
                    line: index + 1,
                    message: err.to_string(),
                }
            })?;
            batches.push_back(batch);
        }
        Ok(Self { batches })
    }

    /// Number of batches left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

#[async_trait]
impl SnapshotSourcePort for JsonlSnapshotSource {
    async fn next_batch(&mut self) -> Result<Option<SnapshotBatch>, SnapshotSourceError> {
        Ok(self.batches.pop_front())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::domain::fundamentals::FundamentalSnapshot;
    use crate::domain::shared::{Symbol, Timestamp};
    use crate::domain::subscription::SubscriptionConfig;
    use crate::domain::universe::UniverseId;

    use super::*;

    fn batch(universe: &str, at: &str) -> SnapshotBatch {
        SnapshotBatch {
            universe: UniverseId::new(universe),
            config: SubscriptionConfig::daily(Symbol::new("SPY")),
            as_of: Timestamp::parse(at).unwrap(),
            snapshots: vec![FundamentalSnapshot::new(
                Symbol::new("AAPL"),
                NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                Decimal::from(150),
                1_000_000,
            )],
        }
    }

    fn jsonl(batches: &[SnapshotBatch]) -> String {
        batches
            .iter()
            .map(|b| serde_json::to_string(b).unwrap())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn yields_batches_in_file_order() {
        let contents = jsonl(&[
            batch("u1", "2026-03-02T00:00:00Z"),
            batch("u1", "2026-03-03T00:00:00Z"),
        ]);
        let mut source = JsonlSnapshotSource::parse(&contents).unwrap();
        assert_eq!(source.remaining(), 2);

        let first = source.next_batch().await.unwrap().unwrap();
        let second = source.next_batch().await.unwrap().unwrap();
        assert!(first.as_of < second.as_of);
        assert!(source.next_batch().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let contents = format!(
            "\n{}\n\n{}\n",
            serde_json::to_string(&batch("u1", "2026-03-02T00:00:00Z")).unwrap(),
            serde_json::to_string(&batch("u2", "2026-03-02T00:00:00Z")).unwrap(),
        );
        let source = JsonlSnapshotSource::parse(&contents).unwrap();
        assert_eq!(source.remaining(), 2);
    }

    #[test]
    fn malformed_line_is_reported_with_its_number() {
        let contents = format!(
            "{}\nnot json\n",
            serde_json::to_string(&batch("u1", "2026-03-02T00:00:00Z")).unwrap(),
        );
        let err = JsonlSnapshotSource::parse(&contents).unwrap_err();
        assert!(matches!(
            err,
            SnapshotSourceError::Malformed { line: 2, .. }
        ));
    }

    #[test]
    fn open_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "{}",
            serde_json::to_string(&batch("u1", "2026-03-02T00:00:00Z")).unwrap()
        )
        .unwrap();

        let source = JsonlSnapshotSource::open(file.path()).unwrap();
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn open_missing_file_is_an_io_error() {
        let err = JsonlSnapshotSource::open("/nonexistent/batches.jsonl").unwrap_err();
        assert!(matches!(err, SnapshotSourceError::Io { .. }));
    }
}
