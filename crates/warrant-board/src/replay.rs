//! Deterministic snapshot replay.
//!
//! Reads a JSON Lines file where each line is one `warrant_update` payload
//! and feeds it through the same `SnapshotFeed` a live transport would use.

use std::path::Path;
use std::time::Duration;

use tracing::{info, warn};

use warrant_feed::{FeedError, SnapshotFeed};

use crate::error::AppResult;

/// Replay every payload in `path`, pausing `interval_ms` between snapshots.
///
/// Unparseable lines are skipped with a warning; a closed subscription stops
/// the replay. Returns the number of snapshots published.
pub async fn replay_file(path: &Path, feed: &SnapshotFeed, interval_ms: u64) -> AppResult<usize> {
    let content = std::fs::read_to_string(path)?;
    let interval = Duration::from_millis(interval_ms);
    let mut published = 0usize;

    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match feed.publish(line).await {
            Ok(()) => {
                published += 1;
                tokio::time::sleep(interval).await;
            }
            Err(FeedError::ChannelClosed) => {
                warn!(lineno = lineno + 1, "Subscription closed, stopping replay");
                break;
            }
            Err(e) => {
                warn!(lineno = lineno + 1, error = %e, "Skipping bad replay line");
            }
        }
    }

    info!(path = %path.display(), published, "Replay complete");
    Ok(published)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(symbol: &str) -> String {
        format!(
            r#"{{"0": {{"symbol": "{symbol}", "name": "{symbol} Warrant", "date": "2024-05-01", "price": 1.0, "volume": 10, "change": 0.1, "percent_change": 1.0, "VWAP": 1.0, "TO": 10.0}}}}"#
        )
    }

    #[tokio::test]
    async fn test_replay_publishes_each_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.jsonl");
        std::fs::write(
            &path,
            format!("{}\n\n{}\n", payload("AAA"), payload("BBB")),
        )
        .unwrap();

        let (feed, mut sub) = SnapshotFeed::new(16);
        let published = replay_file(&path, &feed, 0).await.unwrap();
        assert_eq!(published, 2);

        assert_eq!(sub.recv().await.unwrap().quotes[0].symbol, "AAA");
        assert_eq!(sub.recv().await.unwrap().quotes[0].symbol, "BBB");
    }

    #[tokio::test]
    async fn test_replay_skips_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshots.jsonl");
        std::fs::write(&path, format!("not json\n{}\n", payload("AAA"))).unwrap();

        let (feed, mut sub) = SnapshotFeed::new(16);
        let published = replay_file(&path, &feed, 0).await.unwrap();
        assert_eq!(published, 1);
        assert_eq!(sub.recv().await.unwrap().quotes[0].symbol, "AAA");
    }

    #[tokio::test]
    async fn test_replay_missing_file_is_error() {
        let (feed, _sub) = SnapshotFeed::new(4);
        assert!(replay_file(Path::new("/nonexistent.jsonl"), &feed, 0)
            .await
            .is_err());
    }
}
