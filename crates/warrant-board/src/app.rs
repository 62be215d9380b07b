//! Application wiring and main loop.

use std::path::PathBuf;

use tokio::sync::broadcast;
use tracing::{debug, info};

use warrant_engine::{Board, Engine, ViewUpdate};
use warrant_feed::SnapshotFeed;
use warrant_persistence::WatchlistStore;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::replay;

/// The assembled application.
pub struct Application {
    config: AppConfig,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the engine, driven by a replay file or until interrupted.
    ///
    /// With a replay source the process ends once every snapshot has been
    /// published and the engine loop has drained. Without one it idles until
    /// Ctrl-C; a live transport would own the feed in that setup.
    pub async fn run(&self, replay_path: Option<PathBuf>) -> AppResult<()> {
        let watchlist = WatchlistStore::load(&self.config.watchlist_path);
        info!(
            path = %self.config.watchlist_path,
            entries = watchlist.len(),
            "Watchlist loaded"
        );

        let (feed, subscription) = SnapshotFeed::new(self.config.feed.channel_capacity);
        let (engine, handle) = Engine::new(
            Board::new(watchlist),
            subscription,
            self.config.engine.command_capacity,
            self.config.engine.broadcast_capacity,
        );

        let updates = handle.subscribe();
        let render_task = tokio::spawn(log_updates(updates));
        let engine_task = tokio::spawn(engine.run());

        match replay_path {
            Some(path) => {
                let published =
                    replay::replay_file(&path, &feed, self.config.feed.replay_interval_ms).await?;
                info!(snapshots = published, "Replay source exhausted");
            }
            None => {
                info!("No replay source configured, waiting for Ctrl-C");
                tokio::signal::ctrl_c().await?;
            }
        }

        // Closing both inbound channels ends the engine loop
        drop(feed);
        drop(handle);
        let _ = engine_task.await;
        render_task.abort();

        Ok(())
    }
}

/// Log each derived-view update. Stands in for the external presentation
/// layer, which would subscribe the same way.
async fn log_updates(mut updates: broadcast::Receiver<ViewUpdate>) {
    loop {
        match updates.recv().await {
            Ok(update) => {
                info!(
                    view = %update.view,
                    rows = update.rows.len(),
                    "View updated"
                );
                for row in &update.rows {
                    debug!(
                        symbol = %row.quote.symbol,
                        price = %row.quote.price,
                        percent_change = %row.quote.percent_change,
                        watchlisted = row.watchlisted,
                        "Row"
                    );
                }
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                debug!(missed, "Update subscriber lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, FeedConfig};

    fn payload(symbol: &str) -> String {
        format!(
            r#"{{"0": {{"symbol": "{symbol}", "name": "{symbol} Warrant", "date": "2024-05-01", "price": 1.0, "volume": 10, "change": 0.1, "percent_change": 1.0, "VWAP": 1.0, "TO": 10.0}}}}"#
        )
    }

    #[tokio::test]
    async fn test_run_with_replay_terminates() {
        let dir = tempfile::tempdir().unwrap();
        let replay_path = dir.path().join("snapshots.jsonl");
        std::fs::write(&replay_path, format!("{}\n{}\n", payload("AAA"), payload("BBB"))).unwrap();

        let config = AppConfig {
            watchlist_path: dir
                .path()
                .join("watchlist.json")
                .to_string_lossy()
                .into_owned(),
            feed: FeedConfig {
                channel_capacity: 8,
                replay_interval_ms: 0,
            },
            engine: EngineConfig {
                command_capacity: 8,
                broadcast_capacity: 8,
            },
        };

        let app = Application::new(config);
        app.run(Some(replay_path)).await.unwrap();
    }
}
