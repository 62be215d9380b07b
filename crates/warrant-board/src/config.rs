//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Durable watchlist file.
    #[serde(default = "default_watchlist_path")]
    pub watchlist_path: String,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Snapshot feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Snapshot channel capacity.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Delay between replayed snapshots (ms).
    #[serde(default = "default_replay_interval_ms")]
    pub replay_interval_ms: u64,
}

/// Engine loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Command queue capacity.
    #[serde(default = "default_command_capacity")]
    pub command_capacity: usize,
    /// Derived-view broadcast capacity.
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

fn default_watchlist_path() -> String {
    "data/watchlist.json".to_string()
}

fn default_channel_capacity() -> usize {
    64
}

fn default_replay_interval_ms() -> u64 {
    200
}

fn default_command_capacity() -> usize {
    64
}

fn default_broadcast_capacity() -> usize {
    64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            watchlist_path: default_watchlist_path(),
            feed: FeedConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            replay_interval_ms: default_replay_interval_ms(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command_capacity: default_command_capacity(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

impl AppConfig {
    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
