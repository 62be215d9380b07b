//! Watchlist store with toggle semantics.
//!
//! Entries are full `Quote` values copied at toggle time. They are snapshots
//! by design: later movement in the live dataset does not touch them.
//! Membership is keyed by symbol and insertion order is preserved.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use warrant_core::Quote;

use crate::error::PersistenceResult;

/// A named, independently persisted quote set.
#[derive(Debug)]
pub struct WatchlistStore {
    path: PathBuf,
    entries: Vec<Quote>,
}

impl WatchlistStore {
    /// Load the watchlist from `path`, defaulting to empty if the file is
    /// absent or unreadable. Unreadable state is not an error to the caller.
    ///
    /// Creates the parent directory if it doesn't exist, so the first toggle
    /// can write through a fresh path.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %e, "Failed to create watchlist directory");
                }
            }
        }
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Quote>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Unreadable watchlist, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No watchlist file, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read watchlist, starting empty");
                Vec::new()
            }
        };
        Self { path, entries }
    }

    /// Toggle membership for `symbol`.
    ///
    /// Present: the entry is removed. Absent: `snapshot` is copied in at the
    /// end of the list; with no snapshot available the call is a no-op.
    /// Every mutation rewrites the whole file; a failed write fails only
    /// this call, the in-memory list keeps the mutation.
    ///
    /// Returns whether the symbol is watched after the call.
    pub fn toggle(&mut self, symbol: &str, snapshot: Option<&Quote>) -> PersistenceResult<bool> {
        if let Some(pos) = self.entries.iter().position(|q| q.symbol == symbol) {
            self.entries.remove(pos);
            self.save()?;
            return Ok(false);
        }
        match snapshot {
            Some(quote) => {
                self.entries.push(quote.clone());
                self.save()?;
                Ok(true)
            }
            None => {
                debug!(symbol, "Toggle for unknown symbol ignored");
                Ok(false)
            }
        }
    }

    /// Whether `symbol` is currently on the watchlist.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|q| q.symbol == symbol)
    }

    /// Entries in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> PersistenceResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "Watchlist saved");
        Ok(())
    }
}
