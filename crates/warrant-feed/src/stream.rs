//! Stream subscription capability.
//!
//! The engine does not talk to a transport. It is handed a [`Subscription`]
//! at construction; whoever owns the matching [`SnapshotFeed`] pushes
//! `warrant_update` payloads into it. Dropping or closing either end ends the
//! stream, which is the whole lifecycle: there is no reconnect or
//! backpressure policy here.

use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{FeedError, FeedResult};
use crate::validator::{parse_payload, Snapshot};

/// Publishing side of a snapshot stream.
#[derive(Debug, Clone)]
pub struct SnapshotFeed {
    tx: mpsc::Sender<Snapshot>,
}

impl SnapshotFeed {
    /// Create a feed and its subscription.
    pub fn new(capacity: usize) -> (Self, Subscription) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, Subscription { rx })
    }

    /// Parse, validate, and publish a raw `warrant_update` payload.
    ///
    /// Malformed records inside the payload are dropped by validation; only
    /// a structurally invalid payload or a closed subscription is an error.
    pub async fn publish(&self, payload: &str) -> FeedResult<()> {
        let snapshot = parse_payload(payload)?;
        self.publish_snapshot(snapshot).await
    }

    /// Publish an already-validated snapshot.
    pub async fn publish_snapshot(&self, snapshot: Snapshot) -> FeedResult<()> {
        debug!(quotes = snapshot.quotes.len(), "Publishing snapshot");
        self.tx
            .send(snapshot)
            .await
            .map_err(|_| FeedError::ChannelClosed)
    }
}

/// Receiving side of a snapshot stream, owned by the engine loop.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::Receiver<Snapshot>,
}

impl Subscription {
    /// Receive the next snapshot; `None` once the feed is gone.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }

    /// Close the subscription. Pending snapshots are discarded and the
    /// publisher sees the channel as closed.
    pub fn unsubscribe(mut self) {
        self.rx.close();
    }
}
