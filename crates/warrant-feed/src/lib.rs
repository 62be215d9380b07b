//! Snapshot validation and stream subscription for the warrant quote board.
//!
//! Turns raw `warrant_update` payloads into validated [`Snapshot`]s and
//! provides the injected stream capability ([`SnapshotFeed`] /
//! [`Subscription`]) the engine consumes.

pub mod error;
pub mod stream;
pub mod validator;

pub use error::{FeedError, FeedResult};
pub use stream::{SnapshotFeed, Subscription};
pub use validator::{parse_payload, validate_snapshot, RawQuote, Snapshot};
