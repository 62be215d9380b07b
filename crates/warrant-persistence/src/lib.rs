//! Durable watchlist storage for the warrant quote board.
//!
//! The watchlist is a single JSON file holding an order-significant array of
//! quote records. It is rewritten in full on every mutation and reloaded at
//! process start.

pub mod error;
pub mod watchlist;

pub use error::{PersistenceError, PersistenceResult};
pub use watchlist::WatchlistStore;
