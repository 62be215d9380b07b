//! Reactive state engine for the warrant quote board.
//!
//! Takes full-replacement quote snapshots and user actions, and derives the
//! displayed view (filtered, sorted, or ranked, over the main dataset or the
//! watchlist) through explicit pure derivation functions. All mutations are
//! serialized through one update loop; derived views are immutable row
//! vectors broadcast to subscribers.

pub mod board;
pub mod dataset;
pub mod filter;
pub mod ranking;
pub mod run;
pub mod sort;

pub use board::Board;
pub use dataset::Dataset;
pub use filter::{FilterCriteria, FilterInput};
pub use ranking::{RankKind, TOP_N};
pub use run::{Command, Engine, EngineHandle, ViewUpdate};
