//! Live warrant quote board application.
//!
//! Wires the components together:
//! - snapshot feed and subscription (warrant-feed)
//! - board state and update loop (warrant-engine)
//! - persisted watchlist (warrant-persistence)
//!
//! The presentation layer is an external collaborator; this binary logs
//! derived-view updates and can replay recorded snapshots deterministically.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod replay;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
