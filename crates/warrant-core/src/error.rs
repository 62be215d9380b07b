//! Error types for warrant-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    #[error("Unknown view: {0}")]
    UnknownView(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
