//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Subscriber lagged or disconnected")]
    ChannelClosed,
}

pub type FeedResult<T> = Result<T, FeedError>;
