//! Core domain types for the warrant quote board.
//!
//! This crate provides the fundamental types used throughout the system:
//! - `Quote`: one row of market data for a warrant
//! - `QuoteRow`: a quote plus its watchlist flag (consumer-facing contract)
//! - `ViewState`: which dataset currently backs the derived views
//! - `SortColumn`, `SortDirection`, `SortSpec`: column sort state

pub mod error;
pub mod quote;
pub mod view;

pub use error::{CoreError, Result};
pub use quote::{Quote, QuoteRow};
pub use view::{SortColumn, SortDirection, SortSpec, ViewState};
