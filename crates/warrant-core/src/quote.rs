//! Quote data types.
//!
//! A `Quote` is one fully-populated row of market data. Partial quotes never
//! exist at this level: validation happens upstream in warrant-feed, and a
//! record missing any field is dropped before it can become a `Quote`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of market data for a tradable warrant.
///
/// The wire names `VWAP` and `TO` are preserved for the snapshot payload and
/// the persisted watchlist file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument symbol, unique within a dataset.
    pub symbol: String,
    /// Instrument name.
    pub name: String,
    /// Quote date as delivered by the feed.
    pub date: String,
    /// Last price, non-negative.
    pub price: Decimal,
    /// Traded volume.
    pub volume: u64,
    /// Absolute price change, signed.
    pub change: Decimal,
    /// Percent price change, signed.
    pub percent_change: Decimal,
    /// Volume-weighted average price.
    #[serde(rename = "VWAP")]
    pub vwap: Decimal,
    /// Traded value.
    #[serde(rename = "TO")]
    pub turnover: Decimal,
}

/// A quote as exposed to the presentation layer: the quote itself plus
/// whether its symbol is currently on the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRow {
    #[serde(flatten)]
    pub quote: Quote,
    pub watchlisted: bool,
}
