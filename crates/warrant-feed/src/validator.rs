//! Snapshot payload validation.
//!
//! A `warrant_update` payload is a JSON object mapping arbitrary keys to raw
//! quote records. Each record is admitted only if every required field is
//! present and well-typed; failing records are dropped silently and the
//! survivors keep the payload's own order.
//!
//! Presence is modeled with `Option`, so a field that is legitimately zero
//! still counts as present. Only an absent, null, or type-malformed field
//! fails validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use warrant_core::Quote;

use crate::error::{FeedError, FeedResult};

/// A raw quote record as it arrives on the wire, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuote {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub change: Option<Decimal>,
    #[serde(default)]
    pub percent_change: Option<Decimal>,
    #[serde(rename = "VWAP", default)]
    pub vwap: Option<Decimal>,
    #[serde(rename = "TO", default)]
    pub turnover: Option<Decimal>,
}

impl RawQuote {
    /// Promote to a full `Quote`, or `None` if any field is missing or the
    /// price is negative.
    pub fn into_quote(self) -> Option<Quote> {
        let price = self.price?;
        if price < Decimal::ZERO {
            return None;
        }
        Some(Quote {
            symbol: self.symbol?,
            name: self.name?,
            date: self.date?,
            price,
            volume: self.volume?,
            change: self.change?,
            percent_change: self.percent_change?,
            vwap: self.vwap?,
            turnover: self.turnover?,
        })
    }
}

/// A validated full-replacement snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Validated quotes in payload order.
    pub quotes: Vec<Quote>,
    /// When the payload was received.
    pub received_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            received_at: Utc::now(),
        }
    }
}

/// Validate a snapshot mapping, keeping payload order.
///
/// Records that fail deserialization or the presence check are dropped, not
/// surfaced as errors. The drop count is logged at debug level only.
pub fn validate_snapshot(payload: &Map<String, Value>) -> Vec<Quote> {
    let total = payload.len();
    let quotes: Vec<Quote> = payload
        .values()
        .filter_map(|value| serde_json::from_value::<RawQuote>(value.clone()).ok())
        .filter_map(RawQuote::into_quote)
        .collect();

    let dropped = total - quotes.len();
    if dropped > 0 {
        debug!(total, dropped, "Dropped malformed quote records");
    }
    quotes
}

/// Parse and validate a raw `warrant_update` payload string.
///
/// The payload must be a JSON object; anything else is a payload error.
/// Individual malformed records inside a well-formed object are dropped
/// silently per `validate_snapshot`.
pub fn parse_payload(payload: &str) -> FeedResult<Snapshot> {
    let value: Value = serde_json::from_str(payload)?;
    let map = value
        .as_object()
        .ok_or_else(|| FeedError::InvalidPayload("expected a JSON object".to_string()))?;
    Ok(Snapshot::new(validate_snapshot(map)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(symbol: &str, percent_change: f64) -> Value {
        json!({
            "symbol": symbol,
            "name": format!("{symbol} Warrant"),
            "date": "2024-05-01",
            "price": 1.25,
            "volume": 10_000,
            "change": 0.05,
            "percent_change": percent_change,
            "VWAP": 1.22,
            "TO": 12_500.0,
        })
    }

    #[test]
    fn test_complete_records_pass() {
        let payload = json!({ "0": record("AAA", 1.0), "1": record("BBB", -2.0) });
        let quotes = validate_snapshot(payload.as_object().unwrap());
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "AAA");
        assert_eq!(quotes[1].symbol, "BBB");
    }

    #[test]
    fn test_missing_field_drops_record() {
        let mut incomplete = record("BAD", 1.0);
        incomplete.as_object_mut().unwrap().remove("change");
        let payload = json!({ "a": record("AAA", 1.0), "b": incomplete });
        let quotes = validate_snapshot(payload.as_object().unwrap());
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "AAA");
    }

    #[test]
    fn test_null_field_drops_record() {
        let mut nulled = record("BAD", 1.0);
        nulled
            .as_object_mut()
            .unwrap()
            .insert("VWAP".to_string(), Value::Null);
        let payload = json!({ "a": nulled });
        assert!(validate_snapshot(payload.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_zero_values_count_as_present() {
        let mut flat = record("FLAT", 0.0);
        {
            let obj = flat.as_object_mut().unwrap();
            obj.insert("change".to_string(), json!(0));
            obj.insert("price".to_string(), json!(0));
            obj.insert("volume".to_string(), json!(0));
        }
        let payload = json!({ "a": flat });
        let quotes = validate_snapshot(payload.as_object().unwrap());
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].volume, 0);
    }

    #[test]
    fn test_negative_price_drops_record() {
        let mut negative = record("NEG", 1.0);
        negative
            .as_object_mut()
            .unwrap()
            .insert("price".to_string(), json!(-1.0));
        let payload = json!({ "a": negative });
        assert!(validate_snapshot(payload.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_malformed_types_drop_record() {
        let mut bad = record("BAD", 1.0);
        bad.as_object_mut()
            .unwrap()
            .insert("volume".to_string(), json!(-5));
        let payload = json!({ "a": bad, "b": "not even an object" });
        assert!(validate_snapshot(payload.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_payload_order_preserved() {
        let payload = r#"{"z": REC_Z, "a": REC_A, "m": REC_M}"#
            .replace("REC_Z", &record("ZZZ", 1.0).to_string())
            .replace("REC_A", &record("AAA", 1.0).to_string())
            .replace("REC_M", &record("MMM", 1.0).to_string());
        let snapshot = parse_payload(&payload).unwrap();
        let symbols: Vec<&str> = snapshot.quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, ["ZZZ", "AAA", "MMM"]);
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(parse_payload("[1, 2, 3]").is_err());
        assert!(parse_payload("not json").is_err());
    }
}
