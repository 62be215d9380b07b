//! Canonical quote dataset.

use tracing::debug;

use warrant_core::Quote;

/// The full, unfiltered, unsorted quote collection for a view.
///
/// Replaced wholesale on each ingestion, never merged field-by-field with a
/// previous snapshot. Symbols are unique: if one snapshot carries the same
/// symbol twice, the first occurrence wins.
#[derive(Debug, Default)]
pub struct Dataset {
    quotes: Vec<Quote>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents with a new snapshot.
    pub fn replace(&mut self, quotes: Vec<Quote>) {
        let mut seen = std::collections::HashSet::with_capacity(quotes.len());
        let mut unique = Vec::with_capacity(quotes.len());
        for quote in quotes {
            if seen.insert(quote.symbol.clone()) {
                unique.push(quote);
            } else {
                debug!(symbol = %quote.symbol, "Duplicate symbol in snapshot dropped");
            }
        }
        self.quotes = unique;
    }

    /// Look up a quote by symbol.
    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.symbol == symbol)
    }

    /// Quotes in snapshot order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str, price: rust_decimal::Decimal) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{symbol} Warrant"),
            date: "2024-05-01".to_string(),
            price,
            volume: 1_000,
            change: dec!(0),
            percent_change: dec!(0),
            vwap: price,
            turnover: dec!(100),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut dataset = Dataset::new();
        dataset.replace(vec![quote("AAA", dec!(1)), quote("BBB", dec!(2))]);
        dataset.replace(vec![quote("CCC", dec!(3))]);

        assert_eq!(dataset.len(), 1);
        assert!(dataset.get("AAA").is_none());
        assert_eq!(dataset.get("CCC").unwrap().price, dec!(3));
    }

    #[test]
    fn test_duplicate_symbol_first_wins() {
        let mut dataset = Dataset::new();
        dataset.replace(vec![quote("AAA", dec!(1)), quote("AAA", dec!(9))]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get("AAA").unwrap().price, dec!(1));
    }
}
