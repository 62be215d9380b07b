//! Filter derivation.
//!
//! Criteria arrive as free-form strings from the presentation layer. A bound
//! that is empty or fails to parse as a number is unconstrained; it never
//! excludes every row. Configured predicates combine with AND semantics.

use rust_decimal::Decimal;

use warrant_core::Quote;

/// Raw filter inputs as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    pub symbol: String,
    pub price_min: String,
    pub price_max: String,
    pub volume_min: String,
    pub volume_max: String,
}

/// Parsed filter criteria. `None` per bound means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on symbol, stored lowercased.
    symbol: Option<String>,
    price_min: Option<Decimal>,
    price_max: Option<Decimal>,
    volume_min: Option<Decimal>,
    volume_max: Option<Decimal>,
}

fn bound(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

impl FilterCriteria {
    /// Parse raw inputs into criteria.
    pub fn parse(input: &FilterInput) -> Self {
        let symbol = {
            let trimmed = input.symbol.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
        };
        Self {
            symbol,
            price_min: bound(&input.price_min),
            price_max: bound(&input.price_max),
            volume_min: bound(&input.volume_min),
            volume_max: bound(&input.volume_max),
        }
    }

    /// Whether no predicate is configured.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a quote satisfies every configured predicate.
    pub fn matches(&self, quote: &Quote) -> bool {
        if let Some(needle) = &self.symbol {
            if !quote.symbol.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if quote.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if quote.price > max {
                return false;
            }
        }
        let volume = Decimal::from(quote.volume);
        if let Some(min) = self.volume_min {
            if volume < min {
                return false;
            }
        }
        if let Some(max) = self.volume_max {
            if volume > max {
                return false;
            }
        }
        true
    }
}

/// Derive the filtered subset of `quotes`, preserving order.
pub fn apply(quotes: &[Quote], criteria: &FilterCriteria) -> Vec<Quote> {
    quotes
        .iter()
        .filter(|q| criteria.matches(q))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(symbol: &str, price: Decimal, volume: u64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            name: format!("{symbol} Warrant"),
            date: "2024-05-01".to_string(),
            price,
            volume,
            change: dec!(0),
            percent_change: dec!(0),
            vwap: price,
            turnover: dec!(100),
        }
    }

    fn quotes() -> Vec<Quote> {
        vec![
            quote("ABC-W1", dec!(5), 100),
            quote("xyz-w2", dec!(10), 2_000),
            quote("ABX-W3", dec!(20), 30_000),
        ]
    }

    #[test]
    fn test_symbol_substring_case_insensitive() {
        let criteria = FilterCriteria::parse(&FilterInput {
            symbol: "XYZ".to_string(),
            ..Default::default()
        });
        let result = apply(&quotes(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "xyz-w2");
    }

    #[test]
    fn test_unparseable_bound_is_unconstrained() {
        // priceMin "10", priceMax "abc" over prices [5, 10, 20] keeps [10, 20]
        let criteria = FilterCriteria::parse(&FilterInput {
            price_min: "10".to_string(),
            price_max: "abc".to_string(),
            ..Default::default()
        });
        let result = apply(&quotes(), &criteria);
        let prices: Vec<Decimal> = result.iter().map(|q| q.price).collect();
        assert_eq!(prices, [dec!(10), dec!(20)]);
    }

    #[test]
    fn test_predicates_conjoin() {
        let criteria = FilterCriteria::parse(&FilterInput {
            symbol: "ab".to_string(),
            price_min: "6".to_string(),
            ..Default::default()
        });
        let result = apply(&quotes(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "ABX-W3");
    }

    #[test]
    fn test_volume_range() {
        let criteria = FilterCriteria::parse(&FilterInput {
            volume_min: "500".to_string(),
            volume_max: "10000".to_string(),
            ..Default::default()
        });
        let result = apply(&quotes(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].symbol, "xyz-w2");
    }

    #[test]
    fn test_empty_input_matches_everything() {
        let criteria = FilterCriteria::parse(&FilterInput::default());
        assert!(criteria.is_unconstrained());
        assert_eq!(apply(&quotes(), &criteria).len(), 3);
    }

    #[test]
    fn test_whitespace_only_bound_is_unconstrained() {
        let criteria = FilterCriteria::parse(&FilterInput {
            price_min: "   ".to_string(),
            symbol: "  ".to_string(),
            ..Default::default()
        });
        assert!(criteria.is_unconstrained());
    }
}
