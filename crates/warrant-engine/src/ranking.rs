//! Top-N ranking by percent change.
//!
//! Ranking operates on the raw active dataset, bypassing any configured
//! filter or sort. Ties keep snapshot order (stable sort).

use warrant_core::Quote;

/// Number of quotes in a ranked view.
pub const TOP_N: usize = 10;

/// Ranking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKind {
    /// Top gainers by percent change.
    Winners,
    /// Top decliners by percent change.
    Losers,
}

impl std::fmt::Display for RankKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winners => write!(f, "winners"),
            Self::Losers => write!(f, "losers"),
        }
    }
}

/// Derive the top-N ranked view of `quotes`.
pub fn rank(quotes: &[Quote], kind: RankKind) -> Vec<Quote> {
    let mut ranked = quotes.to_vec();
    ranked.sort_by(|a, b| match kind {
        RankKind::Winners => b.percent_change.cmp(&a.percent_change),
        RankKind::Losers => a.percent_change.cmp(&b.percent_change),
    });
    ranked.truncate(TOP_N);
    ranked
}

/// Top 10 by percent change descending.
pub fn winners(quotes: &[Quote]) -> Vec<Quote> {
    rank(quotes, RankKind::Winners)
}

/// Top 10 by percent change ascending.
pub fn losers(quotes: &[Quote]) -> Vec<Quote> {
    rank(quotes, RankKind::Losers)
}
