//! View and sort state types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which dataset currently backs filtering, sorting, and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Live main dataset fed by stream snapshots.
    #[default]
    Main,
    /// User-curated persisted watchlist.
    Watchlist,
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Watchlist => write!(f, "watchlist"),
        }
    }
}

impl FromStr for ViewState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "watchlist" => Ok(Self::Watchlist),
            other => Err(CoreError::UnknownView(other.to_string())),
        }
    }
}

/// Sortable table column.
///
/// The string keys match the wire field names of `Quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Date,
    Symbol,
    Name,
    Price,
    Volume,
    Change,
    PercentChange,
    Vwap,
    Turnover,
}

impl SortColumn {
    /// Wire key for this column.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Symbol => "symbol",
            Self::Name => "name",
            Self::Price => "price",
            Self::Volume => "volume",
            Self::Change => "change",
            Self::PercentChange => "percent_change",
            Self::Vwap => "VWAP",
            Self::Turnover => "TO",
        }
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SortColumn {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "symbol" => Ok(Self::Symbol),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "volume" => Ok(Self::Volume),
            "change" => Ok(Self::Change),
            "percent_change" => Ok(Self::PercentChange),
            "VWAP" => Ok(Self::Vwap),
            "TO" => Ok(Self::Turnover),
            other => Err(CoreError::UnknownColumn(other.to_string())),
        }
    }
}

/// Sort direction for an active column sort.
///
/// The cleared ("none") state of the click cycle is modeled as the absence
/// of a `SortSpec`, not as a third variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

/// An active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on a column (the state every new column starts in).
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_key_roundtrip() {
        let columns = [
            SortColumn::Date,
            SortColumn::Symbol,
            SortColumn::Name,
            SortColumn::Price,
            SortColumn::Volume,
            SortColumn::Change,
            SortColumn::PercentChange,
            SortColumn::Vwap,
            SortColumn::Turnover,
        ];
        for column in columns {
            assert_eq!(column.key().parse::<SortColumn>().unwrap(), column);
        }
    }

    #[test]
    fn test_unknown_column_rejected() {
        assert!("vwap".parse::<SortColumn>().is_err());
        assert!("".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_view_state_parse() {
        assert_eq!("main".parse::<ViewState>().unwrap(), ViewState::Main);
        assert_eq!(
            "watchlist".parse::<ViewState>().unwrap(),
            ViewState::Watchlist
        );
        assert!("Main".parse::<ViewState>().is_err());
    }
}
