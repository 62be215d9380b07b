//! Sort derivation.
//!
//! Sorting is a pure derivation over the current filtered view: clearing the
//! sort reverts to the filtered order, never to a re-fetch of the raw
//! dataset. The sort is stable, so equal keys keep their pre-sort relative
//! order and the three-click cycle is well-defined.

use std::cmp::Ordering;

use warrant_core::{Quote, SortColumn, SortDirection, SortSpec};

/// Advance the sort state for a click on `column`.
///
/// A new column starts ascending; clicking the sorted column flips ascending
/// to descending; a third click clears the sort.
pub fn cycle(current: Option<SortSpec>, column: SortColumn) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Ascending => Some(SortSpec {
                column,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortSpec::ascending(column)),
    }
}

fn compare(column: SortColumn, a: &Quote, b: &Quote) -> Ordering {
    match column {
        SortColumn::Date => a.date.cmp(&b.date),
        SortColumn::Symbol => a.symbol.cmp(&b.symbol),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Price => a.price.cmp(&b.price),
        SortColumn::Volume => a.volume.cmp(&b.volume),
        SortColumn::Change => a.change.cmp(&b.change),
        SortColumn::PercentChange => a.percent_change.cmp(&b.percent_change),
        SortColumn::Vwap => a.vwap.cmp(&b.vwap),
        SortColumn::Turnover => a.turnover.cmp(&b.turnover),
    }
}

/// Derive the ordered view for `spec`. Stable: ties keep input order.
pub fn sort(view: &[Quote], spec: SortSpec) -> Vec<Quote> {
    let mut sorted = view.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(spec.column, a, b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}
