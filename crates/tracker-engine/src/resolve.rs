//! Facet resolution: one column, one selection, one row set.

use std::collections::BTreeSet;

use tracing::debug;

use tracker_model::Facet;

use crate::error::Result;
use crate::row_set::RowSet;
use crate::table::{Table, cell_text};

/// Rows whose `column` value, as text, is one of `selected`.
///
/// An empty selection places no constraint and returns every row. Matching is
/// exact: no trimming, no case folding. The column is checked even when the
/// selection is empty.
pub fn resolve(table: &Table, column: &str, selected: &BTreeSet<String>) -> Result<RowSet> {
    let series = table.column(column)?;
    if selected.is_empty() {
        return Ok(table.all_rows());
    }

    let mut rows = RowSet::empty();
    for idx in 0..table.height() {
        if selected.contains(&cell_text(series, idx)?) {
            rows.insert(idx);
        }
    }
    debug!(
        column,
        selected = selected.len(),
        matched = rows.len(),
        "facet resolved"
    );
    Ok(rows)
}

pub fn resolve_facet(table: &Table, facet: &Facet) -> Result<RowSet> {
    resolve(table, &facet.column, &facet.selected)
}
