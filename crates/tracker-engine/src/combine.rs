//! Intersection of facet row sets into the current view.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;

use tracing::debug;

use tracker_model::Facet;

use crate::error::Result;
use crate::resolve::resolve;
use crate::row_set::RowSet;
use crate::table::Table;

/// The current view: rows satisfying every facet.
///
/// Facets are ANDed; inside a facet the selected values are ORed. With no
/// active facet the view is the whole table. Two facets on the same column
/// are separate constraints. Every facet column is validated before any row
/// is examined, so a bad column fails the call even when an earlier facet
/// already emptied the view.
pub fn combine(table: &Table, facets: &[Facet]) -> Result<RowSet> {
    for facet in facets {
        table.require_column(&facet.column)?;
    }

    let mut resolved: BTreeMap<(&str, &BTreeSet<String>), RowSet> = BTreeMap::new();
    let mut view = table.all_rows();
    for facet in facets.iter().filter(|facet| facet.is_active()) {
        if view.is_empty() {
            break;
        }
        let rows = match resolved.entry((facet.column.as_str(), &facet.selected)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(resolve(table, &facet.column, &facet.selected)?),
        };
        view = view.intersect(rows);
    }

    debug!(
        facets = facets.len(),
        resolved = resolved.len(),
        rows = view.len(),
        "view combined"
    );
    Ok(view)
}
