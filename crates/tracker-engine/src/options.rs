use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracker_common::parse_f64;

use crate::error::Result;
use crate::table::{Table, cell_text};

/// Distinct values of a facet column, as offered in its multi-select.
///
/// Empty cells are skipped. Values sort numerically when all of them are
/// numbers (so `9` comes before `10`), otherwise lexicographically.
pub fn facet_options(table: &Table, column: &str) -> Result<Vec<String>> {
    let series = table.column(column)?;
    let mut distinct = BTreeSet::new();
    for idx in 0..table.height() {
        let text = cell_text(series, idx)?;
        if !text.trim().is_empty() {
            distinct.insert(text);
        }
    }

    let mut values: Vec<String> = distinct.into_iter().collect();
    let numeric: Option<Vec<f64>> = values.iter().map(|value| parse_f64(value)).collect();
    if numeric.is_some() {
        values.sort_by(|left, right| compare_numeric(left, right));
    }
    Ok(values)
}

fn compare_numeric(left: &str, right: &str) -> Ordering {
    match (parse_f64(left), parse_f64(right)) {
        (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
        _ => left.cmp(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

    fn table() -> Table {
        let frame = DataFrame::new(vec![
            Series::new("Year".into(), &[2018i64, 2017, 2018, 9]).into_column(),
            Series::new("PI".into(), &[Some("b"), Some("A"), None, Some("B")]).into_column(),
        ])
        .unwrap();
        Table::new(frame)
    }

    #[test]
    fn numeric_values_sort_numerically() {
        assert_eq!(facet_options(&table(), "Year").unwrap(), vec!["9", "2017", "2018"]);
    }

    #[test]
    fn text_values_sort_lexicographically_without_blanks() {
        assert_eq!(facet_options(&table(), "PI").unwrap(), vec!["A", "B", "b"]);
    }
}
