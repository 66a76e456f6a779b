//! Completion and coverage statistics over a view.

use std::collections::BTreeSet;

use polars::prelude::Column;

use tracker_common::any_to_indicator;
use tracker_model::{CompletionSummary, CoverageSummary};

use crate::error::Result;
use crate::row_set::RowSet;
use crate::table::{Table, cell_text};

/// Completion counts for one metric column.
///
/// Rows holding 1 are complete, rows holding 0 are incomplete, and every
/// other value (null, text, 2, ...) is left out of both counts. An empty view
/// reports `0.00%`.
pub fn aggregate(table: &Table, view: &RowSet, metric: &str) -> Result<CompletionSummary> {
    let series = table.column(metric)?;
    let mut complete = 0usize;
    let mut incomplete = 0usize;
    for row in view.iter() {
        match any_to_indicator(series.get(row)?) {
            Some(true) => complete += 1,
            Some(false) => incomplete += 1,
            None => {}
        }
    }
    Ok(CompletionSummary::new(metric, complete, incomplete))
}

/// Completion counts for several metrics, in the order given.
pub fn aggregate_all<S: AsRef<str>>(
    table: &Table,
    view: &RowSet,
    metrics: &[S],
) -> Result<Vec<CompletionSummary>> {
    metrics
        .iter()
        .map(|metric| aggregate(table, view, metric.as_ref()))
        .collect()
}

/// Distinct values of `column` in the view against the whole table.
///
/// Empty cells are not counted as a value.
pub fn coverage(table: &Table, view: &RowSet, column: &str) -> Result<CoverageSummary> {
    let series = table.column(column)?;
    let in_table = distinct_values(series, 0..table.height())?;
    let in_view = distinct_values(series, view.iter())?;
    Ok(CoverageSummary::new(column, in_view, in_table))
}

fn distinct_values(series: &Column, rows: impl Iterator<Item = usize>) -> Result<usize> {
    let mut seen = BTreeSet::new();
    for row in rows {
        let text = cell_text(series, row)?;
        if !text.trim().is_empty() {
            seen.insert(text);
        }
    }
    Ok(seen.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

    fn table() -> Table {
        let frame = DataFrame::new(vec![
            Series::new("case_id".into(), &["C1", "C1", "C2", "C3", ""]).into_column(),
            Series::new("Shipped".into(), &[Some(1i64), Some(0), Some(1), None, Some(2)])
                .into_column(),
            Series::new("Harmonized".into(), &[true, false, false, false, true]).into_column(),
        ])
        .unwrap();
        Table::new(frame)
    }

    #[test]
    fn counts_only_zero_and_one() {
        let table = table();
        let summary = aggregate(&table, &table.all_rows(), "Shipped").unwrap();
        assert_eq!(summary.complete, 2);
        assert_eq!(summary.incomplete, 1);
        assert_eq!(summary.percent, "66.67%");
        assert!(summary.counted() <= table.height());
    }

    #[test]
    fn booleans_count_as_indicators() {
        let table = table();
        let summary = aggregate(&table, &table.all_rows(), "Harmonized").unwrap();
        assert_eq!((summary.complete, summary.incomplete), (2, 3));
    }

    #[test]
    fn empty_view_is_zero_percent() {
        let summary = aggregate(&table(), &RowSet::empty(), "Shipped").unwrap();
        assert_eq!((summary.complete, summary.incomplete), (0, 0));
        assert_eq!(summary.percent, "0.00%");
    }

    #[test]
    fn view_without_indicators_is_zero_percent() {
        let view: RowSet = [3, 4].into_iter().collect();
        let summary = aggregate(&table(), &view, "Shipped").unwrap();
        assert_eq!(summary.counted(), 0);
        assert_eq!(summary.percent, "0.00%");
    }

    #[test]
    fn aggregate_all_keeps_metric_order() {
        let table = table();
        let summaries =
            aggregate_all(&table, &table.all_rows(), &["Harmonized", "Shipped"]).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.metric.as_str()).collect();
        assert_eq!(names, vec!["Harmonized", "Shipped"]);
    }

    #[test]
    fn unknown_metric_is_invalid() {
        let table = table();
        let err = aggregate(&table, &table.all_rows(), "Sequenced").unwrap_err();
        assert!(matches!(err, EngineError::InvalidColumn { .. }));
    }

    #[test]
    fn coverage_counts_distinct_non_empty_values() {
        let table = table();
        let view: RowSet = [0, 1, 4].into_iter().collect();
        let summary = coverage(&table, &view, "case_id").unwrap();
        assert_eq!((summary.in_view, summary.in_table), (1, 3));
        assert_eq!(summary.label(), "33.33% (1/3)");
    }
}
