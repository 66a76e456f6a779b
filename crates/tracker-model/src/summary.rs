use serde::{Deserialize, Serialize};

/// Formats `numerator / denominator` as a percentage with two decimals.
///
/// A zero denominator reports `0.00%`.
pub fn format_percent(numerator: usize, denominator: usize) -> String {
    format!("{:.2}%", ratio(numerator, denominator) * 100.0)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Completion counts for one metric column over one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub metric: String,
    /// Rows whose metric value is 1.
    pub complete: usize,
    /// Rows whose metric value is 0.
    pub incomplete: usize,
    /// `complete / (complete + incomplete)` as a two-decimal percentage.
    pub percent: String,
}

impl CompletionSummary {
    pub fn new(metric: impl Into<String>, complete: usize, incomplete: usize) -> Self {
        Self {
            metric: metric.into(),
            complete,
            incomplete,
            percent: format_percent(complete, complete + incomplete),
        }
    }

    /// Rows that carried a 0 or 1 for this metric.
    pub fn counted(&self) -> usize {
        self.complete + self.incomplete
    }

    pub fn ratio(&self) -> f64 {
        ratio(self.complete, self.counted())
    }
}

/// Distinct identifier values present in a view against the full table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub column: String,
    pub in_view: usize,
    pub in_table: usize,
    pub percent: String,
}

impl CoverageSummary {
    pub fn new(column: impl Into<String>, in_view: usize, in_table: usize) -> Self {
        Self {
            column: column.into(),
            in_view,
            in_table,
            percent: format_percent(in_view, in_table),
        }
    }

    pub fn ratio(&self) -> f64 {
        ratio(self.in_view, self.in_table)
    }

    /// Progress-bar caption, e.g. `50.00% (3/6)`.
    pub fn label(&self) -> String {
        format!("{} ({}/{})", self.percent, self.in_view, self.in_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_two_decimals() {
        assert_eq!(format_percent(1, 3), "33.33%");
        assert_eq!(format_percent(2, 3), "66.67%");
        assert_eq!(format_percent(1, 1), "100.00%");
    }

    #[test]
    fn zero_denominator_reports_zero_percent() {
        assert_eq!(format_percent(0, 0), "0.00%");
        let summary = CompletionSummary::new("Sample Shipped", 0, 0);
        assert_eq!(summary.percent, "0.00%");
        assert_eq!(summary.ratio(), 0.0);
    }

    #[test]
    fn completion_counts_only_indicator_rows() {
        let summary = CompletionSummary::new("DRC Received", 3, 1);
        assert_eq!(summary.counted(), 4);
        assert_eq!(summary.percent, "75.00%");
        assert!((summary.ratio() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn coverage_label_matches_progress_caption() {
        let coverage = CoverageSummary::new("case_id", 3, 6);
        assert_eq!(coverage.label(), "50.00% (3/6)");
        assert_eq!(CoverageSummary::new("case_id", 0, 0).label(), "0.00% (0/0)");
    }
}
