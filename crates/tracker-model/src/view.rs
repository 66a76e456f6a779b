use serde::{Deserialize, Serialize};

use crate::facet::Facet;
use crate::summary::{CompletionSummary, CoverageSummary};

/// Non-fatal conditions attached to an evaluated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewWarning {
    /// No row satisfies every active facet.
    EmptyView,
}

/// A view rendered as text, ready for a table widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecords {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ViewRecords {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text by column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|header| header == column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Everything a dashboard shows for one filter request, minus the rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewReport {
    pub dataset: String,
    pub total_rows: usize,
    pub view_rows: usize,
    pub facets: Vec<Facet>,
    pub completion: Vec<CompletionSummary>,
    pub coverage: Vec<CoverageSummary>,
    pub warnings: Vec<ViewWarning>,
}
