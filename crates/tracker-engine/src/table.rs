//! The immutable source table.

use polars::prelude::{Column, DataFrame};

use tracker_common::any_to_string;
use tracker_ingest::TableProvider;

use crate::error::{EngineError, Result};
use crate::row_set::RowSet;

/// The loaded source table.
///
/// Built once and only read afterwards; it can be shared between concurrent
/// requests by reference.
#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
    columns: Vec<String>,
}

impl Table {
    pub fn new(frame: DataFrame) -> Self {
        let columns = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        Self { frame, columns }
    }

    pub fn load<P: TableProvider + ?Sized>(provider: &P) -> Result<Self> {
        Ok(Self::new(provider.load()?))
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn require_column(&self, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(EngineError::invalid_column(name))
        }
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.require_column(name)?;
        self.frame
            .column(name)
            .map_err(|_| EngineError::invalid_column(name))
    }

    pub fn all_rows(&self) -> RowSet {
        RowSet::full(self.height())
    }

    /// Text of every cell in one row, in column order.
    pub fn row_text(&self, row: usize) -> Result<Vec<String>> {
        self.frame
            .get_columns()
            .iter()
            .map(|column| cell_text(column, row))
            .collect()
    }
}

/// Text of one cell, as used for facet matching and export.
pub(crate) fn cell_text(column: &Column, row: usize) -> Result<String> {
    Ok(any_to_string(column.get(row)?))
}
