//! Error types for the filter engine.

use thiserror::Error;

use tracker_ingest::IngestError;

/// Errors raised by engine operations.
///
/// An empty view is not an error; see `ViewWarning::EmptyView`.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A facet, metric or coverage column is missing from the table schema.
    #[error("column '{column}' not found in table")]
    InvalidColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    Frame { message: String },

    /// Failed to serialize the view as CSV.
    #[error("CSV export failed: {message}")]
    Csv { message: String },

    /// The table provider failed.
    #[error(transparent)]
    Load(#[from] IngestError),
}

impl EngineError {
    pub(crate) fn invalid_column(column: &str) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
        }
    }
}

impl From<polars::prelude::PolarsError> for EngineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
