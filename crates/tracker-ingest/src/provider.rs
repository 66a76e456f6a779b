//! Table providers.
//!
//! The engine never reads files itself. It asks a [`TableProvider`] for the
//! source table once at startup and treats the result as immutable.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::*;
use tracing::{debug, info};

use tracker_model::TrackerConfig;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Number of rows Polars inspects to infer column types.
const INFER_SCHEMA_ROWS: usize = 100;

/// Supplies the source table.
///
/// Called once per process; a failure aborts startup.
pub trait TableProvider {
    /// Short description used in logs (a path, a preset name, ...).
    fn describe(&self) -> String;

    fn load(&self) -> Result<DataFrame>;
}

/// An in-memory frame is its own provider.
impl TableProvider for DataFrame {
    fn describe(&self) -> String {
        format!("in-memory frame ({} rows)", self.height())
    }

    fn load(&self) -> Result<DataFrame> {
        Ok(self.clone())
    }
}

/// Loads the table from a CSV file with a single header row.
#[derive(Debug, Clone)]
pub struct CsvTableProvider {
    path: PathBuf,
}

impl CsvTableProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Provider for the `source` named by a profile.
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        config
            .source
            .as_ref()
            .map(Self::new)
            .ok_or_else(|| IngestError::MissingSource {
                profile: config.name.clone(),
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableProvider for CsvTableProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<DataFrame> {
        read_csv_frame(&self.path)
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| not_found_or_read(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| not_found_or_read(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file into a Polars DataFrame.
///
/// The first line is the header. Column types are inferred from the first
/// rows, so a `Year` column arrives as integers and 0/1 stage columns as
/// integer indicators.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let start = Instant::now();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    debug!(path = %path.display(), schema = ?df.schema(), "inferred schema");
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(df)
}

fn not_found_or_read(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
