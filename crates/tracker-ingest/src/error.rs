//! Error types for table and profile loading.
//!
//! Every variant is fatal to startup: the tracker cannot serve a request
//! without its table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table or a profile.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the in-memory size limit.
    #[error("file {path} is {size} bytes, above the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File is not UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Header row contains a blank column name.
    #[error("empty column name in {path}")]
    EmptyColumnName { path: PathBuf },

    // === Profile Errors ===
    /// Failed to read the profile file.
    #[error("failed to read profile {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile is not valid TOML for a tracker profile.
    #[error("failed to parse profile {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No built-in profile with this name.
    #[error("unknown preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },

    /// Neither the profile nor the caller named a data file.
    #[error("profile '{profile}' has no source table")]
    MissingSource { profile: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/sample.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/sample.csv");
    }

    #[test]
    fn test_unknown_preset_lists_choices() {
        let err = IngestError::UnknownPreset {
            name: "gmkf".to_string(),
            available: "kids-first, cbttc-ngs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown preset 'gmkf' (available: kids-first, cbttc-ngs)"
        );
    }
}
