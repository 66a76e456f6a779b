//! Sample tracker ingestion.
//!
//! This crate owns everything that touches the filesystem before the engine
//! runs: reading the source table into a Polars `DataFrame` and reading the
//! dashboard profile that describes it.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tracker_ingest::{CsvTableProvider, TableProvider, load_tracker_config};
//!
//! let config = load_tracker_config(Path::new("profiles/kids-first.toml"))?;
//! let provider = CsvTableProvider::from_config(&config)?;
//! let frame = provider.load()?;
//! ```

mod config;
mod error;
mod provider;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Providers ===
pub use provider::{
    CsvTableProvider, MAX_CSV_FILE_SIZE, TableProvider, check_file_size, read_csv_frame,
    validate_encoding,
};

// === Profiles ===
pub use config::{load_tracker_config, resolve_tracker_config};
