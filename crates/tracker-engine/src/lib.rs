//! Faceted filter engine for sample tracking tables.
//!
//! Given an immutable table and a list of facets (a column plus the values
//! selected on it), the engine computes the rows that pass every facet,
//! summarizes 0/1 completion columns over those rows and serializes them as
//! CSV for download.
//!
//! # Example
//!
//! ```ignore
//! use tracker_engine::TrackerContext;
//! use tracker_ingest::CsvTableProvider;
//! use tracker_model::{Facet, FilterRequest, TrackerConfig};
//!
//! let config = TrackerConfig::kids_first().with_source("data/sample.csv");
//! let provider = CsvTableProvider::from_config(&config)?;
//! let context = TrackerContext::load(&provider, config)?;
//!
//! let request = FilterRequest::default().with_facet(Facet::new("Year", ["2017"]));
//! let view = context.evaluate(&request)?;
//! for summary in view.completion()? {
//!     println!("{}: {}", summary.metric, summary.percent);
//! }
//! let link = view.export()?;
//! ```

pub mod aggregate;
pub mod combine;
pub mod context;
pub mod error;
pub mod export;
pub mod options;
pub mod resolve;
pub mod row_set;
pub mod table;

pub use aggregate::{aggregate, aggregate_all, coverage};
pub use combine::combine;
pub use context::{EvaluatedView, TrackerContext};
pub use error::{EngineError, Result};
pub use export::{DATA_URI_PREFIX, EncodedPayload, export, materialize, records, to_csv};
pub use options::facet_options;
pub use resolve::{resolve, resolve_facet};
pub use row_set::RowSet;
pub use table::Table;
