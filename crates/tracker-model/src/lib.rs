pub mod config;
pub mod facet;
pub mod summary;
pub mod view;

pub use config::{FacetConfig, PRESET_NAMES, TrackerConfig};
pub use facet::{Facet, FacetOptions, FilterRequest};
pub use summary::{CompletionSummary, CoverageSummary, format_percent};
pub use view::{ViewRecords, ViewReport, ViewWarning};
