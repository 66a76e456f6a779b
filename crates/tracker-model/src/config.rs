//! Dashboard profiles.
//!
//! A profile names the columns a dataset variant filters on, the completion
//! metrics it charts and the identifier columns it reports coverage for. The
//! engine is the same for every profile.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A facet column shown as a multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    pub column: String,
    /// Placeholder text; falls back to the column name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FacetConfig {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: None,
        }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.column)
    }
}

/// One dataset variant of the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub name: String,
    #[serde(default)]
    pub title: String,
    /// CSV source; relative paths are resolved against the profile file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Completion metric columns (0/1 indicators), in display order.
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Identifier columns reported as distinct-value coverage.
    #[serde(default)]
    pub coverage: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_filename: Option<String>,
    #[serde(default)]
    pub facets: Vec<FacetConfig>,
}

/// Names accepted by [`TrackerConfig::preset`].
pub const PRESET_NAMES: &[&str] = &["kids-first", "cbttc-ngs"];

impl TrackerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            source: None,
            metrics: Vec::new(),
            coverage: Vec::new(),
            export_filename: None,
            facets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_facet(mut self, column: impl Into<String>) -> Self {
        self.facets.push(FacetConfig::new(column));
        self
    }

    #[must_use]
    pub fn with_metric(mut self, column: impl Into<String>) -> Self {
        self.metrics.push(column.into());
        self
    }

    #[must_use]
    pub fn with_coverage(mut self, column: impl Into<String>) -> Self {
        self.coverage.push(column.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// File name offered for the CSV download.
    pub fn export_filename(&self) -> String {
        self.export_filename
            .clone()
            .unwrap_or_else(|| format!("{}.csv", self.name))
    }

    /// Every column the profile expects the table to have.
    pub fn referenced_columns(&self) -> impl Iterator<Item = &str> {
        self.facets
            .iter()
            .map(|facet| facet.column.as_str())
            .chain(self.metrics.iter().map(String::as_str))
            .chain(self.coverage.iter().map(String::as_str))
    }

    /// Built-in profile by name, see [`PRESET_NAMES`].
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "kids-first" => Some(Self::kids_first()),
            "cbttc-ngs" => Some(Self::cbttc_ngs()),
            _ => None,
        }
    }

    /// Sample progress tracker: project facets and six pipeline stages.
    pub fn kids_first() -> Self {
        let mut config = Self::new("kids-first")
            .with_facet("Year")
            .with_facet("Contact PI")
            .with_facet("Institution Name")
            .with_facet("Title")
            .with_metric("Sample Shipped")
            .with_metric("Sample Sequenced")
            .with_metric("DRC Received")
            .with_metric("Available on Cavatica")
            .with_metric("Genomics Data Harmonized")
            .with_metric("Phenotype Data Harmonized");
        config.title = "Gabriella Miller Kids First Data Tracker".to_string();
        config.export_filename = Some("kf-sample-stats.csv".to_string());
        config
    }

    /// Genomic manifest browser: demographic facets and case/sample coverage.
    pub fn cbttc_ngs() -> Self {
        let mut config = Self::new("cbttc-ngs")
            .with_facet("experimental_strategy")
            .with_facet("disease_type")
            .with_facet("sample_type")
            .with_facet("gender")
            .with_facet("ethnicity")
            .with_facet("race")
            .with_coverage("case_id")
            .with_coverage("sample_id");
        config.title = "CBTTC Available Genomic Data".to_string();
        config.export_filename = Some("cbttc-ngs-data.csv".to_string());
        config
    }
}
