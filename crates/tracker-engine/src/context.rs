//! The tracker context: one table, one profile, many requests.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use tracker_ingest::TableProvider;
use tracker_model::{
    CompletionSummary, CoverageSummary, Facet, FacetOptions, FilterRequest, TrackerConfig,
    ViewRecords, ViewReport, ViewWarning,
};

use crate::aggregate::{aggregate_all, coverage};
use crate::combine::combine;
use crate::error::Result;
use crate::export::{EncodedPayload, export, materialize, records, to_csv};
use crate::options::facet_options;
use crate::row_set::RowSet;
use crate::table::Table;

/// The loaded table together with the profile that describes it.
///
/// Built once at startup and read-only afterwards. Every request carries its
/// own facets, so one context can serve concurrent callers through `&self`.
#[derive(Debug, Clone)]
pub struct TrackerContext {
    table: Table,
    config: TrackerConfig,
}

impl TrackerContext {
    /// Checks that every column the profile names exists in the table.
    pub fn new(table: Table, config: TrackerConfig) -> Result<Self> {
        for column in config.referenced_columns() {
            table.require_column(column)?;
        }
        info!(
            dataset = %config.name,
            rows = table.height(),
            columns = table.columns().len(),
            facets = config.facets.len(),
            metrics = config.metrics.len(),
            "tracker context ready"
        );
        Ok(Self { table, config })
    }

    /// Loads the table through `provider`, then validates it against `config`.
    pub fn load<P: TableProvider + ?Sized>(provider: &P, config: TrackerConfig) -> Result<Self> {
        let span = info_span!("load", dataset = %config.name, source = %provider.describe());
        let _guard = span.enter();
        let table = Table::load(provider)?;
        Self::new(table, config)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Options for each configured facet, in profile order.
    pub fn options(&self) -> Result<Vec<FacetOptions>> {
        self.config
            .facets
            .iter()
            .map(|facet| {
                Ok(FacetOptions {
                    column: facet.column.clone(),
                    label: facet.display_label().to_string(),
                    values: facet_options(&self.table, &facet.column)?,
                })
            })
            .collect()
    }

    /// Resolves a filter request into the current view.
    pub fn evaluate(&self, request: &FilterRequest) -> Result<EvaluatedView<'_>> {
        let span = info_span!(
            "evaluate",
            dataset = %self.config.name,
            facets = request.facets.len(),
            active = request.active_facets().count()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let rows = combine(&self.table, &request.facets)?;
        let mut warnings = Vec::new();
        if rows.is_empty() {
            warn!(
                dataset = %self.config.name,
                total_rows = self.table.height(),
                "no rows match the selected facets"
            );
            warnings.push(ViewWarning::EmptyView);
        }
        debug!(
            rows = rows.len(),
            total_rows = self.table.height(),
            duration_ms = start.elapsed().as_millis(),
            "view evaluated"
        );
        Ok(EvaluatedView {
            context: self,
            facets: request.facets.clone(),
            rows,
            warnings,
        })
    }
}

/// A current view plus on-demand access to everything derived from it.
#[derive(Debug, Clone)]
pub struct EvaluatedView<'a> {
    context: &'a TrackerContext,
    facets: Vec<Facet>,
    rows: RowSet,
    warnings: Vec<ViewWarning>,
}

impl EvaluatedView<'_> {
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn warnings(&self) -> &[ViewWarning] {
        &self.warnings
    }

    /// One summary per configured metric.
    pub fn completion(&self) -> Result<Vec<CompletionSummary>> {
        aggregate_all(&self.context.table, &self.rows, &self.context.config.metrics)
    }

    /// One summary per configured coverage column.
    pub fn coverage(&self) -> Result<Vec<CoverageSummary>> {
        self.context
            .config
            .coverage
            .iter()
            .map(|column| coverage(&self.context.table, &self.rows, column))
            .collect()
    }

    pub fn export(&self) -> Result<EncodedPayload> {
        export(&self.context.table, &self.rows)
    }

    pub fn to_csv(&self) -> Result<String> {
        to_csv(&self.context.table, &self.rows)
    }

    pub fn records(&self) -> Result<ViewRecords> {
        records(&self.context.table, &self.rows)
    }

    pub fn materialize(&self) -> Result<DataFrame> {
        materialize(&self.context.table, &self.rows)
    }

    pub fn report(&self) -> Result<ViewReport> {
        Ok(ViewReport {
            dataset: self.context.config.name.clone(),
            total_rows: self.context.table.height(),
            view_rows: self.rows.len(),
            facets: self.facets.clone(),
            completion: self.completion()?,
            coverage: self.coverage()?,
            warnings: self.warnings.clone(),
        })
    }
}
