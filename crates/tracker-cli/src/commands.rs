use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use tracker_cli::request::build_request;
use tracker_engine::{EvaluatedView, TrackerContext};
use tracker_ingest::{CsvTableProvider, resolve_tracker_config};
use tracker_model::{PRESET_NAMES, TrackerConfig};

use crate::cli::{ExportArgs, ShowArgs, SourceArgs, SummaryArgs, ViewArgs};
use crate::summary::{print_options, print_presets, print_records, print_summary};

pub fn run_presets() -> Result<()> {
    let presets: Vec<TrackerConfig> = PRESET_NAMES
        .iter()
        .filter_map(|name| TrackerConfig::preset(name))
        .collect();
    print_presets(&presets);
    Ok(())
}

pub fn run_options(args: &SourceArgs) -> Result<()> {
    let context = load_context(args)?;
    let options = context.options().context("collect facet options")?;
    print_options(&options);
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let context = load_context(&args.view.source)?;
    let view = evaluate(&context, &args.view)?;
    let report = view.report().context("summarize view")?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        print_summary(&report);
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let context = load_context(&args.view.source)?;
    let view = evaluate(&context, &args.view)?;
    let records = view.records().context("render view rows")?;
    print_records(&records, args.limit);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let context = load_context(&args.view.source)?;
    let view = evaluate(&context, &args.view)?;
    let Some(output) = &args.output else {
        let payload = view.export().context("encode view")?;
        println!("{payload}");
        return Ok(());
    };

    let path = export_path(output, context.config());
    let csv = view.to_csv().context("serialize view")?;
    std::fs::write(&path, csv).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = view.len(), "view exported");
    println!("Wrote {} rows to {}", view.len(), path.display());
    Ok(())
}

fn load_context(source: &SourceArgs) -> Result<TrackerContext> {
    let config = resolve_tracker_config(
        source.config.as_deref(),
        &source.preset,
        source.data.as_deref(),
    )
    .context("resolve dashboard profile")?;
    let provider = CsvTableProvider::from_config(&config).context("locate source table")?;
    TrackerContext::load(&provider, config)
        .with_context(|| format!("load {}", provider.path().display()))
}

fn evaluate<'a>(context: &'a TrackerContext, args: &ViewArgs) -> Result<EvaluatedView<'a>> {
    let request = build_request(&args.select);
    context.evaluate(&request).context("evaluate selections")
}

/// A directory receives the profile's export filename.
fn export_path(output: &Path, config: &TrackerConfig) -> PathBuf {
    if output.is_dir() {
        output.join(config.export_filename())
    } else {
        output.to_path_buf()
    }
}
