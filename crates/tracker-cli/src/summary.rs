use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tracker_model::{
    CompletionSummary, CoverageSummary, FacetOptions, TrackerConfig, ViewRecords, ViewReport,
    ViewWarning,
};

pub fn print_presets(presets: &[TrackerConfig]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Preset"),
        header_cell("Title"),
        header_cell("Facets"),
        header_cell("Metrics"),
        header_cell("Export"),
    ]);
    apply_table_style(&mut table);
    for preset in presets {
        let facets: Vec<&str> = preset.facets.iter().map(|f| f.column.as_str()).collect();
        table.add_row(vec![
            Cell::new(&preset.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&preset.title),
            Cell::new(facets.join(", ")),
            list_cell(&preset.metrics),
            Cell::new(preset.export_filename()),
        ]);
    }
    println!("{table}");
}

pub fn print_options(options: &[FacetOptions]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Column"),
        header_cell("Values"),
        header_cell("Options"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for option in options {
        let values = if option.values.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(option.values.join(", "))
        };
        table.add_row(vec![
            Cell::new(&option.label).add_attribute(Attribute::Bold),
            dim_cell(&option.column),
            Cell::new(option.values.len()),
            values,
        ]);
    }
    println!("{table}");
}

pub fn print_summary(report: &ViewReport) {
    println!("Dataset: {}", report.dataset);
    println!("Rows: {} of {}", report.view_rows, report.total_rows);
    for facet in report.facets.iter().filter(|f| f.is_active()) {
        let values: Vec<&str> = facet.selected.iter().map(String::as_str).collect();
        println!("  {} in [{}]", facet.column, values.join(", "));
    }

    if !report.completion.is_empty() {
        print_completion_table(&report.completion);
    }
    if !report.coverage.is_empty() {
        print_coverage_table(&report.coverage);
    }
    for warning in &report.warnings {
        match warning {
            ViewWarning::EmptyView => eprintln!("warning: no rows match the selected facets"),
        }
    }
}

fn print_completion_table(summaries: &[CompletionSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Complete"),
        header_cell("Incomplete"),
        header_cell("Percent"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.metric),
            count_cell(summary.complete, Color::Green),
            count_cell(summary.incomplete, Color::Yellow),
            percent_cell(&summary.percent, summary.ratio()),
        ]);
    }
    println!("{table}");
}

fn print_coverage_table(summaries: &[CoverageSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("In view"),
        header_cell("In table"),
        header_cell("Coverage"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.in_view),
            Cell::new(summary.in_table),
            percent_cell(&summary.percent, summary.ratio()),
        ]);
    }
    println!("{table}");
}

pub fn print_records(records: &ViewRecords, limit: Option<usize>) {
    let mut table = Table::new();
    table.set_header(records.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    let shown = limit.unwrap_or(records.len()).min(records.len());
    for row in records.rows.iter().take(shown) {
        table.add_row(row.iter().map(|value| {
            if value.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    println!("{table}");
    if shown < records.len() {
        println!("... {} more rows", records.len() - shown);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn list_cell(values: &[String]) -> Cell {
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join(", "))
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn percent_cell(label: &str, ratio: f64) -> Cell {
    let color = if ratio >= 1.0 {
        Color::Green
    } else if ratio > 0.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
