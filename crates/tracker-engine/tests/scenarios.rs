//! End-to-end filter scenarios over a small sample table.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use tracker_engine::{
    EngineError, RowSet, Table, TrackerContext, aggregate, combine, export, resolve, to_csv,
};
use tracker_model::{Facet, FilterRequest, TrackerConfig, ViewWarning};

fn sample_frame() -> DataFrame {
    let cols: Vec<Column> = vec![
        Series::new("Year".into(), &[2017i64, 2018, 2017]).into_column(),
        Series::new("PI".into(), &["A", "B", "B"]).into_column(),
        Series::new("Shipped".into(), &[1i64, 0, 1]).into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

fn sample_config() -> TrackerConfig {
    TrackerConfig::new("sample")
        .with_facet("Year")
        .with_facet("PI")
        .with_metric("Shipped")
}

fn context() -> TrackerContext {
    TrackerContext::new(Table::new(sample_frame()), sample_config()).unwrap()
}

#[test]
fn narrowing_by_year_then_pi() {
    let context = context();

    let by_year = FilterRequest::default().with_facet(Facet::new("Year", ["2017"]));
    let view = context.evaluate(&by_year).unwrap();
    assert_eq!(view.len(), 2);

    let by_year_and_pi = by_year.with_facet(Facet::new("PI", ["B"]));
    let view = context.evaluate(&by_year_and_pi).unwrap();
    assert_eq!(view.rows().to_vec(), vec![2]);
    let records = view.records().unwrap();
    assert_eq!(records.rows, vec![vec!["2017", "B", "1"]]);

    let completion = view.completion().unwrap();
    assert_eq!(completion.len(), 1);
    assert_eq!(completion[0].complete, 1);
    assert_eq!(completion[0].incomplete, 0);
    assert_eq!(completion[0].percent, "100.00%");
    assert!(view.warnings().is_empty());
}

#[test]
fn unmatched_year_gives_empty_view_without_error() {
    let context = context();
    let request = FilterRequest::default().with_facet(Facet::new("Year", ["1999"]));
    let view = context.evaluate(&request).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.warnings(), [ViewWarning::EmptyView]);
    assert_eq!(view.completion().unwrap()[0].percent, "0.00%");
    assert_eq!(view.to_csv().unwrap(), "Year,PI,Shipped\n");
    assert_eq!(
        view.export().unwrap().as_str(),
        "data:text/csv;charset=utf-8,Year%2CPI%2CShipped%0A"
    );
}

#[test]
fn same_column_facets_are_anded_not_merged() {
    let table = Table::new(sample_frame());

    // Two separate constraints on Year with disjoint values: nothing passes.
    let separate = combine(
        &table,
        &[Facet::new("Year", ["2017"]), Facet::new("Year", ["2018"])],
    )
    .unwrap();
    assert!(separate.is_empty());

    // The same values inside one facet are ORed.
    let merged = combine(&table, &[Facet::new("Year", ["2017", "2018"])]).unwrap();
    assert_eq!(merged, table.all_rows());
}

#[test]
fn overlapping_same_column_facets_keep_the_overlap() {
    let table = Table::new(sample_frame());
    let view = combine(
        &table,
        &[
            Facet::new("PI", ["A", "B"]),
            Facet::new("PI", ["B"]),
        ],
    )
    .unwrap();
    assert_eq!(view.to_vec(), vec![1, 2]);
}

#[test]
fn free_functions_match_context_results() {
    let table = Table::new(sample_frame());
    let selected = ["2017".to_string()].into_iter().collect();
    let year = resolve(&table, "Year", &selected).unwrap();
    let summary = aggregate(&table, &year, "Shipped").unwrap();
    assert_eq!((summary.complete, summary.incomplete), (2, 0));

    let payload = export(&table, &year).unwrap();
    assert_eq!(
        payload.decode_csv().unwrap(),
        to_csv(&table, &year).unwrap()
    );
}

#[test]
fn export_snapshot() {
    let table = Table::new(sample_frame());
    let csv = to_csv(&table, &table.all_rows()).unwrap();
    insta::assert_snapshot!(csv, @r"
    Year,PI,Shipped
    2017,A,1
    2018,B,0
    2017,B,1
    ");
}

#[test]
fn profile_with_unknown_metric_fails_at_construction() {
    let config = sample_config().with_metric("Sequenced");
    let err = TrackerContext::new(Table::new(sample_frame()), config).unwrap_err();
    assert!(matches!(err, EngineError::InvalidColumn { column } if column == "Sequenced"));
}

#[test]
fn request_on_unknown_column_is_surfaced() {
    let context = context();
    let request = FilterRequest::default().with_facet(Facet::unconstrained("Title"));
    let err = context.evaluate(&request).unwrap_err();
    assert!(matches!(err, EngineError::InvalidColumn { .. }));
}

#[test]
fn report_collects_dashboard_outputs() {
    let context = context();
    let request = FilterRequest::default().with_facet(Facet::new("PI", ["B"]));
    let report = context.evaluate(&request).unwrap().report().unwrap();
    assert_eq!(report.dataset, "sample");
    assert_eq!(report.total_rows, 3);
    assert_eq!(report.view_rows, 2);
    assert_eq!(report.completion[0].percent, "50.00%");
    assert!(report.coverage.is_empty());
}

#[test]
fn options_follow_profile_order() {
    let options = context().options().unwrap();
    let columns: Vec<&str> = options.iter().map(|o| o.column.as_str()).collect();
    assert_eq!(columns, vec!["Year", "PI"]);
    assert_eq!(options[0].values, vec!["2017", "2018"]);
    assert_eq!(options[1].values, vec!["A", "B"]);
}

#[test]
fn materialized_view_keeps_column_types() {
    let context = context();
    let request = FilterRequest::default().with_facet(Facet::new("Year", ["2017"]));
    let frame = context.evaluate(&request).unwrap().materialize().unwrap();
    assert_eq!(frame.height(), 2);
    assert_eq!(
        frame.column("Year").unwrap().dtype(),
        sample_frame().column("Year").unwrap().dtype()
    );
}

#[test]
fn context_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TrackerContext>();
    assert_send_sync::<RowSet>();
}
