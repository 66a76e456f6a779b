//! View serialization: CSV text, data URIs, display records and frames.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use tracker_model::ViewRecords;

use crate::error::{EngineError, Result};
use crate::row_set::RowSet;
use crate::table::Table;

/// Prefix of every exported payload.
pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// Characters left as-is in the URI body; everything else is escaped.
const CSV_URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// CSV text embedded in a `data:` URI, ready for a download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    uri: String,
}

impl EncodedPayload {
    pub fn from_csv(csv: &str) -> Self {
        let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + csv.len());
        uri.push_str(DATA_URI_PREFIX);
        uri.extend(utf8_percent_encode(csv, CSV_URI_SET));
        Self { uri }
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn into_string(self) -> String {
        self.uri
    }

    /// The CSV text carried by the URI.
    pub fn decode_csv(&self) -> Option<String> {
        let body = self.uri.strip_prefix(DATA_URI_PREFIX)?;
        percent_decode_str(body)
            .decode_utf8()
            .ok()
            .map(|text| text.into_owned())
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

/// Serializes the view as CSV.
///
/// The header is the table's columns in source order, followed by one line
/// per row in view order. Fields are quoted only when they contain a comma,
/// a quote or a line break. Lines end with `\n`. An empty view yields the
/// header line alone.
pub fn to_csv(table: &Table, view: &RowSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(table.columns()).map_err(csv_error)?;
    for row in view.iter() {
        writer.write_record(table.row_text(row)?).map_err(csv_error)?;
    }
    let bytes = writer.into_inner().map_err(|e| EngineError::Csv {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::Csv {
        message: e.to_string(),
    })
}

/// Serializes the view as a percent-encoded `data:text/csv` URI.
pub fn export(table: &Table, view: &RowSet) -> Result<EncodedPayload> {
    Ok(EncodedPayload::from_csv(&to_csv(table, view)?))
}

/// The view as header plus text rows, for table widgets.
pub fn records(table: &Table, view: &RowSet) -> Result<ViewRecords> {
    let rows = view
        .iter()
        .map(|row| table.row_text(row))
        .collect::<Result<Vec<_>>>()?;
    Ok(ViewRecords {
        headers: table.columns().to_vec(),
        rows,
    })
}

/// The view as a Polars frame with the source column types.
pub fn materialize(table: &Table, view: &RowSet) -> Result<DataFrame> {
    let keep = view.mask(table.height());
    let mask = BooleanChunked::from_slice("view".into(), keep.as_slice());
    Ok(table.frame().filter(&mask)?)
}

fn csv_error(error: csv::Error) -> EngineError {
    EngineError::Csv {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn table() -> Table {
        let frame = DataFrame::new(vec![
            Series::new("Year".into(), &[2017i64, 2018]).into_column(),
            Series::new("Title".into(), &["Kids, Cohort \"A\"", "Plain"]).into_column(),
        ])
        .unwrap();
        Table::new(frame)
    }

    #[test]
    fn quotes_fields_with_delimiters() {
        let table = table();
        let csv = to_csv(&table, &table.all_rows()).unwrap();
        assert_eq!(csv, "Year,Title\n2017,\"Kids, Cohort \"\"A\"\"\"\n2018,Plain\n");
    }

    #[test]
    fn empty_view_exports_header_only() {
        let csv = to_csv(&table(), &RowSet::empty()).unwrap();
        assert_eq!(csv, "Year,Title\n");
    }

    #[test]
    fn payload_is_percent_encoded() {
        let payload = EncodedPayload::from_csv("a b,c/d\n");
        assert_eq!(
            payload.as_str(),
            "data:text/csv;charset=utf-8,a%20b%2Cc/d%0A"
        );
        assert_eq!(payload.decode_csv().as_deref(), Some("a b,c/d\n"));
    }

    #[test]
    fn payload_encodes_utf8_bytes() {
        let payload = EncodedPayload::from_csv("Müller\n");
        assert_eq!(payload.to_string(), "data:text/csv;charset=utf-8,M%C3%BCller%0A");
    }

    #[test]
    fn materialize_keeps_selected_rows() {
        let table = table();
        let view: RowSet = [1].into_iter().collect();
        let frame = materialize(&table, &view).unwrap();
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.width(), 2);
    }

    #[test]
    fn records_follow_view_order() {
        let table = table();
        let records = records(&table, &table.all_rows()).unwrap();
        assert_eq!(records.headers, vec!["Year", "Title"]);
        assert_eq!(records.cell(1, "Title"), Some("Plain"));
    }
}
