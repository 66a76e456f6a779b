//! Turning `--select COLUMN=VALUE` flags into a filter request.

use std::str::FromStr;

use tracing::debug;

use tracker_model::{Facet, FilterRequest};

use crate::logging::redact_value;

/// One `COLUMN=VALUE` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub column: String,
    pub value: String,
}

impl FromStr for Selection {
    type Err = String;

    /// Splits on the first `=`, so values may themselves contain `=`.
    /// An empty value selects blank cells.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (column, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected COLUMN=VALUE, got `{raw}`"))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("missing column name in `{raw}`"));
        }
        Ok(Self {
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

/// Groups selections by column into one facet each.
///
/// Facets appear in the order their column was first selected.
pub fn build_request(selections: &[Selection]) -> FilterRequest {
    let mut facets: Vec<Facet> = Vec::new();
    for selection in selections {
        debug!(
            column = %selection.column,
            value = redact_value(&selection.value),
            "selection"
        );
        match facets.iter_mut().find(|f| f.column == selection.column) {
            Some(facet) => {
                facet.selected.insert(selection.value.clone());
            }
            None => facets.push(Facet::new(
                selection.column.clone(),
                [selection.value.clone()],
            )),
        }
    }
    FilterRequest::new(facets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_column_and_value() {
        let selection: Selection = "Year=2017".parse().unwrap();
        assert_eq!(selection.column, "Year");
        assert_eq!(selection.value, "2017");
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        let selection: Selection = "Title=a=b".parse().unwrap();
        assert_eq!(selection.value, "a=b");
    }

    #[test]
    fn rejects_missing_separator_and_column() {
        assert!("Year".parse::<Selection>().is_err());
        assert!(" =2017".parse::<Selection>().is_err());
    }

    #[test]
    fn empty_value_is_allowed() {
        let selection: Selection = "PI=".parse().unwrap();
        assert_eq!(selection.value, "");
    }
}
