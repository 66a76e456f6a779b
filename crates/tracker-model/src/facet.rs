use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One filterable column plus its currently selected values.
///
/// An empty selection places no constraint on the view. A non-empty selection
/// keeps rows whose stringified cell is one of the selected values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub column: String,
    #[serde(default)]
    pub selected: BTreeSet<String>,
}

impl Facet {
    pub fn new<I, S>(column: impl Into<String>, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column: column.into(),
            selected: selected.into_iter().map(Into::into).collect(),
        }
    }

    /// A facet with nothing selected.
    pub fn unconstrained(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            selected: BTreeSet::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        !self.is_active() || self.selected.contains(value)
    }
}

/// The facets submitted for one evaluation, in submission order.
///
/// Facets are ANDed together. Two facets naming the same column stay separate
/// constraints and are not merged into one value set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub facets: Vec<Facet>,
}

impl FilterRequest {
    pub fn new(facets: Vec<Facet>) -> Self {
        Self { facets }
    }

    #[must_use]
    pub fn with_facet(mut self, facet: Facet) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn active_facets(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter().filter(|facet| facet.is_active())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active_facets().next().is_none()
    }
}

/// Choices offered for one facet's multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub column: String,
    pub label: String,
    pub values: Vec<String>,
}
