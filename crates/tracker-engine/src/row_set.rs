use std::collections::BTreeSet;
use std::collections::btree_set;

/// A set of rows identified by their position in the source table.
///
/// Membership is by position only, so two rows with identical contents stay
/// distinct. Iteration is ascending, which is the source table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    rows: BTreeSet<usize>,
}

impl RowSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every row of a table with `height` rows.
    pub fn full(height: usize) -> Self {
        (0..height).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn insert(&mut self, row: usize) -> bool {
        self.rows.insert(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    #[must_use]
    pub fn intersect(&self, other: &RowSet) -> RowSet {
        // Walk the smaller set and probe the larger one.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|row| large.contains(*row)).collect()
    }

    pub fn is_subset(&self, other: &RowSet) -> bool {
        self.rows.is_subset(&other.rows)
    }

    /// Boolean mask over `height` rows, `true` where the row is in the set.
    pub fn mask(&self, height: usize) -> Vec<bool> {
        let mut mask = vec![false; height];
        for row in self.iter().filter(|row| *row < height) {
            mask[row] = true;
        }
        mask
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for RowSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a usize;
    type IntoIter = btree_set::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
