//! Grouping of per-row counts by value.

use std::collections::BTreeMap;
use std::fmt;

/// Count value -> 1-based row indices that produced it.
///
/// Keys iterate in ascending order; indices within a bucket keep input
/// order. Only counts that occur in the input have a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    buckets: BTreeMap<usize, Vec<usize>>,
}

impl CategoryMap {
    /// Rows that produced `count`, if any did.
    pub fn get(&self, count: usize) -> Option<&[usize]> {
        self.buckets.get(&count).map(Vec::as_slice)
    }

    /// `(count, rows)` pairs in ascending count order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.buckets.iter().map(|(&count, rows)| (count, rows.as_slice()))
    }

    /// Distinct counts, ascending.
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of distinct counts.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of rows across all buckets.
    pub fn rows(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl fmt::Display for CategoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (count, rows) in self.iter() {
            writeln!(f, "Inversion Count {count}: Students {rows:?}")?;
        }
        Ok(())
    }
}

/// Buckets each row's 1-based index under its count.
///
/// # Examples
///
/// ```
/// use seqalgos::report::categorize;
///
/// let map = categorize(&[0, 2, 0, 1]);
/// assert_eq!(map.get(0), Some(&[1, 3][..]));
/// assert_eq!(map.counts().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub fn categorize(counts: &[usize]) -> CategoryMap {
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (index, &count) in counts.iter().enumerate() {
        buckets.entry(count).or_default().push(index + 1);
    }
    CategoryMap { buckets }
}
