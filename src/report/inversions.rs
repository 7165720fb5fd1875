//! Inversion counts for a batch of rows, computed by both counters.

use std::fmt;

use log::{debug, error};
use rayon::prelude::*;

use crate::cs::sort::inversion_count::{
    count_inversions_brute_force, count_inversions_divide_and_conquer,
};
use crate::data::reference::REFERENCE_SCORES;
use crate::report::categorize::{categorize, CategoryMap};

/// Per-row inversion counts from the quadratic and the merge-sort counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InversionReport {
    brute_force: Vec<usize>,
    divide_and_conquer: Vec<usize>,
}

impl InversionReport {
    /// Counts every row with both counters. Rows are independent and are
    /// counted in parallel; results stay in input order.
    pub fn from_rows<T, R>(rows: &[R]) -> Self
    where
        T: Ord + Clone,
        R: AsRef<[T]> + Sync,
    {
        debug!("counting inversions for {} rows", rows.len());
        let (brute_force, divide_and_conquer): (Vec<usize>, Vec<usize>) = rows
            .par_iter()
            .map(|row| {
                let row = row.as_ref();
                (
                    count_inversions_brute_force(row),
                    count_inversions_divide_and_conquer(row),
                )
            })
            .unzip();

        let report = Self {
            brute_force,
            divide_and_conquer,
        };
        if !report.algorithms_agree() {
            error!(
                "inversion counters disagree: brute force total {}, divide and conquer total {}",
                report.total_brute_force(),
                report.total_divide_and_conquer()
            );
        }
        report
    }

    /// The report for [`REFERENCE_SCORES`].
    pub fn reference() -> Self {
        Self::from_rows::<u8, _>(&REFERENCE_SCORES)
    }

    pub fn rows(&self) -> usize {
        self.brute_force.len()
    }

    pub fn brute_force_counts(&self) -> &[usize] {
        &self.brute_force
    }

    pub fn divide_and_conquer_counts(&self) -> &[usize] {
        &self.divide_and_conquer
    }

    pub fn total_brute_force(&self) -> usize {
        self.brute_force.iter().sum()
    }

    pub fn total_divide_and_conquer(&self) -> usize {
        self.divide_and_conquer.iter().sum()
    }

    /// True when both counters produced the same count for every row.
    pub fn algorithms_agree(&self) -> bool {
        self.brute_force == self.divide_and_conquer
    }

    pub fn brute_force_categories(&self) -> CategoryMap {
        categorize(&self.brute_force)
    }

    pub fn divide_and_conquer_categories(&self) -> CategoryMap {
        categorize(&self.divide_and_conquer)
    }
}

impl fmt::Display for InversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total inversion count (Brute Force) across all students: {}",
            self.total_brute_force()
        )?;
        writeln!(
            f,
            "Total inversion count (Divide and Conquer) across all students: {}",
            self.total_divide_and_conquer()
        )?;
        writeln!(f)?;
        writeln!(f, "Categorized Inversion Counts (Brute Force):")?;
        write!(f, "{}", self.brute_force_categories())?;
        writeln!(f)?;
        writeln!(f, "Categorized Inversion Counts (Divide and Conquer):")?;
        write!(f, "{}", self.divide_and_conquer_categories())
    }
}
