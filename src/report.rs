//! Batch-level results: categorized inversion counts and per-batch LCS
//! outcomes, each with a plain-text rendering.

pub mod categorize;
pub mod inversions;
pub mod lcs;

pub use categorize::{categorize, CategoryMap};
pub use inversions::InversionReport;
pub use lcs::{LcsBatchRunner, LcsOutcome};
