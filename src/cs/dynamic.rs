pub mod lcs_fold;
pub mod longest_common_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use lcs_fold::{reduce_lcs, LcsFold};
pub use longest_common_subsequence::{lcs_length, lcs_of, lcs_sequence};
