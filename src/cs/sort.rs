pub mod inversion_count;

pub use inversion_count::{
    count_inversions, count_inversions_brute_force, count_inversions_divide_and_conquer,
    max_inversions, sort_and_count_inversions,
};
