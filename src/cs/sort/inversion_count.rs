//! Inversion counting.
//!
//! An inversion is a pair of positions `(i, j)` with `i < j` and
//! `seq[i] > seq[j]`. Equal elements never form an inversion.
//!
//! Two independent counters are provided: a quadratic pairwise scan used as
//! an oracle, and a merge-sort based counter. They must agree on every input.

/// Counts inversions in `seq`. Alias for the divide-and-conquer counter.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::sort::inversion_count::count_inversions;
///
/// assert_eq!(count_inversions(&[9, 2, 4, 4]), 3);
/// assert_eq!(count_inversions(&[5, 6, 9, 9]), 0);
/// ```
pub fn count_inversions<T: Ord + Clone>(seq: &[T]) -> usize {
    count_inversions_divide_and_conquer(seq)
}

/// Counts inversions by checking every pair `i < j`. O(n^2) time, O(1) space.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::sort::inversion_count::count_inversions_brute_force;
///
/// assert_eq!(count_inversions_brute_force(&[3, 1, 5, 7]), 1);
/// ```
pub fn count_inversions_brute_force<T: Ord>(seq: &[T]) -> usize {
    let mut inversions = 0;
    for (i, left) in seq.iter().enumerate() {
        for right in &seq[i + 1..] {
            if left > right {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Counts inversions with merge sort. O(n log n) time.
///
/// The caller's slice is left untouched: the count is computed on an owned
/// working copy.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::sort::inversion_count::count_inversions_divide_and_conquer;
///
/// let scores = vec![2, 1, 2];
/// assert_eq!(count_inversions_divide_and_conquer(&scores), 1);
/// assert_eq!(scores, vec![2, 1, 2]);
/// ```
pub fn count_inversions_divide_and_conquer<T: Ord + Clone>(seq: &[T]) -> usize {
    let mut work = seq.to_vec();
    sort_and_count_inversions(&mut work)
}

/// Sorts `seq` ascending in place and returns the number of inversions it
/// had before sorting.
///
/// The sort is stable; on equal keys the element from the left half is
/// placed first, so duplicates are never counted.
pub fn sort_and_count_inversions<T: Ord + Clone>(seq: &mut [T]) -> usize {
    if seq.len() <= 1 {
        return 0;
    }
    // One scratch buffer reused by every merge level.
    let mut scratch = Vec::with_capacity(seq.len());
    merge_sort(seq, &mut scratch)
}

/// Largest inversion count possible for a sequence of length `n`: `n(n-1)/2`.
pub fn max_inversions(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn merge_sort<T: Ord + Clone>(seq: &mut [T], scratch: &mut Vec<T>) -> usize {
    let len = seq.len();
    if len <= 1 {
        return 0;
    }
    let mid = (len - 1) / 2 + 1;
    let mut inversions = merge_sort(&mut seq[..mid], scratch);
    inversions += merge_sort(&mut seq[mid..], scratch);
    inversions + merge_and_count(seq, mid, scratch)
}

/// Merges the sorted halves `seq[..mid]` and `seq[mid..]`, returning the
/// number of cross inversions between them.
fn merge_and_count<T: Ord + Clone>(seq: &mut [T], mid: usize, scratch: &mut Vec<T>) -> usize {
    scratch.clear();
    scratch.extend_from_slice(&seq[..mid]);

    let mut i = 0; // next unplaced element of the left copy
    let mut j = mid; // next unplaced element of the right half
    let mut k = 0;
    let mut inversions = 0;

    while i < scratch.len() && j < seq.len() {
        if scratch[i] <= seq[j] {
            seq[k] = scratch[i].clone();
            i += 1;
        } else {
            seq[k] = seq[j].clone();
            // Every left element still waiting is greater than seq[j].
            inversions += scratch.len() - i;
            j += 1;
        }
        k += 1;
    }

    // Remaining right elements are already in place.
    while i < scratch.len() {
        seq[k] = scratch[i].clone();
        i += 1;
        k += 1;
    }

    inversions
}
