//! Longest common subsequence (LCS) by dynamic programming.

/// Builds the `(m + 1) x (n + 1)` table where `dp[i][j]` is the LCS length of
/// `a[..i]` and `b[..j]`.
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    dp
}

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let s1 = "ABCDGH";
/// let s2 = "AEDFHR";
/// assert_eq!(lcs_length(s1, s2), 3); // "ADH" is one possible LCS
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_table(&a_chars, &b_chars)[a_chars.len()][b_chars.len()]
}

/// Reconstructs one longest common subsequence of two symbol slices.
///
/// The walk back from `dp[m][n]` emits a symbol on every match and moves
/// diagonally. Otherwise it moves to the strictly larger neighbour; on a tie
/// it drops a symbol of `b` (decreasing `j`) before one of `a`. This fixes
/// which of several maximum-length subsequences is returned.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::dynamic::longest_common_subsequence::lcs_of;
///
/// let a = [1, 3, 4, 1, 2];
/// let b = [3, 4, 1, 2, 1];
/// assert_eq!(lcs_of(&a, &b), vec![3, 4, 1, 2]);
/// ```
pub fn lcs_of<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let dp = lcs_table(a, b);

    let mut i = a.len();
    let mut j = b.len();
    let mut subsequence = Vec::with_capacity(dp[i][j]);

    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // The subsequence is constructed backwards, so reverse it.
    subsequence.reverse();
    subsequence
}

/// Reconstructs and returns one actual LCS (Longest Common Subsequence)
/// between `a` and `b`, compared character by character.
///
/// If there are multiple subsequences with the same length, the tie-break of
/// [`lcs_of`] decides which one. Returns an empty string if there's no common
/// subsequence.
///
/// # Examples
///
/// ```
/// use seqalgos::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// assert_eq!(lcs_sequence("AABBCC", "ABBCDC"), "ABBCC");
/// assert_eq!(lcs_sequence("AB", "BA"), "B");
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_of(&a_chars, &b_chars).into_iter().collect()
}
