//! The reference score table: 100 rows of four scores in `1..=9`.

/// Four scores per row, one row per student, in report order.
pub const REFERENCE_SCORES: [[u8; 4]; 100] = [
    [5, 6, 9, 9],
    [5, 3, 8, 6],
    [3, 1, 5, 7],
    [9, 2, 4, 4],
    [6, 1, 2, 2],
    [5, 8, 5, 7],
    [8, 3, 7, 8],
    [5, 3, 1, 8],
    [3, 6, 7, 8],
    [8, 6, 7, 6],
    [6, 9, 5, 4],
    [3, 6, 8, 1],
    [4, 5, 6, 1],
    [4, 6, 5, 9],
    [8, 6, 2, 6],
    [2, 4, 8, 1],
    [4, 8, 8, 5],
    [7, 1, 9, 3],
    [6, 4, 5, 6],
    [6, 4, 8, 6],
    [1, 4, 7, 8],
    [1, 6, 6, 1],
    [8, 1, 4, 1],
    [4, 7, 6, 3],
    [1, 8, 1, 4],
    [5, 5, 4, 3],
    [4, 5, 8, 9],
    [9, 4, 2, 9],
    [1, 6, 2, 2],
    [4, 4, 1, 1],
    [1, 8, 5, 1],
    [7, 4, 8, 2],
    [7, 8, 2, 8],
    [3, 9, 8, 7],
    [3, 5, 1, 7],
    [3, 2, 4, 3],
    [4, 8, 7, 1],
    [8, 3, 7, 2],
    [3, 7, 7, 7],
    [2, 9, 9, 2],
    [1, 2, 5, 2],
    [9, 5, 9, 2],
    [9, 3, 7, 8],
    [8, 2, 4, 2],
    [1, 9, 2, 1],
    [1, 6, 5, 6],
    [2, 4, 8, 3],
    [1, 8, 5, 9],
    [4, 8, 6, 5],
    [3, 9, 5, 5],
    [9, 2, 9, 8],
    [6, 6, 2, 3],
    [9, 4, 1, 4],
    [7, 9, 5, 3],
    [7, 4, 1, 8],
    [4, 3, 5, 1],
    [1, 4, 5, 5],
    [6, 3, 5, 3],
    [9, 9, 7, 5],
    [2, 2, 1, 7],
    [4, 8, 5, 5],
    [7, 6, 7, 2],
    [6, 2, 4, 4],
    [6, 5, 5, 1],
    [2, 9, 1, 6],
    [8, 2, 4, 4],
    [1, 7, 4, 6],
    [3, 2, 8, 2],
    [4, 2, 8, 2],
    [8, 9, 5, 4],
    [2, 1, 8, 2],
    [9, 5, 5, 8],
    [6, 9, 7, 4],
    [4, 1, 7, 3],
    [6, 7, 4, 8],
    [2, 1, 3, 1],
    [9, 1, 8, 2],
    [1, 2, 3, 2],
    [3, 7, 7, 6],
    [1, 1, 6, 9],
    [8, 9, 8, 5],
    [2, 4, 3, 8],
    [3, 6, 3, 6],
    [2, 7, 9, 6],
    [1, 2, 4, 3],
    [8, 8, 7, 7],
    [6, 9, 5, 3],
    [1, 1, 4, 6],
    [7, 1, 7, 6],
    [6, 4, 4, 1],
    [3, 3, 9, 2],
    [1, 8, 2, 8],
    [7, 1, 2, 5],
    [7, 5, 5, 1],
    [1, 2, 8, 5],
    [7, 3, 2, 2],
    [6, 5, 5, 5],
    [9, 2, 5, 4],
    [7, 1, 9, 2],
    [4, 7, 8, 6],
];
