//! Fixed grid geometry and the shared adjacency tables.
//!
//! The [`PEERS`] and [`GROUPS`] tables depend only on the fixed 9×9 grid
//! dimension. They are computed once in const context, are never mutated,
//! and may be shared freely across all boards and worker threads.

/// Width of one box (and number of boxes per axis).
pub const DIM: usize = 3;
/// Width of the full grid.
pub const DIM2: usize = DIM * DIM;
/// Total number of cells.
pub const SIZE: usize = DIM2 * DIM2;

/// Number of peers of each cell: 8 in its row, 8 in its column, and the
/// 4 box cells not already counted.
pub const NUM_PEERS: usize = 20;

/// Converts a `(row, col)` coordinate into a linear cell index.
#[must_use]
#[inline]
pub const fn index_of(row: usize, col: usize) -> usize {
    row * DIM2 + col
}

/// Converts a linear cell index into its `(row, col, box)` coordinates.
#[must_use]
#[inline]
pub const fn pos_of(idx: usize) -> (usize, usize, usize) {
    let row = idx / DIM2;
    let col = idx % DIM2;
    let boxi = (row / DIM) * DIM + col / DIM;
    (row, col, boxi)
}

/// For each cell, the indices of the 20 cells sharing its row, column, or
/// box (the cell itself excluded), in ascending order.
pub static PEERS: [[usize; NUM_PEERS]; SIZE] = {
    let mut peers = [[0; NUM_PEERS]; SIZE];
    let mut i = 0;
    while i < SIZE {
        let (row, col, boxi) = pos_of(i);
        let mut n = 0;
        let mut j = 0;
        while j < SIZE {
            if j != i {
                let (row_j, col_j, box_j) = pos_of(j);
                if row_j == row || col_j == col || box_j == boxi {
                    peers[i][n] = j;
                    n += 1;
                }
            }
            j += 1;
        }
        i += 1;
    }
    peers
};

/// The 27 groups of 9 cell indices each: rows 0-8, then columns 9-17, then
/// boxes 18-26. Every group must contain each digit exactly once.
pub static GROUPS: [[usize; DIM2]; 3 * DIM2] = {
    let mut groups = [[0; DIM2]; 3 * DIM2];
    let mut filled = [0; 3 * DIM2];
    let mut i = 0;
    while i < SIZE {
        let (row, col, boxi) = pos_of(i);
        groups[row][filled[row]] = i;
        filled[row] += 1;
        groups[DIM2 + col][filled[DIM2 + col]] = i;
        filled[DIM2 + col] += 1;
        groups[2 * DIM2 + boxi][filled[2 * DIM2 + boxi]] = i;
        filled[2 * DIM2 + boxi] += 1;
        i += 1;
    }
    groups
};
