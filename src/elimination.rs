//! Shared in-place elimination kernel
//!
//! Gaussian elimination and the LU factorization run the same loop: pick a
//! pivot, swap it into place, form the multipliers below it, then apply the
//! rank-1 outer-product update to the trailing block. The kernel operates on
//! an M x W buffer where W >= M: the left M x M block is the coefficient
//! matrix (pivot search and column swaps are confined to it) while any extra
//! columns on the right are augmented right-hand sides that row swaps and the
//! trailing update carry along.
//!
//! Elimination proceeds strictly left to right through the pivot indices;
//! a finalized column is never revisited.

use ndarray::{Array2, ArrayView1, ArrayViewMut1, Axis};

#[cfg(feature = "rayon")]
use ndarray::parallel::prelude::*;

/// Pivot selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Search column k, rows k.., for the entry of largest magnitude.
    #[default]
    Partial,
    /// Search the entire trailing k.. x k.. sub-block. More stable, and
    /// additionally tracks a column permutation.
    Complete,
}

/// Row and column permutations recorded during elimination.
///
/// Both start as the identity ordering and are mutated by swaps only, so
/// they are always permutations of 0..n. Under partial pivoting `cols`
/// stays the identity.
pub(crate) struct Elimination {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    /// True if the total number of row and column swaps was even.
    pub even: bool,
}

/// Rows below the pivot are updated in parallel past this count.
#[cfg(feature = "rayon")]
const PAR_ROW_THRESHOLD: usize = 128;

/// Triangularize the left n x n block of `aug` in place.
///
/// On return the left block holds U on and above the diagonal and the L
/// multipliers strictly below it; the augmented columns hold the transformed
/// right-hand sides.
///
/// A pivot search that finds only zeros means the system is singular. This
/// is not an error: the divisions produce non-finite values that propagate
/// into the buffer (a warning is logged).
pub(crate) fn eliminate_in_place(
    aug: &mut Array2<f64>,
    n: usize,
    pivoting: Pivoting,
) -> Elimination {
    debug_assert_eq!(aug.nrows(), n);
    debug_assert!(aug.ncols() >= n);
    let width = aug.ncols();

    let mut rows: Vec<usize> = (0..n).collect();
    let mut cols: Vec<usize> = (0..n).collect();
    let mut even = true;
    let mut row_swaps = 0usize;
    let mut col_swaps = 0usize;

    for k in 0..n {
        // Pivot search over the active region of the left block
        let mut pr = k;
        let mut pc = k;
        let mut max_val = aug[[k, k]].abs();
        match pivoting {
            Pivoting::Partial => {
                for i in (k + 1)..n {
                    let val = aug[[i, k]].abs();
                    if val > max_val {
                        max_val = val;
                        pr = i;
                    }
                }
            }
            Pivoting::Complete => {
                for i in k..n {
                    for j in k..n {
                        let val = aug[[i, j]].abs();
                        if val > max_val {
                            max_val = val;
                            pr = i;
                            pc = j;
                        }
                    }
                }
            }
        }

        if max_val == 0.0 {
            log::warn!(
                "elimination step {}: pivot search found only zeros; the result will contain non-finite values",
                k
            );
        }

        // Swap the pivot row (and column) into position k. Row swaps span
        // the augmented columns; column swaps stay inside the left block.
        if pr != k {
            for j in 0..width {
                aug.swap((k, j), (pr, j));
            }
            rows.swap(k, pr);
            even = !even;
            row_swaps += 1;
        }
        if pc != k {
            for i in 0..n {
                aug.swap((i, k), (i, pc));
            }
            cols.swap(k, pc);
            even = !even;
            col_swaps += 1;
        }

        // Multipliers below the pivot, then the rank-1 trailing update:
        // aug[k+1.., k] /= aug[k, k]
        // aug[k+1.., k+1..] -= aug[k+1.., k] (x) aug[k, k+1..]
        let (top, mut below) = aug.view_mut().split_at(Axis(0), k + 1);
        let pivot_row = top.row(k);
        let inv_pivot = 1.0 / pivot_row[k];

        #[cfg(feature = "rayon")]
        {
            if below.nrows() >= PAR_ROW_THRESHOLD {
                below
                    .axis_iter_mut(Axis(0))
                    .into_par_iter()
                    .for_each(|mut row| eliminate_row(&mut row, &pivot_row, k, inv_pivot));
                continue;
            }
        }
        for mut row in below.axis_iter_mut(Axis(0)) {
            eliminate_row(&mut row, &pivot_row, k, inv_pivot);
        }
    }

    log::debug!(
        "eliminated {}x{} block ({:?} pivoting, {} row swaps, {} column swaps)",
        n,
        width,
        pivoting,
        row_swaps,
        col_swaps
    );

    Elimination { rows, cols, even }
}

/// Store the multiplier for one row and subtract its share of the pivot row.
#[inline]
fn eliminate_row(
    row: &mut ArrayViewMut1<'_, f64>,
    pivot_row: &ArrayView1<'_, f64>,
    k: usize,
    inv_pivot: f64,
) {
    let mult = row[k] * inv_pivot;
    row[k] = mult;
    for j in (k + 1)..row.len() {
        row[j] -= mult * pivot_row[j];
    }
}
