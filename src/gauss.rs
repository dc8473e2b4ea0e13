//! Gaussian elimination solver
//!
//! End-to-end solve of a general full-rank square system: augment [A | b],
//! triangularize with the shared elimination kernel, then recover x by
//! backward substitution. Rank deficiency is a precondition violation, not
//! a checked error -- a zero pivot propagates non-finite values into the
//! solution.

use ndarray::{concatenate, s, Array, Array2, Axis, Dimension};

use crate::elimination::{eliminate_in_place, Pivoting};
use crate::error::SolveError;
use crate::shape::{check_leading, check_square, coefficient_matrix, restore_shape, rhs_columns};
use crate::triangular::backward_columns;

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// `a` must be a square, full-rank M x M matrix; `b` has shape (M,) or
/// (M, K) and the returned solution matches it.
///
/// # Example
///
/// ```
/// use dense_solvers::gauss_solve;
/// use ndarray::array;
///
/// let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
/// let b = array![8.0, -11.0, -3.0];
/// let x = gauss_solve(&a, &b).unwrap(); // x = [2, 3, -1]
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// ```
pub fn gauss_solve<DA, DB>(
    a: &Array<f64, DA>,
    b: &Array<f64, DB>,
) -> Result<Array<f64, DB>, SolveError>
where
    DA: Dimension,
    DB: Dimension,
{
    gauss_solve_pivoting(a, b, Pivoting::Partial)
}

/// Solve `a * x = b` by Gaussian elimination with an explicit pivoting
/// policy.
///
/// Under [`Pivoting::Complete`] the pivot search covers the whole trailing
/// sub-block and the unknowns are re-ordered through a column permutation,
/// which is undone before the solution is returned. Row pivots need no undo:
/// the right-hand side is permuted alongside the coefficient block.
pub fn gauss_solve_pivoting<DA, DB>(
    a: &Array<f64, DA>,
    b: &Array<f64, DB>,
    pivoting: Pivoting,
) -> Result<Array<f64, DB>, SolveError>
where
    DA: Dimension,
    DB: Dimension,
{
    let a2 = coefficient_matrix(a)?;
    let m = check_square(&a2)?;
    let b2 = rhs_columns(b)?;
    check_leading(m, b2.nrows())?;

    // Augmented matrix [A | b]; elimination carries the right-hand sides
    // through every row swap and trailing update.
    let mut aug = concatenate(Axis(1), &[a2, b2]).expect("row counts validated above");
    let perms = eliminate_in_place(&mut aug, m, pivoting);

    let upper = aug.slice(s![.., ..m]);
    let rhs = aug.slice(s![.., m..]);
    // The multipliers stored below the diagonal are ignored here
    let y = backward_columns(&upper, &rhs);

    let x = match pivoting {
        Pivoting::Partial => y,
        Pivoting::Complete => {
            // Column swaps re-ordered the unknowns: y[i] solves for the
            // original unknown cols[i].
            let mut x = Array2::<f64>::zeros(y.dim());
            for (i, &ci) in perms.cols.iter().enumerate() {
                x.row_mut(ci).assign(&y.row(i));
            }
            x
        }
    };

    Ok(restore_shape(x, b.raw_dim()))
}
