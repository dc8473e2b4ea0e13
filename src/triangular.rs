//! Triangular solvers: forward and backward substitution
//!
//! These are the leaf routines of the crate: Gaussian elimination and the
//! LU factorization both finish (or are later applied) through one of them.
//! Both accept a single right-hand-side vector or an (M, K) block of K
//! independent right-hand sides solved in one pass.
//!
//! Only one triangle of the coefficient matrix is ever read, so the other
//! triangle may hold unrelated data -- in particular, backward substitution
//! can run directly on a packed LU buffer whose strictly-lower entries are
//! the L multipliers.
//!
//! Division by a zero or near-zero diagonal entry is not guarded: the
//! resulting infinities/NaNs propagate into the solution instead of raising
//! an error.

use ndarray::{s, Array, Array2, ArrayView2, Dimension};

use crate::error::SolveError;
use crate::shape::{check_leading, check_square, coefficient_matrix, restore_shape, rhs_columns};

/// Solve the lower-triangular system `a * x = b` for `x`.
///
/// `a` is M x M in lower-triangular form; entries above the main diagonal
/// are never read. `b` has shape (M,) or (M, K) and the returned solution
/// matches it.
///
/// Solves row 0 first, each subsequent row `k` against the already-solved
/// rows: `x[k] = (b[k] - a[k, ..k] . x[..k]) / a[k, k]`, for every column of
/// `b` simultaneously.
///
/// # Example
///
/// ```
/// use dense_solvers::forward_substitution;
/// use ndarray::array;
///
/// let a = array![[2.0, 0.0], [1.0, 4.0]];
/// let b = array![4.0, 10.0];
/// let x = forward_substitution(&a, &b).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn forward_substitution<DA, DB>(
    a: &Array<f64, DA>,
    b: &Array<f64, DB>,
) -> Result<Array<f64, DB>, SolveError>
where
    DA: Dimension,
    DB: Dimension,
{
    let a2 = coefficient_matrix(a)?;
    let m = check_square(&a2)?;
    let b2 = rhs_columns(b)?;
    check_leading(m, b2.nrows())?;

    let x = forward_columns(&a2, &b2);
    Ok(restore_shape(x, b.raw_dim()))
}

/// Solve the upper-triangular system `a * x = b` for `x`.
///
/// Symmetric counterpart of [`forward_substitution`]: `a` is in
/// upper-triangular form, entries below the main diagonal are never read,
/// and rows are solved from M-1 down to 0 using the already-solved
/// higher-index rows: `x[k] = (b[k] - a[k, k+1..] . x[k+1..]) / a[k, k]`.
pub fn backward_substitution<DA, DB>(
    a: &Array<f64, DA>,
    b: &Array<f64, DB>,
) -> Result<Array<f64, DB>, SolveError>
where
    DA: Dimension,
    DB: Dimension,
{
    let a2 = coefficient_matrix(a)?;
    let m = check_square(&a2)?;
    let b2 = rhs_columns(b)?;
    check_leading(m, b2.nrows())?;

    let x = backward_columns(&a2, &b2);
    Ok(restore_shape(x, b.raw_dim()))
}

/// Forward substitution over an (M, K) column block. Shapes already checked.
pub(crate) fn forward_columns(a: &ArrayView2<'_, f64>, b: &ArrayView2<'_, f64>) -> Array2<f64> {
    let m = a.nrows();
    let k = b.ncols();
    let mut x = Array2::<f64>::zeros((m, k));
    for i in 0..m {
        // x[i, :] = (b[i, :] - a[i, ..i] . x[..i, :]) / a[i, i]
        let dot = a.slice(s![i, ..i]).dot(&x.slice(s![..i, ..]));
        let diag = a[[i, i]];
        for j in 0..k {
            x[[i, j]] = (b[[i, j]] - dot[j]) / diag;
        }
    }
    x
}

/// Backward substitution over an (M, K) column block. Shapes already checked.
pub(crate) fn backward_columns(a: &ArrayView2<'_, f64>, b: &ArrayView2<'_, f64>) -> Array2<f64> {
    let m = a.nrows();
    let k = b.ncols();
    let mut x = Array2::<f64>::zeros((m, k));
    for i in (0..m).rev() {
        let dot = a.slice(s![i, i + 1..]).dot(&x.slice(s![i + 1.., ..]));
        let diag = a[[i, i]];
        for j in 0..k {
            x[[i, j]] = (b[[i, j]] - dot[j]) / diag;
        }
    }
    x
}
