//! LU factorization with complete pivoting
//!
//! Runs the same elimination kernel as the Gaussian solver, but on the
//! coefficient matrix alone, and keeps the in-progress elimination buffer as
//! the result: a single packed matrix whose strictly-lower entries are the
//! unit-diagonal L multipliers and whose diagonal-and-above entries are U,
//! together with the row and column permutations such that `P * A * Q = L * U`.
//!
//! The value of the factorization is its reuse: once computed it can be
//! applied to any number of right-hand sides through one forward and one
//! backward substitution each, at a fraction of the cost of re-running the
//! elimination.

use ndarray::{Array, Array2, Dimension};

use crate::elimination::{eliminate_in_place, Pivoting};
use crate::error::SolveError;
use crate::shape::{check_leading, check_square, coefficient_matrix, restore_shape, rhs_columns};
use crate::triangular::{backward_columns, forward_columns};

/// Packed LU factorization of a square matrix, with complete pivoting.
///
/// Immutable once constructed. Produced by [`lu_factor`] / [`lu_factor_into`].
///
/// # Example
///
/// ```
/// use dense_solvers::lu_factor;
/// use ndarray::array;
///
/// let a = array![[2.0, 1.0], [5.0, 3.0]];
/// let f = lu_factor(&a).unwrap();
///
/// let x = f.solve(&array![4.0, 11.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((f.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Packed factors: U on and above the diagonal, L multipliers strictly
    /// below it (unit diagonal of L implied, not stored).
    lu: Array2<f64>,
    /// Row permutation: factored row i came from original row `row_perm[i]`.
    row_perm: Vec<usize>,
    /// Column permutation: factored column j came from original column
    /// `col_perm[j]`.
    col_perm: Vec<usize>,
    /// True if the total number of swaps was even.
    even: bool,
}

/// Factor `a` with complete pivoting, leaving the caller's matrix untouched.
///
/// Elimination runs on a private copy. Use [`lu_factor_into`] to give up the
/// buffer and skip the copy.
pub fn lu_factor<D: Dimension>(a: &Array<f64, D>) -> Result<LuFactorization, SolveError> {
    let a2 = coefficient_matrix(a)?;
    check_square(&a2)?;
    lu_factor_into(a2.to_owned())
}

/// Factor `a` with complete pivoting, eliminating in the caller's buffer.
///
/// Consuming the matrix is the in-place variant: no copy is made and the
/// buffer is reused for the packed factors. The numerical result is
/// identical to [`lu_factor`].
pub fn lu_factor_into(a: Array2<f64>) -> Result<LuFactorization, SolveError> {
    let n = check_square(&a.view())?;

    let mut lu = a;
    let perms = eliminate_in_place(&mut lu, n, Pivoting::Complete);

    Ok(LuFactorization {
        lu,
        row_perm: perms.rows,
        col_perm: perms.cols,
        even: perms.even,
    })
}

impl LuFactorization {
    /// Dimension of the factored matrix.
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// The packed factor matrix (L strictly below the diagonal, U on and
    /// above it).
    pub fn lu(&self) -> &Array2<f64> {
        &self.lu
    }

    /// Row permutation indices.
    pub fn row_permutation(&self) -> &[usize] {
        &self.row_perm
    }

    /// Column permutation indices.
    pub fn col_permutation(&self) -> &[usize] {
        &self.col_perm
    }

    /// Both permutations as a 2 x M array: row 0 is the row permutation,
    /// row 1 the column permutation.
    pub fn pq(&self) -> Array2<usize> {
        let n = self.dim();
        let mut pq = Array2::<usize>::zeros((2, n));
        for i in 0..n {
            pq[[0, i]] = self.row_perm[i];
            pq[[1, i]] = self.col_perm[i];
        }
        pq
    }

    /// Expand the compact representation into explicit `(P, Q, L, U)`
    /// matrices satisfying `P * A * Q = L * U`.
    pub fn unpack(&self) -> (Array2<f64>, Array2<f64>, Array2<f64>, Array2<f64>) {
        let n = self.dim();

        let mut p = Array2::<f64>::zeros((n, n));
        let mut q = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            p[[i, self.row_perm[i]]] = 1.0;
            q[[self.col_perm[i], i]] = 1.0;
        }

        let mut l = Array2::<f64>::eye(n);
        let mut u = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                if j < i {
                    l[[i, j]] = self.lu[[i, j]];
                } else {
                    u[[i, j]] = self.lu[[i, j]];
                }
            }
        }

        (p, q, l, u)
    }

    /// Solve `a * x = b` for the factored matrix `a`.
    ///
    /// Permutes the rows of `b` by P, forward-substitutes on L, backward-
    /// substitutes on U, then un-permutes the unknowns through Q. `b` has
    /// shape (M,) or (M, K) and the solution matches it.
    pub fn solve<D: Dimension>(&self, b: &Array<f64, D>) -> Result<Array<f64, D>, SolveError> {
        let n = self.dim();
        let b2 = rhs_columns(b)?;
        check_leading(n, b2.nrows())?;
        let k = b2.ncols();

        // P * b
        let mut pb = Array2::<f64>::zeros((n, k));
        for i in 0..n {
            pb.row_mut(i).assign(&b2.row(self.row_perm[i]));
        }

        // L has an implicit unit diagonal in the packed buffer
        let mut l = self.lu.clone();
        for i in 0..n {
            l[[i, i]] = 1.0;
        }
        let y = forward_columns(&l.view(), &pb.view());
        // Backward substitution never reads below the diagonal, so the
        // packed buffer works directly as U
        let z = backward_columns(&self.lu.view(), &y.view());

        // x = Q * z
        let mut x = Array2::<f64>::zeros((n, k));
        for i in 0..n {
            x.row_mut(self.col_perm[i]).assign(&z.row(i));
        }

        Ok(restore_shape(x, b.raw_dim()))
    }

    /// Determinant of the factored matrix: the product of U's diagonal,
    /// signed by the swap parity.
    pub fn det(&self) -> f64 {
        let n = self.dim();
        let sign = if self.even { 1.0 } else { -1.0 };
        sign * (0..n).map(|i| self.lu[[i, i]]).product::<f64>()
    }
}
