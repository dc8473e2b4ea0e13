//! Shared shape validation for coefficient matrices and right-hand sides
//!
//! Entry points are generic over [`ndarray::Dimension`], so callers may pass
//! statically shaped `Array1`/`Array2` values or dynamic-dimension arrays
//! that get validated at run time. Right-hand sides are always processed
//! internally as an (M, K) column block; a 1-D input is folded to (M, 1) on
//! the way in and back to (M,) on the way out.

use ndarray::{Array, Array2, ArrayView2, Axis, Dimension, Ix1, Ix2};

use crate::error::SolveError;

/// View a coefficient array as a 2-D matrix, rejecting any other rank.
pub(crate) fn coefficient_matrix<D: Dimension>(
    a: &Array<f64, D>,
) -> Result<ArrayView2<'_, f64>, SolveError> {
    if a.ndim() != 2 {
        return Err(SolveError::CoefficientDimension { ndim: a.ndim() });
    }
    Ok(a.view()
        .into_dimensionality::<Ix2>()
        .expect("dimension checked above"))
}

/// Require a square matrix and return its dimension.
pub(crate) fn check_square(a: &ArrayView2<'_, f64>) -> Result<usize, SolveError> {
    let (nrows, ncols) = a.dim();
    if nrows != ncols {
        return Err(SolveError::NotSquare { nrows, ncols });
    }
    Ok(nrows)
}

/// View a right-hand side as an (M, K) column block, folding 1-D to (M, 1).
pub(crate) fn rhs_columns<D: Dimension>(
    b: &Array<f64, D>,
) -> Result<ArrayView2<'_, f64>, SolveError> {
    match b.ndim() {
        1 => {
            let v = b
                .view()
                .into_dimensionality::<Ix1>()
                .expect("dimension checked above");
            Ok(v.insert_axis(Axis(1)))
        }
        2 => Ok(b
            .view()
            .into_dimensionality::<Ix2>()
            .expect("dimension checked above")),
        ndim => Err(SolveError::RhsDimension { ndim }),
    }
}

/// Require the right-hand side's leading dimension to match the system size.
pub(crate) fn check_leading(expected: usize, got: usize) -> Result<(), SolveError> {
    if expected != got {
        return Err(SolveError::LeadingDimension { expected, got });
    }
    Ok(())
}

/// Fold an (M, K) solution block back into the caller's shape, so 1-D in
/// gives 1-D out and 2-D in gives 2-D out.
pub(crate) fn restore_shape<D: Dimension>(x: Array2<f64>, dim: D) -> Array<f64, D> {
    x.into_shape_with_order(dim)
        .expect("solution shape matches the right-hand side")
}
