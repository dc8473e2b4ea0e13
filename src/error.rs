//! Error types for the solver entry points
//!
//! Every public routine validates shapes eagerly, before touching any data,
//! and fails the whole call on the first violation. Nothing is partially
//! mutated before validation completes.

use thiserror::Error;

/// Shape and dimension errors raised by the solver entry points.
///
/// These are the only conditions reported as errors. Numerical failure --
/// a singular or near-singular coefficient matrix, a zero pivot -- is
/// deliberately *not* an error: the offending division produces non-finite
/// values that propagate into the output, matching standard direct-solve
/// behavior.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The coefficient array is not 2-dimensional.
    #[error("coefficient matrix has dimension {ndim}, should be 2")]
    CoefficientDimension { ndim: usize },

    /// The right-hand side is neither a vector nor a column block.
    #[error("right-hand side has dimension {ndim}, should be 1 or 2")]
    RhsDimension { ndim: usize },

    /// The coefficient matrix is not square.
    #[error("coefficient matrix has shape ({nrows}, {ncols}), should be square")]
    NotSquare { nrows: usize, ncols: usize },

    /// The right-hand side's leading dimension disagrees with the
    /// coefficient matrix.
    #[error(
        "right-hand side has leading dimension {got}, should match coefficient matrix dimension {expected}"
    )]
    LeadingDimension { expected: usize, got: usize },
}
