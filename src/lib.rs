//! Direct solvers for small-to-medium dense linear systems
//!
//! This crate provides the classic direct-method toolchain in IEEE-754
//! double precision:
//!
//! - **Triangular solves**: [`forward_substitution`] / [`backward_substitution`]
//!   for lower-/upper-triangular systems, single or multi-column right-hand
//!   sides.
//! - **Gaussian elimination**: [`gauss_solve`] (partial pivoting) and
//!   [`gauss_solve_pivoting`] (explicit [`Pivoting`] policy, including
//!   complete row+column pivoting).
//! - **LU factorization**: [`lu_factor`] / [`lu_factor_into`] with complete
//!   pivoting, returning a reusable [`LuFactorization`] (packed L/U matrix
//!   plus row and column permutations, `P * A * Q = L * U`).
//!
//! Right-hand sides may be vectors `(M,)` or column blocks `(M, K)`; the
//! solution always matches the input's shape. Shape violations are reported
//! as [`SolveError`]; singular systems are deliberately *not* detected --
//! a zero pivot propagates non-finite values into the output, mirroring
//! standard direct-solve behavior.
//!
//! # Example
//!
//! ```
//! use dense_solvers::{gauss_solve, lu_factor};
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b = array![8.0, -11.0, -3.0];
//!
//! // One-shot solve
//! let x = gauss_solve(&a, &b).unwrap(); // x = [2, 3, -1]
//! assert!((x[1] - 3.0).abs() < 1e-12);
//!
//! // Factor once, solve many
//! let f = lu_factor(&a).unwrap();
//! let x2 = f.solve(&b).unwrap();
//! assert!((x2[1] - 3.0).abs() < 1e-12);
//! ```
//!
//! # Cargo features
//!
//! - `rayon` (off by default): parallelize the rank-1 elimination update
//!   across the rows below the pivot. Pivot selection and swaps stay
//!   sequential.

pub mod elimination;
pub mod error;
pub mod gauss;
pub mod lu;
pub mod triangular;

mod shape;

// Re-export the main entry points
pub use elimination::Pivoting;
pub use error::SolveError;
pub use gauss::{gauss_solve, gauss_solve_pivoting};
pub use lu::{lu_factor, lu_factor_into, LuFactorization};
pub use triangular::{backward_substitution, forward_substitution};
