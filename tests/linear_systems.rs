//! Cross-module properties of the public solver API

use approx::assert_relative_eq;
use dense_solvers::{
    backward_substitution, forward_substitution, gauss_solve, gauss_solve_pivoting, lu_factor,
    Pivoting,
};
use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random diagonally dominant matrix: comfortably full rank and well
/// conditioned, so direct solves hit tight tolerances.
fn random_dominant_system(n: usize, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            a[[i, j]] = rng.gen_range(-1.0..1.0);
        }
        a[[i, i]] += n as f64;
    }
    let b = Array1::from_iter((0..n).map(|_| rng.gen_range(-5.0..5.0)));
    (a, b)
}

#[test]
fn gauss_residuals_on_random_systems() {
    for seed in 0..5 {
        let (a, b) = random_dominant_system(8, seed);
        for pivoting in [Pivoting::Partial, Pivoting::Complete] {
            let x = gauss_solve_pivoting(&a, &b, pivoting).unwrap();
            let ax = a.dot(&x);
            for i in 0..8 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn lu_round_trip_matches_gauss() {
    let (a, b) = random_dominant_system(10, 42);

    let f = lu_factor(&a).unwrap();
    let x_lu = f.solve(&b).unwrap();
    let x_gauss = gauss_solve(&a, &b).unwrap();

    for i in 0..10 {
        assert_relative_eq!(x_lu[i], x_gauss[i], epsilon = 1e-9);
    }
}

#[test]
fn unpacked_factors_reproduce_the_matrix() {
    let (a, _) = random_dominant_system(7, 7);

    let f = lu_factor(&a).unwrap();
    let (p, q, l, u) = f.unpack();

    let paq = p.dot(&a).dot(&q);
    let lu = l.dot(&u);
    for i in 0..7 {
        for j in 0..7 {
            assert_relative_eq!(paq[[i, j]], lu[[i, j]], epsilon = 1e-10);
        }
    }
}

#[test]
fn factorization_solves_through_explicit_substitution() {
    // Reconstruct P, Q, L, U and solve manually with the triangular solver;
    // the result must match the factorization's own solve().
    let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
    let b = array![8.0, -11.0, -3.0];

    let f = lu_factor(&a).unwrap();
    let (p, q, l, u) = f.unpack();

    let pb = p.dot(&b);
    let y = forward_substitution(&l, &pb).unwrap();
    let z = backward_substitution(&u, &y).unwrap();
    let x_manual = q.dot(&z);

    let x = f.solve(&b).unwrap();
    for i in 0..3 {
        assert_relative_eq!(x_manual[i], x[i], epsilon = 1e-10);
        // and both agree with the classic known solution [2, 3, -1]
    }
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
}

#[test]
fn multi_rhs_block_reuses_one_factorization() {
    let (a, _) = random_dominant_system(6, 11);
    let mut rng = StdRng::seed_from_u64(99);
    let b = Array2::from_shape_fn((6, 3), |_| rng.gen_range(-2.0..2.0));

    let f = lu_factor(&a).unwrap();
    let x = f.solve(&b).unwrap();
    assert_eq!(x.dim(), (6, 3));

    let ax = a.dot(&x);
    for i in 0..6 {
        for j in 0..3 {
            assert_relative_eq!(ax[[i, j]], b[[i, j]], epsilon = 1e-9);
        }
    }
}
