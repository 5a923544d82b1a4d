//! Algorithm correctness tests
//!
//! These tests check the defining Moore-Penrose identities on random inputs
//! and pin the documented input/output scenarios.

use ndarray::array;
use pinv_rs::matrix::max_abs_diff;
use pinv_rs::{Engine, Matrix, PinvConfig, PinvOutcome, io, multiply, pseudoinverse, transpose};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PROPERTY_TOLERANCE: f64 = 1e-4;

/// Entries uniform in [-1, 1) with 3.0 added along the main diagonal so the
/// normal-equations matrix stays well away from the singularity tolerance
fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_shape_fn((rows, cols), |(i, j)| {
        let boost = if i == j { 3.0 } else { 0.0 };
        rng.random_range(-1.0..1.0) + boost
    })
}

fn solve(a: &Matrix, engine: Engine) -> Matrix {
    match pseudoinverse(a, engine, &PinvConfig::default()).unwrap() {
        PinvOutcome::Solved(result) => result.matrix,
        PinvOutcome::Singular { .. } => panic!("unexpected singular result for {:?}", a.dim()),
    }
}

fn assert_close(actual: &Matrix, expected: &Matrix, what: &str) {
    let diff = max_abs_diff(actual, expected).expect("shape mismatch");
    assert!(diff < PROPERTY_TOLERANCE, "{what}: max deviation {diff}");
}

/// A * P * A == A and P * A * P == P for wide, tall and square inputs
#[test]
fn test_moore_penrose_identities() {
    let mut rng = StdRng::seed_from_u64(42);
    let shapes = [(1, 1), (1, 4), (4, 1), (3, 3), (3, 7), (7, 3), (5, 9), (9, 5), (12, 12)];

    for &(m, n) in &shapes {
        let a = random_matrix(&mut rng, m, n);
        let p = solve(&a, Engine::Sequential);
        assert_eq!(p.dim(), (n, m));

        let ap = multiply(Engine::Sequential, &a, &p).unwrap();
        let pa = multiply(Engine::Sequential, &p, &a).unwrap();
        let apa = multiply(Engine::Sequential, &ap, &a).unwrap();
        let pap = multiply(Engine::Sequential, &pa, &p).unwrap();

        assert_close(&apa, &a, &format!("A*P*A for {m}x{n}"));
        assert_close(&pap, &p, &format!("P*A*P for {m}x{n}"));

        // A*P and P*A are symmetric projectors
        assert_close(&transpose(Engine::Sequential, &ap), &ap, "A*P symmetry");
        assert_close(&transpose(Engine::Sequential, &pa), &pa, "P*A symmetry");
    }
}

/// Wide full-row-rank input: A * P is the identity
#[test]
fn test_right_inverse_property() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_matrix(&mut rng, 4, 10);
    let p = solve(&a, Engine::Parallel);
    let ap = multiply(Engine::Sequential, &a, &p).unwrap();
    assert_close(&ap, &Matrix::eye(4), "A*P");
}

/// Tall full-column-rank input: P * A is the identity
#[test]
fn test_left_inverse_property() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_matrix(&mut rng, 10, 4);
    let p = solve(&a, Engine::Parallel);
    let pa = multiply(Engine::Sequential, &p, &a).unwrap();
    assert_close(&pa, &Matrix::eye(4), "P*A");
}

/// Partitioning rows across workers must not change a single bit
#[test]
fn test_engines_agree() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &(m, n) in &[(6, 6), (8, 30), (30, 8), (64, 40)] {
        let a = random_matrix(&mut rng, m, n);
        let seq = solve(&a, Engine::Sequential);
        let par = solve(&a, Engine::Parallel);
        assert_eq!(seq, par, "engines differ for {m}x{n}");
    }
}

#[test]
fn test_double_transpose_exact() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(&mut rng, 13, 29);
    for engine in [Engine::Sequential, Engine::Parallel] {
        assert_eq!(transpose(engine, &transpose(engine, &a)), a);
    }
}

#[test]
fn test_scenario_identity() {
    let a = io::parse_matrix("2 2\n1 0\n0 1\n", 100).unwrap();
    let outcome = pseudoinverse(&a, Engine::Sequential, &PinvConfig::default()).unwrap();
    assert_eq!(
        io::format_outcome(&outcome).unwrap(),
        "R\n1.000000 0.000000\n0.000000 1.000000\n"
    );
}

#[test]
fn test_scenario_singular() {
    let a = io::parse_matrix("2 2\n1 2\n2 4\n", 100).unwrap();
    for engine in [Engine::Sequential, Engine::Parallel] {
        let outcome = pseudoinverse(&a, engine, &PinvConfig::default()).unwrap();
        assert_eq!(io::format_outcome(&outcome).unwrap(), "-1\n");
    }
}

#[test]
fn test_scenario_row_vector() {
    let a = io::parse_matrix("1 3\n1 2 3\n", 100).unwrap();
    let outcome = pseudoinverse(&a, Engine::Sequential, &PinvConfig::default()).unwrap();
    assert_eq!(outcome.tag(), Some('R'));

    let p = outcome.matrix().unwrap();
    assert_eq!(p.dim(), (3, 1));
    let ap = multiply(Engine::Sequential, &a, p).unwrap();
    assert!((ap[[0, 0]] - 1.0).abs() < PROPERTY_TOLERANCE);
    assert_eq!(
        io::format_outcome(&outcome).unwrap(),
        "R\n0.071429\n0.142857\n0.214286\n"
    );
}

/// Rank-deficient tall input is reported singular on the left branch
#[test]
fn test_rank_deficient_tall_is_singular() {
    let a = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
    let outcome = pseudoinverse(&a, Engine::Parallel, &PinvConfig::default()).unwrap();
    assert!(outcome.is_singular());
    assert_eq!(outcome.branch(), pinv_rs::Branch::Left);
}
