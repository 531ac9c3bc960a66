//! Common test utilities
#![allow(dead_code)]

use matkern_core::Matrix;
use proptest::prelude::*;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a matrix from nested row literals.
pub fn mat(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).expect("test matrix must be rectangular")
}

/// Assert two matrices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose(a: &Matrix<f64>, b: &Matrix<f64>, rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    assert_allclose_f64(a.as_slice(), b.as_slice(), rtol, atol, msg);
}

/// Assert two f64 slices are close within tolerance
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// A `rows x cols` matrix with entries drawn from `-10..10`.
pub fn any_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    prop::collection::vec(-10.0_f64..10.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(data, rows, cols).unwrap())
}

/// A strictly diagonally dominant `n x n` matrix, `1 <= n <= max_n`.
///
/// Such matrices are invertible and every unpivoted elimination pivot is
/// non-zero, so all kernels accept them.
pub fn dominant_square(max_n: usize) -> impl Strategy<Value = Matrix<f64>> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec(-1.0_f64..1.0, n * n).prop_map(move |data| {
            let mut m = Matrix::from_vec(data, n, n).unwrap();
            for i in 0..n {
                let d = m[(i, i)];
                m[(i, i)] = d + if d >= 0.0 { n as f64 } else { -(n as f64) };
            }
            m
        })
    })
}
