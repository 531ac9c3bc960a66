//! Matrix product and vector inner product.
//!
//! Both are reference kernels: straight loops with a fixed accumulation
//! order and no blocking, so results are reproducible across platforms.

use log::trace;

use crate::Float;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Inner (dot) product of two vectors: `sum(a_i * b_i)`, accumulated left to
/// right.
///
/// ```
/// # use matkern_core::linalg::dot;
/// let d = dot(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert!((d - 32.0).abs() < 1e-12);
/// ```
pub fn dot<T: Float>(a: &[T], b: &[T]) -> Result<T> {
    if a.len() != b.len() {
        return Err(CoreError::DimensionMismatch {
            expected: vec![a.len()],
            got: vec![b.len()],
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Matrix product `A * B`.
///
/// `A` must be `m x k` and `B` must be `k x n`; the result is `m x n`.
/// Each entry is accumulated over the contraction index in increasing order,
/// with rows in the outer loop and columns in the middle loop.
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::multiply;
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0_f64, 6.0], [7.0, 8.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let (m, k) = a.shape();
    let (k2, n) = b.shape();
    if k != k2 {
        return Err(CoreError::DimensionMismatch {
            expected: vec![k, n],
            got: vec![k2, n],
        });
    }
    trace!("multiply: [{m}x{k}] * [{k2}x{n}]");

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut c = vec![T::zero(); m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum += a_data[i * k + p] * b_data[p * n + j];
            }
            c[i * n + j] = sum;
        }
    }

    Matrix::from_vec(c, m, n)
}
