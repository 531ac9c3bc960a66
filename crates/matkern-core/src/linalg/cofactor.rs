//! Inverse through the adjugate: `inv(M) = adj(M) / det(M)`.
//!
//! This path computes `n^2` determinants of size `n-1` by cofactor
//! expansion, so it costs roughly `O(n^2 * (n-1)!)` against the `O(n^3)` of
//! [`inverse_via_elimination`](crate::linalg::inverse_via_elimination). In
//! exchange it needs no pivot at all: it succeeds on every matrix whose
//! determinant clears [`Tolerances::singular_threshold`], including those
//! with a zero on the diagonal. The threshold is absolute and does not scale
//! with the entries, so a well-conditioned matrix with tiny entries can still
//! be reported singular.

use log::{debug, trace};

use crate::Float;
use crate::config::Tolerances;
use crate::dtype::alternating_sign;
use crate::error::{CoreError, Result};
use crate::linalg::det::{check_expansion_size, expand};
use crate::matrix::Matrix;

/// Matrix of signed minors: `C[i][j] = (-1)^(i+j) * det(minor(i, j))`.
///
/// The cofactor of a `1 x 1` matrix is `[[1]]`.
pub fn cofactor_matrix<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    cofactor_matrix_with(m, &Tolerances::default())
}

/// [`cofactor_matrix`] with an explicit size ceiling.
pub fn cofactor_matrix_with<T: Float>(m: &Matrix<T>, tol: &Tolerances) -> Result<Matrix<T>> {
    let n = m.square_dim()?;
    check_expansion_size(n, tol)?;
    cofactors(m)
}

/// Transpose of the cofactor matrix.
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::adjugate;
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(adjugate(&a).unwrap().as_slice(), &[4.0, -2.0, -3.0, 1.0]);
/// ```
pub fn adjugate<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    adjugate_with(m, &Tolerances::default())
}

/// [`adjugate`] with an explicit size ceiling.
pub fn adjugate_with<T: Float>(m: &Matrix<T>, tol: &Tolerances) -> Result<Matrix<T>> {
    Ok(cofactor_matrix_with(m, tol)?.transpose())
}

/// Inverse of a square matrix via cofactors and the adjugate.
///
/// Fails with [`CoreError::SingularMatrix`] when `|det(M)|` is below
/// [`Tolerances::singular_threshold`] (default `1e-10`).
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::inverse_via_cofactors;
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = inverse_via_cofactors(&a).unwrap();
/// assert_eq!(inv.as_slice(), &[-2.0, 1.0, 1.5, -0.5]);
/// ```
pub fn inverse_via_cofactors<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    inverse_via_cofactors_with(m, &Tolerances::default())
}

/// [`inverse_via_cofactors`] with explicit tolerances.
pub fn inverse_via_cofactors_with<T: Float>(
    m: &Matrix<T>,
    tol: &Tolerances,
) -> Result<Matrix<T>> {
    let n = m.square_dim()?;
    check_expansion_size(n, tol)?;
    trace!("inverse_via_cofactors: {n}x{n}");

    let det = expand(m)?;
    if tol.is_singular_det(det) {
        debug!(
            "inverse_via_cofactors: |det| = {} below threshold {}",
            det.abs().to_f64(),
            tol.singular_threshold
        );
        return Err(CoreError::SingularMatrix { pivot: None });
    }

    let adj = cofactors(m)?.transpose();
    Ok(adj.map(|v| v / det))
}

fn cofactors<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    let n = m.rows();
    if n == 1 {
        return Matrix::identity(1);
    }
    let mut c = Matrix::zeros(n, n)?;
    for i in 0..n {
        for j in 0..n {
            c[(i, j)] = alternating_sign::<T>(i + j) * expand(&m.minor(i, j)?)?;
        }
    }
    Ok(c)
}
