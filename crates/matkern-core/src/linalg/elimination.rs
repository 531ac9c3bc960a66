//! Matrix inverse by Gauss-Jordan elimination on `[M | I]`.
//!
//! Rows are never exchanged. The pivot for step `i` is whatever sits at
//! `(i, i)` after the previous steps, so a matrix such as `[[0, 1], [1, 0]]`
//! is reported singular even though it is invertible. Callers that need a
//! robust inverse of such inputs should use [`inverse_via_cofactors`] for
//! small `n`, or solve column by column with [`solve`].
//!
//! [`inverse_via_cofactors`]: crate::linalg::inverse_via_cofactors
//! [`solve`]: crate::linalg::solve

use log::{debug, trace};

use crate::Float;
use crate::config::Tolerances;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Inverse of a square matrix by unpivoted Gauss-Jordan elimination.
///
/// Fails with [`CoreError::SingularMatrix`] as soon as a pivot is zero or so
/// small (subnormal) that its reciprocal overflows, before any division takes
/// place, so dividing by a pivot never puts `inf`/`NaN` into the result.
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::inverse_via_elimination;
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// let inv = inverse_via_elimination(&a).unwrap();
/// assert!((inv[(0, 0)] + 2.0).abs() < 1e-12);
/// assert!((inv[(1, 1)] + 0.5).abs() < 1e-12);
/// ```
pub fn inverse_via_elimination<T: Float>(m: &Matrix<T>) -> Result<Matrix<T>> {
    inverse_via_elimination_with(m, &Tolerances::default())
}

/// [`inverse_via_elimination`] with an explicit zero-pivot tolerance.
pub fn inverse_via_elimination_with<T: Float>(
    m: &Matrix<T>,
    tol: &Tolerances,
) -> Result<Matrix<T>> {
    tol.validate()?;
    let n = m.square_dim()?;
    trace!("inverse_via_elimination: {n}x{n}");

    let mut aug = m.augment(&Matrix::identity(n)?)?;
    let width = 2 * n;

    for i in 0..n {
        let pivot = aug[(i, i)];
        if tol.is_zero_pivot(pivot) {
            debug!(
                "inverse_via_elimination: zero pivot {} at step {i}",
                pivot.to_f64()
            );
            return Err(CoreError::SingularMatrix { pivot: Some(i) });
        }

        // Normalise the pivot row.
        for c in 0..width {
            aug[(i, c)] /= pivot;
        }

        // Clear column i in every other row.
        for j in (0..n).filter(|&j| j != i) {
            let factor = aug[(j, i)];
            for c in 0..width {
                let delta = factor * aug[(i, c)];
                aug[(j, c)] -= delta;
            }
        }
    }

    aug.columns_from(n)
}
