//! LU decomposition without pivoting (Doolittle).
//!
//! Decomposes a square matrix `A` into `A = LU` where:
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! No row exchanges are made, so a zero on the working diagonal is fatal
//! even when `A` is invertible (e.g. `[[0, 1], [1, 0]]`). That failure is
//! reported as [`CoreError::DecompositionFailed`]; there is no pivoted
//! fallback.

use log::{debug, trace};

use crate::Float;
use crate::config::Tolerances;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Result of an unpivoted LU decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T: Float> {
    /// Unit lower triangular factor.
    l: Matrix<T>,
    /// Upper triangular factor.
    u: Matrix<T>,
}

impl<T: Float> LuDecomposition<T> {
    /// Perform Doolittle LU decomposition on a square matrix.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// # use matkern_core::linalg::decomp::LuDecomposition;
    /// let a = Matrix::from_rows(&[[4.0_f64, 3.0], [6.0, 3.0]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.l().as_slice(), &[1.0, 0.0, 1.5, 1.0]);
    /// assert_eq!(lu.u().as_slice(), &[4.0, 3.0, 0.0, -1.5]);
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        Self::decompose_with(a, &Tolerances::default())
    }

    /// [`decompose`](Self::decompose) with an explicit zero-pivot tolerance.
    pub fn decompose_with(a: &Matrix<T>, tol: &Tolerances) -> Result<Self> {
        tol.validate()?;
        let n = a.square_dim()?;
        trace!("lu: Doolittle decomposition of a {n}x{n} matrix");

        let mut l = Matrix::identity(n)?;
        let mut u = Matrix::zeros(n, n)?;

        for i in 0..n {
            // Row i of U.
            for k in i..n {
                let mut sum = T::zero();
                for m in 0..i {
                    sum += l[(i, m)] * u[(m, k)];
                }
                u[(i, k)] = a[(i, k)] - sum;
            }

            let pivot = u[(i, i)];
            if tol.is_zero_pivot(pivot) {
                debug!("lu: zero pivot {} at row {i}", pivot.to_f64());
                return Err(CoreError::DecompositionFailed { pivot: i });
            }

            // Column i of L below the diagonal.
            for r in (i + 1)..n {
                let mut sum = T::zero();
                for m in 0..i {
                    sum += l[(r, m)] * u[(m, i)];
                }
                l[(r, i)] = (a[(r, i)] - sum) / pivot;
            }
        }

        Ok(Self { l, u })
    }

    /// The unit lower triangular factor `L`.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper triangular factor `U`.
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Consume the decomposition and return `(L, U)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.l, self.u)
    }

    /// Determinant of `A`, the product of `U`'s diagonal.
    pub fn determinant(&self) -> T {
        (0..self.u.rows()).fold(T::one(), |acc, i| acc * self.u[(i, i)])
    }
}

/// Decompose `a` into `(L, U)` with `a = L * U`.
///
/// Shorthand for [`LuDecomposition::decompose`] followed by
/// [`LuDecomposition::into_parts`].
pub fn lu<T: Float>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>)> {
    Ok(LuDecomposition::decompose(a)?.into_parts())
}
