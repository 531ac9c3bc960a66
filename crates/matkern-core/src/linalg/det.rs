//! Determinant by recursive cofactor (Laplace) expansion.
//!
//! This is the textbook definition, not an LU-based determinant: every level
//! of recursion builds `n` minors of size `n-1`, so the cost is `O(n!)`.
//! It is exact in structure and easy to audit, and only practical for small
//! matrices. Inputs larger than [`Tolerances::max_cofactor_dim`] are refused
//! up front with [`CoreError::TooLarge`] rather than left to run for hours.

use log::{debug, trace};

use crate::Float;
use crate::config::Tolerances;
use crate::dtype::alternating_sign;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Determinant of a square matrix, expanding along the first row.
///
/// No pivoting is performed; a matrix whose first row is all zero yields `0`
/// through the expansion itself.
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::determinant;
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(determinant(&a).unwrap(), -2.0);
/// ```
pub fn determinant<T: Float>(m: &Matrix<T>) -> Result<T> {
    determinant_with(m, &Tolerances::default())
}

/// [`determinant`] with an explicit size ceiling.
pub fn determinant_with<T: Float>(m: &Matrix<T>, tol: &Tolerances) -> Result<T> {
    let n = m.square_dim()?;
    check_expansion_size(n, tol)?;
    trace!("determinant: cofactor expansion of a {n}x{n} matrix");
    expand(m)
}

/// Refuse cofactor expansion above the configured ceiling.
pub(crate) fn check_expansion_size(n: usize, tol: &Tolerances) -> Result<()> {
    tol.validate()?;
    if n > tol.max_cofactor_dim {
        debug!(
            "cofactor expansion refused: n = {n} exceeds max_cofactor_dim = {}",
            tol.max_cofactor_dim
        );
        return Err(CoreError::TooLarge {
            n,
            max: tol.max_cofactor_dim,
        });
    }
    Ok(())
}

/// Recursive expansion. `m` is known to be square and within the ceiling.
pub(crate) fn expand<T: Float>(m: &Matrix<T>) -> Result<T> {
    match m.rows() {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        n => {
            let mut det = T::zero();
            for j in 0..n {
                let minor = m.minor(0, j)?;
                det += alternating_sign::<T>(j) * m[(0, j)] * expand(&minor)?;
            }
            Ok(det)
        }
    }
}
