//! Linear system solve by Gaussian elimination with partial pivoting.

use log::{debug, trace};

use crate::Float;
use crate::config::Tolerances;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Solve `A x = b` for a square matrix `A`.
///
/// Works on a private augmented copy `[A | b]`; neither input is modified.
/// At each step the row with the largest absolute value in the pivot column
/// (first one on ties) is swapped into place. If even that pivot is zero the
/// system is reported as [`CoreError::SingularMatrix`].
///
/// ```
/// # use matkern_core::Matrix;
/// # use matkern_core::linalg::solve;
/// let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 3.0]]).unwrap();
/// let x = solve(&a, &[3.0, 5.0]).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn solve<T: Float>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>> {
    solve_with(a, b, &Tolerances::default())
}

/// [`solve`] with an explicit zero-pivot tolerance.
pub fn solve_with<T: Float>(a: &Matrix<T>, b: &[T], tol: &Tolerances) -> Result<Vec<T>> {
    tol.validate()?;
    let n = a.square_dim()?;
    if b.len() != n {
        return Err(CoreError::DimensionMismatch {
            expected: vec![n],
            got: vec![b.len()],
        });
    }
    trace!("solve: {n}x{n} system");

    let rhs = Matrix::from_vec(b.to_vec(), n, 1)?;
    let mut aug = a.augment(&rhs)?;

    // Forward elimination.
    for i in 0..n {
        let mut max_row = i;
        let mut max_val = aug[(i, i)].abs();
        for r in (i + 1)..n {
            let val = aug[(r, i)].abs();
            if val > max_val {
                max_val = val;
                max_row = r;
            }
        }
        aug.swap_rows(i, max_row);

        let pivot = aug[(i, i)];
        if tol.is_zero_pivot(pivot) {
            debug!("solve: zero pivot {} at step {i}", pivot.to_f64());
            return Err(CoreError::SingularMatrix { pivot: Some(i) });
        }

        for j in (i + 1)..n {
            let factor = aug[(j, i)] / pivot;
            for k in i..=n {
                let delta = factor * aug[(i, k)];
                aug[(j, k)] -= delta;
            }
        }
    }

    // Back substitution. x[j] for j > i is read while x[i] is written.
    let mut x = vec![T::zero(); n];
    #[allow(clippy::needless_range_loop)]
    for i in (0..n).rev() {
        let mut acc = aug[(i, n)];
        for j in (i + 1)..n {
            acc -= aug[(i, j)] * x[j];
        }
        x[i] = acc / aug[(i, i)];
    }

    Ok(x)
}
