//! Shape manipulation: transpose, minors, and column-wise augmentation.

use crate::Float;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Float> Matrix<T> {
    /// Transpose the matrix, returning a new `cols x rows` matrix.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 1));
    /// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![T::zero(); self.data.len()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        Matrix {
            data,
            rows: cols,
            cols: rows,
        }
    }

    /// The `(rows-1) x (cols-1)` submatrix left after deleting `row` and `col`.
    ///
    /// Fails with `InvalidShape` when the result would be empty, and with
    /// `IndexOutOfBounds` when `row` or `col` lies outside the matrix.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    /// let minor = m.minor(0, 1).unwrap();
    /// assert_eq!(minor.as_slice(), &[4.0, 6.0, 7.0, 9.0]);
    /// ```
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 || self.cols == 1 {
            return Err(CoreError::InvalidShape {
                rows: self.rows - 1,
                cols: self.cols - 1,
                reason: "minor of a single row or column is empty",
            });
        }

        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for r in (0..self.rows).filter(|&r| r != row) {
            data.extend(
                self.row(r)
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, &v)| v),
            );
        }

        Ok(Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }

    /// Concatenate `other` to the right of `self`: `[self | other]`.
    ///
    /// Both matrices must have the same number of rows.
    pub fn augment(&self, other: &Matrix<T>) -> Result<Self> {
        if self.rows != other.rows {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.rows, other.cols],
                got: vec![other.rows, other.cols],
            });
        }
        let cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
            data.extend_from_slice(other.row(r));
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }

    /// Copy out columns `start..cols` as a new matrix.
    pub fn columns_from(&self, start: usize) -> Result<Self> {
        if start >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row: 0,
                col: start,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let cols = self.cols - start;
        let mut data = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            data.extend_from_slice(&self.row(r)[start..]);
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols,
        })
    }

    /// Swap rows `a` and `b` in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }
}
