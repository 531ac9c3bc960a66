//! Dense rectangular matrix with fixed shape and contiguous row-major storage.
//!
//! [`Matrix`] is the only container the kernels operate on. Vectors are plain
//! slices on input and `Vec<T>` on output.

mod create;
mod display;
mod shape;

use core::ops::{Index, IndexMut};

use crate::Float;
use crate::error::{CoreError, Result};

/// A dense `rows x cols` matrix.
///
/// Data is stored contiguously in row-major order. The matrix owns its data,
/// cloning performs a deep copy, and the shape never changes after
/// construction. Both dimensions are at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Float> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from row-major data.
    ///
    /// Returns an error if either dimension is zero or if
    /// `rows * cols != data.len()`.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let m = Matrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if element_count(rows, cols)? != data.len() {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                reason: "shape product does not match data length",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a slice of rows.
    ///
    /// Every row must have the same, non-zero length.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.row(1), &[3.0, 4.0]);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != n_cols) {
            return Err(CoreError::InvalidShape {
                rows: n_rows,
                cols: n_cols,
                reason: "rows have different lengths",
            });
        }
        let data = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Self::from_vec(data, n_rows, n_cols)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let flat = self.flat_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Apply a function to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Largest absolute element-wise difference to `other`.
    ///
    /// Returns `DimensionMismatch` if the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix<T>) -> Result<T> {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![other.rows, other.cols],
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| {
                let d = (a - b).abs();
                if d > acc { d } else { acc }
            }))
    }

    /// Return `n` if the matrix is `n x n`, else `NotSquare`.
    pub(crate) fn square_dim(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }
}

/// `rows * cols`, rejecting empty and overflowing shapes.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(CoreError::InvalidShape {
            rows,
            cols,
            reason: "matrix dimensions must be at least 1",
        });
    }
    rows.checked_mul(cols).ok_or(CoreError::InvalidShape {
        rows,
        cols,
        reason: "element count overflows usize",
    })
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let r = Matrix::from_vec(vec![1.0, 2.0, 3.0], 2, 3);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_vec_empty_dimension() {
        assert!(Matrix::<f64>::from_vec(vec![], 0, 3).is_err());
        assert!(Matrix::<f64>::from_vec(vec![], 2, 0).is_err());
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let r = Matrix::<f64>::from_vec(vec![1.0], usize::MAX, 2);
        assert!(matches!(
            r,
            Err(CoreError::InvalidShape {
                reason: "element count overflows usize",
                ..
            })
        ));
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(r, Err(CoreError::InvalidShape { .. })));
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: [[f64; 2]; 0] = [];
        assert!(Matrix::from_rows(&rows).is_err());
        assert!(Matrix::<f64>::from_rows(&[Vec::new()]).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        m.set(0, 1, 99.0).unwrap();
        assert_eq!(m[(0, 1)], 99.0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert!(matches!(
            m.get(2, 0),
            Err(CoreError::IndexOutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(m.get(0, 2).is_err());
    }

    #[test]
    fn test_map() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let m2 = m.map(|x| x * 10.0);
        assert_eq!(m2.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(m2.shape(), (2, 2));
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0, 2.5], [2.0, 4.0]]).unwrap();
        assert_eq!(a.max_abs_diff(&b).unwrap(), 1.0);
        let c = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        assert!(a.max_abs_diff(&c).is_err());
    }

    #[test]
    fn test_square_dim() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(a.square_dim().unwrap(), 2);
        let b = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        assert_eq!(
            b.square_dim(),
            Err(CoreError::NotSquare { rows: 1, cols: 2 })
        );
    }
}
