//! Matrix creation functions analogous to `np.zeros`, `np.eye`, etc.

use crate::Float;
use crate::error::Result;

use super::{Matrix, element_count};

impl<T: Float> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, T::zero())
    }

    /// Create a `rows x cols` matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Self::from_vec(vec![value; len], rows, cols)
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use matkern_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }

    /// Build a matrix by evaluating `f(row, col)` for every position.
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> T,
    {
        let len = element_count(rows, cols)?;
        let data = (0..len).map(|k| f(k / cols, k % cols));
        Self::from_vec(data.collect(), rows, cols)
    }
}
