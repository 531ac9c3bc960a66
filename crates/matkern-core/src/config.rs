//! Numeric tolerances shared by the kernels.
//!
//! Every routine that can fail on a degenerate input has a `*_with` variant
//! taking a [`Tolerances`]; the plain variant uses [`Tolerances::default`].

use serde::{Deserialize, Serialize};

use crate::Float;
use crate::error::{CoreError, Result};

/// Absolute determinant threshold below which the cofactor inverse reports a
/// singular matrix. Fixed and not scaled by the matrix norm.
pub const DEFAULT_SINGULAR_THRESHOLD: f64 = 1e-10;

/// Largest dimension accepted by cofactor expansion (`O(n!)` fan-out).
pub const DEFAULT_MAX_COFACTOR_DIM: usize = 10;

/// Tolerance settings for the elimination, LU and cofactor kernels.
///
/// ```
/// # use matkern_core::config::Tolerances;
/// let tol = Tolerances::default().with_pivot_epsilon(1e-12);
/// assert!(tol.validate().is_ok());
/// assert_eq!(tol.singular_threshold, 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// `|det| < singular_threshold` is treated as singular by the cofactor
    /// inverse.
    pub singular_threshold: f64,

    /// A pivot with `|p| <= pivot_epsilon` is treated as zero by Gauss-Jordan
    /// inversion, the solver, and LU. `0.0` rejects exact zeros, plus pivots
    /// so small (subnormal) that `1/p` overflows.
    pub pivot_epsilon: f64,

    /// Ceiling on `n` for determinant and cofactor inversion.
    pub max_cofactor_dim: usize,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            singular_threshold: DEFAULT_SINGULAR_THRESHOLD,
            pivot_epsilon: 0.0,
            max_cofactor_dim: DEFAULT_MAX_COFACTOR_DIM,
        }
    }
}

impl Tolerances {
    pub fn with_singular_threshold(self, singular_threshold: f64) -> Self {
        Self {
            singular_threshold,
            ..self
        }
    }

    pub fn with_pivot_epsilon(self, pivot_epsilon: f64) -> Self {
        Self {
            pivot_epsilon,
            ..self
        }
    }

    pub fn with_max_cofactor_dim(self, max_cofactor_dim: usize) -> Self {
        Self {
            max_cofactor_dim,
            ..self
        }
    }

    /// Check that every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.singular_threshold.is_finite() || self.singular_threshold < 0.0 {
            return Err(CoreError::InvalidConfig {
                reason: "singular_threshold must be finite and non-negative",
            });
        }
        if !self.pivot_epsilon.is_finite() || self.pivot_epsilon < 0.0 {
            return Err(CoreError::InvalidConfig {
                reason: "pivot_epsilon must be finite and non-negative",
            });
        }
        if self.max_cofactor_dim == 0 {
            return Err(CoreError::InvalidConfig {
                reason: "max_cofactor_dim must be at least 1",
            });
        }
        Ok(())
    }

    /// Whether `pivot` counts as zero under [`pivot_epsilon`](Self::pivot_epsilon).
    ///
    /// A pivot whose reciprocal is not finite (zero, subnormal, or NaN) is
    /// always zero: dividing by it would put `inf`/`NaN` into the result.
    #[inline]
    pub(crate) fn is_zero_pivot<T: Float>(&self, pivot: T) -> bool {
        !pivot.recip().is_finite() || pivot.abs() <= T::from_f64(self.pivot_epsilon)
    }

    /// Whether `det` counts as singular under
    /// [`singular_threshold`](Self::singular_threshold).
    #[inline]
    pub(crate) fn is_singular_det<T: Float>(&self, det: T) -> bool {
        det.is_nan() || det.abs() < T::from_f64(self.singular_threshold)
    }
}
