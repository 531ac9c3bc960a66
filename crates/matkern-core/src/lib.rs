//! `matkern-core` — dense reference linear-algebra kernels.
//!
//! Provides a row-major [`Matrix`] container and the classic small-matrix
//! routines: product, dot product, cofactor determinant, two inverse
//! strategies, unpivoted LU, and a partial-pivoting linear solver.
//!
//! # Design
//!
//! - Correctness first: every kernel is the textbook algorithm with a fixed
//!   evaluation order, meant as a reference rather than a fast path.
//! - Generic over `f32` / `f64` via the [`Scalar`] / [`Float`] traits.
//! - Pure functions: inputs are borrowed and never mutated, results are
//!   freshly allocated, and nothing is shared between calls.
//! - Degenerate inputs surface as [`CoreError`] values; numeric thresholds
//!   live in [`Tolerances`].
//! - Diagnostics go through the `log` facade; no logger is installed here.

pub mod config;
pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use config::Tolerances;
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use matkern_core::prelude::*;`
pub mod prelude {
    pub use crate::config::Tolerances;
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{
        LuDecomposition, determinant, dot, inverse_via_cofactors, inverse_via_elimination, lu,
        multiply, solve,
    };
    pub use crate::matrix::Matrix;
}
