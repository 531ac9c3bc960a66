//! # matkern
//!
//! Dense reference linear algebra in pure Rust.
//!
//! One `use matkern::prelude::*;` gives you the [`Matrix`](core::Matrix)
//! type, matrix product and dot product, the cofactor determinant, both
//! inverse strategies, unpivoted LU, and the partial-pivoting solver.
//!
//! ```
//! use matkern::prelude::*;
//!
//! let a = Matrix::from_rows(&[[2.0_f64, 1.0], [1.0, 3.0]]).unwrap();
//! let x = solve(&a, &[3.0, 5.0]).unwrap();
//! assert!((x[0] - 0.8).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrix container and all kernels |

#[cfg(feature = "core")]
pub use matkern_core as core;

/// Glob-import convenience: `use matkern::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use matkern_core::prelude::*;
}
