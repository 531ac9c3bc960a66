//! Dense linear algebra kernels.
//!
//! All routines are implemented from scratch as reference code: plain loops,
//! fixed accumulation order, no blocking or SIMD.
//!
//! | Operation | Function | Cost | Fails with |
//! |-----------|----------|------|------------|
//! | product | [`multiply`] | O(mnk) | `DimensionMismatch` |
//! | inner product | [`dot`] | O(n) | `DimensionMismatch` |
//! | determinant | [`determinant`] | O(n!) | `NotSquare`, `TooLarge` |
//! | inverse, Gauss-Jordan | [`inverse_via_elimination`] | O(n^3) | `NotSquare`, `SingularMatrix` |
//! | inverse, adjugate | [`inverse_via_cofactors`] | O(n^2 (n-1)!) | `NotSquare`, `SingularMatrix`, `TooLarge` |
//! | LU, Doolittle | [`lu`] | O(n^3) | `NotSquare`, `DecompositionFailed` |
//! | solve `Ax = b` | [`solve`] | O(n^3) | `NotSquare`, `DimensionMismatch`, `SingularMatrix` |
//!
//! The two inverse routines are deliberately separate strategies. The
//! elimination inverse and LU never exchange rows, so both fail on a zero
//! diagonal entry that a pivoting method would step around; only [`solve`]
//! pivots.

pub mod cofactor;
pub mod decomp;
pub mod det;
pub mod elimination;
pub mod ops;
pub mod solve;

pub use cofactor::{
    adjugate, adjugate_with, cofactor_matrix, cofactor_matrix_with, inverse_via_cofactors,
    inverse_via_cofactors_with,
};
pub use decomp::{LuDecomposition, lu};
pub use det::{determinant, determinant_with};
pub use elimination::{inverse_via_elimination, inverse_via_elimination_with};
pub use ops::{dot, multiply};
pub use solve::{solve, solve_with};
