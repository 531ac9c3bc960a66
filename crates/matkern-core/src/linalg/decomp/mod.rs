//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization | Pivoting |
//! |---------------|---------|---------------|----------|
//! | LU            | [`lu`]  | `A = LU`      | none     |

pub mod lu;

pub use lu::{LuDecomposition, lu};
