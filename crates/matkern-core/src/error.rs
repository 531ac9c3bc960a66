use thiserror::Error;

/// All errors returned by `matkern-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A square-only operation received a rectangular matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A zero pivot or a near-zero determinant was encountered.
    ///
    /// `pivot` names the elimination step that failed; it is `None` when the
    /// failure came from the determinant check of the cofactor inverse.
    #[error("singular matrix{}", pivot_suffix(.pivot))]
    SingularMatrix { pivot: Option<usize> },

    /// Unpivoted LU hit a zero pivot.
    #[error("cannot perform LU decomposition: zero pivot at row {pivot}")]
    DecompositionFailed { pivot: usize },

    /// A matrix could not be built from the given data.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// An element index lies outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Cofactor expansion refused a matrix above the configured ceiling.
    #[error("cofactor expansion of a {n}x{n} matrix exceeds the limit of {max}")]
    TooLarge { n: usize, max: usize },

    /// A tolerance setting is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}

fn pivot_suffix(pivot: &Option<usize>) -> String {
    match pivot {
        Some(p) => format!(" (zero pivot at step {p})"),
        None => String::new(),
    }
}

/// Convenience alias used throughout `matkern-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
