use thiserror::Error;

/// All errors returned by `lml-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand shapes are incompatible with the requested operation.
    ///
    /// For operations with a lower bound rather than an exact shape (QR needs
    /// `rows >= cols`), `expected` is the smallest acceptable shape.
    #[error("dimension mismatch in {op}: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Elimination hit a pivot whose magnitude is below the pivot tolerance.
    #[error("singular matrix: pivot {pivot} is zero within tolerance")]
    SingularMatrix { pivot: usize },

    /// Gram-Schmidt left a near-zero residual for a column.
    #[error("rank-deficient matrix: column {column} is linearly dependent on earlier columns")]
    RankDeficient { column: usize },

    /// An element or row/column index is out of bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The requested shape would break the non-empty rectangular layout.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Convenience alias used throughout `lml-core`.
pub type Result<T> = std::result::Result<T, MatrixError>;
