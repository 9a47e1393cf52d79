use std::error::Error;
use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Precondition failures reported by `Matrix` operations.
///
/// Shapes are `(rows, cols)` tuples. Dimensions and indices supplied by the
/// caller are kept as `i128` so a negative request is reported as given.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Constructor called with a non-positive row or column count.
    InvalidDimensions { rows: i128, cols: i128 },
    /// Buffer length does not match `rows * cols`.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// Element or minor index outside `[0, rows) x [0, cols)`.
    IndexOutOfRange {
        row: i128,
        col: i128,
        rows: usize,
        cols: usize,
    },
    /// Elementwise operation or comparison between differently shaped matrices.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Product where the left column count differs from the right row count.
    DimensionIncompatible {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Determinant, cofactors or inverse of a non-square (or empty) matrix.
    NotSquare { rows: usize, cols: usize },
    /// Minor of a non-square matrix or one of order below 2.
    InvalidShapeForMinor { rows: usize, cols: usize },
    /// Inverse of a matrix whose determinant is below the singularity threshold.
    SingularMatrix { determinant: f64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid matrix dimensions ({}, {}): rows and cols must be positive",
                rows, cols
            ),
            MatrixError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for a {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::DimensionMismatch { left, right } => write!(
                f,
                "matrices must have the same dimensions: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::DimensionIncompatible { left, right } => write!(
                f,
                "cannot multiply {}x{} by {}x{}: left cols must equal right rows",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            MatrixError::InvalidShapeForMinor { rows, cols } => write!(
                f,
                "minor requires a square matrix of order at least 2, got {}x{}",
                rows, cols
            ),
            MatrixError::SingularMatrix { determinant } => write!(
                f,
                "matrix is singular (determinant {}) and cannot be inverted",
                determinant
            ),
        }
    }
}

impl Error for MatrixError {}
