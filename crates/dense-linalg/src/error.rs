//! Error types for matrix and vector operations.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Errors that can occur when combining or decomposing matrices and vectors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Two matrices have incompatible shapes for the requested operation.
    ///
    /// Shapes are reported as `(width, height)`.
    #[error("shape mismatch in {op}: lhs is {}x{}, rhs is {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// A square-only operation was invoked on a non-square matrix.
    #[error("{op} requires a square matrix, got {width}x{height}")]
    NonSquare {
        op: &'static str,
        width: usize,
        height: usize,
    },

    /// The determinant is exactly zero, so no inverse exists.
    #[error("singular matrix: {op} is not possible because the determinant is zero")]
    Singular { op: &'static str },

    /// Two vectors have different dimensions.
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: usize,
        rhs: usize,
    },

    /// A fixed-dimension vector was built from the wrong number of components.
    #[error("cannot build a {expected}-dimensional vector from {found} components")]
    Construction { expected: usize, found: usize },

    /// A 1-indexed row/column argument lies outside the matrix.
    #[error("index ({row}, {col}) is out of bounds for a {width}x{height} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// The input buffer cannot form a rectangular grid.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Invalid input layout when constructing a matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A flat buffer whose length is not `rows * cols`.
    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    BufferLength { rows: usize, cols: usize, len: usize },

    /// Nested input where one line has a different length from the first.
    #[error("ragged input: line {index} has {found} entries, expected {expected}")]
    Ragged {
        index: usize,
        expected: usize,
        found: usize,
    },
}
