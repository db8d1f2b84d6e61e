//! The error type shared by every engine in the crate.

use thiserror::Error;

/// Errors surfaced by matrix and graph operations.
///
/// Unreachable vertices are not an error: path queries return `None` and distance matrices hold
/// `f64::INFINITY` for those pairs.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The matrix doesn't have as many columns as it has rows.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// The operands of a binary operation don't share the same shape.
    #[error("matrix dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The operation needs at least one row and one column.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// A vertex index doesn't address a row of the matrix.
    #[error("vertex {vertex} is out of bounds for a graph of {len} vertices")]
    VertexOutOfBounds { vertex: usize, len: usize },

    /// The determinant is zero or elimination hit a zero pivot.
    #[error("matrix is not invertible")]
    NotInvertible,

    /// A scalar argument is outside of its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
