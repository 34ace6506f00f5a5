use std::error::Error;
use std::fmt;

/// Errors reported by matrix construction, element access and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A row or column count given at construction was zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// A buffer handed to `from_shape_vec` does not match the requested shape.
    BufferMismatch { rows: usize, cols: usize, len: usize },
    /// A row or column index lies outside the matrix shape.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Two shapes do not satisfy the algebraic requirement of an operation:
    /// equal shape for addition and subtraction, matching inner dimension
    /// for the matrix product.
    IncompatibleShapes {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "matrix dimensions must be nonzero, got {}x{}", rows, cols)
            }
            MatrixError::BufferMismatch { rows, cols, len } => {
                write!(
                    f,
                    "invalid shape ({}, {}) for buffer of length {}",
                    rows, cols, len
                )
            }
            MatrixError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({}, {}) out of bounds for {}x{} matrix",
                    row, col, rows, cols
                )
            }
            MatrixError::IncompatibleShapes { left, right } => {
                write!(
                    f,
                    "incompatible shapes {}x{} and {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
        }
    }
}

impl Error for MatrixError {}
