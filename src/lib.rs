//! densemat: a small dense integer matrix library.
//!
//! This crate provides [`Matrix`], a row-major 2D container with dimensions
//! fixed at construction time, plus the usual integer linear-algebra
//! operations: element access, elementwise addition and subtraction, scalar
//! and matrix multiplication, transpose, and identity construction.
//!
//! The design favors a small, testable surface: storage is a flat `Vec<T>`
//! indexed as `row * cols + col`, every operation returns a freshly
//! allocated matrix, and shape violations surface as [`MatrixError`] values.
//! The `+`, `-` and `*` operators are panicking conveniences over the
//! checked methods.
pub mod error;
pub mod iter;
pub mod matrix;
pub mod ops;

pub use error::MatrixError;
pub use iter::IndexedIter;
pub use matrix::Matrix;
