use std::ops::{Add, Mul, Sub};

use num_traits::PrimInt;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl<T: Copy> Matrix<T> {
    /// Returns the transpose: a `(ncols, nrows)` matrix with
    /// `out[(j, i)] == self[(i, j)]`.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * cols);
        for col in 0..cols {
            for row in 0..rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix::from_parts(cols, rows, data)
    }
}

impl<T: PrimInt> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::IncompatibleShapes {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(())
    }

    // Shapes must already be equal.
    fn zip_with<F>(&self, rhs: &Self, f: F) -> Self
    where
        F: Fn(T, T) -> T,
    {
        let data = self
            .as_slice()
            .iter()
            .zip(rhs.as_slice().iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_parts(self.nrows(), self.ncols(), data)
    }

    // Inner dimensions must already match.
    fn mul_dense(&self, rhs: &Self) -> Self {
        let (rows, inner) = self.shape();
        let cols = rhs.ncols();
        let mut mat = Matrix::from_parts(rows, cols, vec![T::zero(); rows * cols]);
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc = acc + self[(i, k)] * rhs[(k, j)];
                }
                mat[(i, j)] = acc;
            }
        }
        mat
    }

    /// Elementwise sum. Requires equal shapes; neither operand is mutated.
    pub fn add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Elementwise difference. Requires equal shapes.
    pub fn subtract(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Multiplies every element by `k`.
    pub fn scalar_mul(&self, k: T) -> Self {
        self.mapv(|&v| v * k)
    }

    /// Matrix product. Requires `self.ncols() == rhs.nrows()`; the result has
    /// shape `(self.nrows(), rhs.ncols())`.
    ///
    /// Accumulation uses `T`'s native fixed-width arithmetic: sums that leave
    /// `T`'s range overflow exactly as the host type does (a panic in debug
    /// builds, a two's-complement wrap in release builds). Pick a wider
    /// element type such as `i128` when more headroom is needed.
    pub fn dot(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::IncompatibleShapes {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        Ok(self.mul_dense(rhs))
    }
}

impl<'a, 'b, T: PrimInt> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Panicking alias for [`Matrix::add`].
    fn add(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix addition requires equal shapes"
        );
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a, 'b, T: PrimInt> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Panicking alias for [`Matrix::subtract`].
    fn sub(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix subtraction requires equal shapes"
        );
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<'a, 'b, T: PrimInt> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Panicking alias for [`Matrix::dot`].
    fn mul(self, rhs: &'b Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "matrix product requires the left column count to match the right row count"
        );
        self.mul_dense(rhs)
    }
}
