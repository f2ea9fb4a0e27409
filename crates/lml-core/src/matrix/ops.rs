//! Arithmetic on [`Matrix`].
//!
//! The checked methods (`add_checked`, `sub_checked`, `matmul`) are the
//! fallible API. The operator impls are sugar that panics on a shape
//! mismatch:
//! - `&Matrix op &Matrix` for `+`, `-` (element-wise) and `*` (matrix product)
//! - `&Matrix op f64` for `+`, `-`, `*`, `/` (broadcast scalar)
//! - `-&Matrix`

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{MatrixError, Result};
use crate::linalg::blas::gemm;

use super::{Matrix, ensure_square};

// ======================================================================
// Checked arithmetic
// ======================================================================

impl Matrix {
    /// Element-wise sum, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a + b)
            .map_err(|e| rename_op(e, "add"))
    }

    /// Element-wise difference, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_map(other, |a, b| a - b)
            .map_err(|e| rename_op(e, "sub"))
    }

    /// Matrix product `self · other`.
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        let mut c = Matrix::zeros(self.rows, other.cols);
        gemm(1.0, self, other, 0.0, &mut c)?;
        Ok(c)
    }

    /// Copy with every element multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Copy with `k` added to every element.
    pub fn shifted(&self, k: f64) -> Matrix {
        self.map(|x| x + k)
    }

    /// Sum of the diagonal of a square matrix.
    pub fn trace(&self) -> Result<f64> {
        ensure_square(self, "trace")?;
        Ok(self.diagonal().iter().sum())
    }

    /// Square root of the sum of squared elements.
    pub fn frobenius_norm(&self) -> f64 {
        crate::linalg::blas::nrm2(&self.data)
    }
}

fn rename_op(e: MatrixError, op: &'static str) -> MatrixError {
    match e {
        MatrixError::DimensionMismatch { expected, got, .. } => {
            MatrixError::DimensionMismatch { op, expected, got }
        }
        other => other,
    }
}

// ======================================================================
// &Matrix op &Matrix  (panics on mismatch)
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: &Matrix) -> Matrix {
                match Matrix::$checked(self, rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{e}"),
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, add_checked);
impl_matrix_binop!(Sub, sub, sub_checked);
impl_matrix_binop!(Mul, mul, matmul);

// ======================================================================
// &Matrix op scalar  (broadcast scalar to every element)
// ======================================================================

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<f64> for Matrix {
            type Output = Matrix;

            fn $method(mut self, rhs: f64) -> Matrix {
                self.apply(|a| a $op rhs);
                self
            }
        }
    };
}

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|a| -a)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Matrix {
        self.apply(|a| -a);
        self
    }
}
