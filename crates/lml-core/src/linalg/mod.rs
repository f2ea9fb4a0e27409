//! Linear algebra on [`Matrix`].
//!
//! All routines are implemented from scratch, no BLAS/LAPACK bindings:
//!
//! | Operation   | Entry point                    | Built on             |
//! |-------------|--------------------------------|----------------------|
//! | determinant | [`det`] / [`det_with`]         | pivoted elimination  |
//! | LU          | [`lu_decompose`]               | Doolittle            |
//! | QR          | [`qr_decompose`]               | modified Gram-Schmidt|
//! | solve       | [`solve`] / [`solve_with`]     | LU + substitution    |
//! | inverse     | [`inverse`] / [`inverse_with`] | `solve(A, I)`        |
//! | least squares | [`lstsq`]                    | QR                   |
//!
//! Every `*_with` variant takes a [`DecompConfig`]; the plain variants use
//! its defaults. Inputs are never mutated; results are newly allocated.

pub mod blas;
pub mod decomp;
mod det;

pub use decomp::{LuDecomposition, QrDecomposition, lstsq};
pub use det::{det, det_with};

use crate::config::DecompConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, ensure_square};

/// LU-decompose a square matrix (no pivoting). See [`LuDecomposition`].
pub fn lu_decompose(a: &Matrix) -> Result<LuDecomposition> {
    LuDecomposition::decompose(a)
}

/// QR-decompose a matrix with `rows >= cols`. See [`QrDecomposition`].
pub fn qr_decompose(a: &Matrix) -> Result<QrDecomposition> {
    QrDecomposition::decompose(a)
}

/// Solve `A·X = B` for a square `A`.
///
/// Shapes are checked before any elimination: `A` must be square and `B`
/// must have as many rows as `A`. A singular `A` yields the
/// `SingularMatrix` error from the LU step unchanged.
///
/// ```
/// # use lml_core::Matrix;
/// # use lml_core::linalg;
/// let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
/// let b = Matrix::from_vec(vec![5.0, 6.0], 2, 1).unwrap();
/// let x = linalg::solve(&a, &b).unwrap();
/// assert!((x[(0, 0)] - 2.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 1.0).abs() < 1e-10);
/// ```
pub fn solve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    solve_with(a, b, &DecompConfig::default())
}

/// [`solve`] with explicit tolerances and pivoting policy.
pub fn solve_with(a: &Matrix, b: &Matrix, config: &DecompConfig) -> Result<Matrix> {
    let n = ensure_square(a, "solve")?;
    if b.rows() != n {
        return Err(MatrixError::DimensionMismatch {
            op: "solve",
            expected: (n, b.cols()),
            got: b.shape(),
        });
    }
    LuDecomposition::decompose_with(a, config)?.solve(b)
}

/// Inverse of a square, non-singular matrix, computed as `solve(A, I)`.
///
/// ```
/// # use lml_core::Matrix;
/// # use lml_core::linalg;
/// let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
/// let inv = linalg::inverse(&a).unwrap();
/// let eye = a.matmul(&inv).unwrap();
/// assert!((eye[(0, 0)] - 1.0).abs() < 1e-10);
/// assert!(eye[(0, 1)].abs() < 1e-10);
/// ```
pub fn inverse(a: &Matrix) -> Result<Matrix> {
    inverse_with(a, &DecompConfig::default())
}

/// [`inverse`] with explicit tolerances and pivoting policy.
pub fn inverse_with(a: &Matrix, config: &DecompConfig) -> Result<Matrix> {
    let n = ensure_square(a, "inverse")?;
    solve_with(a, &Matrix::identity(n), config)
}

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl Matrix {
    /// Determinant; see [`det`].
    pub fn det(&self) -> Result<f64> {
        det(self)
    }

    /// Inverse; see [`inverse`].
    pub fn inverse(&self) -> Result<Matrix> {
        inverse(self)
    }

    /// Solve `self · X = b`; see [`solve`].
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        solve(self, b)
    }

    /// LU decomposition; see [`LuDecomposition`].
    pub fn lu(&self) -> Result<LuDecomposition> {
        LuDecomposition::decompose(self)
    }

    /// QR decomposition; see [`QrDecomposition`].
    pub fn qr(&self) -> Result<QrDecomposition> {
        QrDecomposition::decompose(self)
    }
}
