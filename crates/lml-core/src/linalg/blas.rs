//! BLAS-style kernels used by the arithmetic and decomposition code.
//!
//! Level 1 routines work on plain slices; `gemm` works on [`Matrix`] and
//! validates shapes.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

// ======================================================================
// BLAS Level 1: vector operations, O(n)
// ======================================================================

/// Inner product `sum(x_i * y_i)`.
///
/// # Panics
///
/// Panics if the slices have different lengths.
///
/// ```
/// # use lml_core::linalg::blas::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "dot: length mismatch");
    x.iter().zip(y).fold(0.0, |acc, (&a, &b)| acc + a * b)
}

/// Euclidean norm `sqrt(sum(x_i^2))`.
pub fn nrm2(x: &[f64]) -> f64 {
    x.iter().map(|&v| v * v).sum::<f64>().sqrt()
}

/// `y = alpha * x + y` (in-place update of `y`).
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), y.len(), "axpy: length mismatch");
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi += alpha * xi;
    }
}

// ======================================================================
// BLAS Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// General matrix multiply: `c = alpha * a · b + beta * c`.
///
/// If `beta` is zero, `c` is overwritten (not read).
#[allow(clippy::many_single_char_names)]
pub fn gemm(alpha: f64, a: &Matrix, b: &Matrix, beta: f64, c: &mut Matrix) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();

    if b.rows() != k {
        return Err(MatrixError::DimensionMismatch {
            op: "matmul",
            expected: (k, n),
            got: b.shape(),
        });
    }
    if c.shape() != (m, n) {
        return Err(MatrixError::DimensionMismatch {
            op: "matmul",
            expected: (m, n),
            got: c.shape(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let c_data = c.as_mut_slice();

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            let a_row = i * k;
            for p in 0..k {
                sum += a_data[a_row + p] * b_data[p * n + j];
            }
            let c_idx = i * n + j;
            c_data[c_idx] = if beta == 0.0 {
                alpha * sum
            } else {
                alpha * sum + beta * c_data[c_idx]
            };
        }
    }

    Ok(())
}
