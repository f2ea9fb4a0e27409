//! QR decomposition via modified Gram-Schmidt.
//!
//! Decomposes a matrix `A` (m x n, m >= n) into `A = QR` where:
//! - `Q` is m x n with orthonormal columns (`Q^T Q = I`)
//! - `R` is n x n upper triangular with a positive diagonal

use crate::config::DecompConfig;
use crate::error::{MatrixError, Result};
use crate::linalg::blas::{axpy, dot, nrm2};
use crate::matrix::Matrix;

/// Result of a thin QR decomposition.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    q: Matrix,
    r: Matrix,
}

#[allow(clippy::many_single_char_names)]
impl QrDecomposition {
    /// Perform QR decomposition on a full-column-rank matrix (m >= n).
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// # use lml_core::linalg::QrDecomposition;
    /// let a = Matrix::from_rows(&[&[2.0, 0.0], &[0.0, 0.0], &[0.0, 3.0]]).unwrap();
    /// let qr = QrDecomposition::decompose(&a).unwrap();
    /// assert_eq!(qr.q().shape(), (3, 2));
    /// assert_eq!(qr.r().shape(), (2, 2));
    /// let qtq = qr.q().transpose().matmul(qr.q()).unwrap();
    /// for (x, y) in qtq.iter().zip(Matrix::identity(2).iter()) {
    ///     assert!((x - y).abs() < 1e-12);
    /// }
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        Self::decompose_with(a, &DecompConfig::default())
    }

    /// Decompose `a` using `config.rank_tolerance` as the dependence
    /// threshold.
    ///
    /// Fails with `DimensionMismatch` when `m < n` and with `RankDeficient`
    /// when a column's residual norm falls below the rank tolerance.
    pub fn decompose_with(a: &Matrix, config: &DecompConfig) -> Result<Self> {
        config.validate()?;
        let (m, n) = a.shape();
        if m < n {
            return Err(MatrixError::DimensionMismatch {
                op: "qr",
                expected: (n, n),
                got: (m, n),
            });
        }

        // Work column-major: cols[j] is column j of A, orthonormalized in
        // place into column j of Q.
        let at = a.transpose();
        let mut cols: Vec<Vec<f64>> = (0..n).map(|j| at.row_slice(j).to_vec()).collect();
        let mut r = Matrix::zeros(n, n);

        for j in 0..n {
            let (done, rest) = cols.split_at_mut(j);
            let v = &mut rest[0];

            // Subtract the projection onto each earlier q_i, using the
            // partially orthogonalized v (modified Gram-Schmidt).
            for (i, q_i) in done.iter().enumerate() {
                let coeff = dot(q_i, v);
                r[(i, j)] = coeff;
                axpy(-coeff, q_i, v);
            }

            let norm = nrm2(v);
            if norm.is_nan() || norm < config.rank_tolerance {
                log::debug!("qr: column {j} is rank deficient (residual norm {norm:e})");
                return Err(MatrixError::RankDeficient { column: j });
            }
            r[(j, j)] = norm;
            for x in v.iter_mut() {
                *x /= norm;
            }
        }

        let mut q = Matrix::zeros(m, n);
        for (j, c) in cols.iter().enumerate() {
            for (i, &x) in c.iter().enumerate() {
                q[(i, j)] = x;
            }
        }

        Ok(Self { q, r })
    }

    /// The `m x n` factor with orthonormal columns.
    pub fn q(&self) -> &Matrix {
        &self.q
    }

    /// The `n x n` upper-triangular factor.
    pub fn r(&self) -> &Matrix {
        &self.r
    }

    /// Take ownership of `(Q, R)`.
    pub fn into_factors(self) -> (Matrix, Matrix) {
        (self.q, self.r)
    }

    /// Solve the least-squares problem `min ||A·X - B||` column by column.
    ///
    /// For a square `A` this is the exact solution of `A·X = B`. `b` must
    /// have `m` rows; the result is `n x b.cols()`.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let (m, n) = self.q.shape();
        if b.rows() != m {
            return Err(MatrixError::DimensionMismatch {
                op: "lstsq",
                expected: (m, b.cols()),
                got: b.shape(),
            });
        }

        // R·X = Q^T·B
        let mut x = self.q.transpose().matmul(b)?;
        for c in 0..x.cols() {
            for i in (0..n).rev() {
                let mut s = x[(i, c)];
                for j in (i + 1)..n {
                    s -= self.r[(i, j)] * x[(j, c)];
                }
                x[(i, c)] = s / self.r[(i, i)];
            }
        }
        Ok(x)
    }
}

/// Solve the least-squares problem `min ||A·X - B||` via QR decomposition.
///
/// ```
/// # use lml_core::Matrix;
/// # use lml_core::linalg::lstsq;
/// // Fit y = a + b*x to (1, 6), (2, 5), (3, 7)
/// let a = Matrix::from_rows(&[&[1.0, 1.0], &[1.0, 2.0], &[1.0, 3.0]]).unwrap();
/// let b = Matrix::from_vec(vec![6.0, 5.0, 7.0], 3, 1).unwrap();
/// let x = lstsq(&a, &b).unwrap();
/// assert!((x[(0, 0)] - 5.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 0.5).abs() < 1e-10);
/// ```
pub fn lstsq(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if b.rows() != a.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "lstsq",
            expected: (a.rows(), b.cols()),
            got: b.shape(),
        });
    }
    QrDecomposition::decompose(a)?.solve(b)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn assert_orthonormal(q: &Matrix) {
        let qtq = q.transpose().matmul(q).unwrap();
        assert_abs_diff_eq!(qtq, Matrix::identity(q.cols()), epsilon = 1e-10);
    }

    #[test]
    fn test_qr_3x3() {
        let a = Matrix::from_rows(&[
            &[12.0, -51.0, 4.0],
            &[6.0, 167.0, -68.0],
            &[-4.0, 24.0, -41.0],
        ])
        .unwrap();
        let qr = QrDecomposition::decompose(&a).unwrap();

        let prod = qr.q().matmul(qr.r()).unwrap();
        assert_relative_eq!(prod, a, epsilon = 1e-10, max_relative = 1e-9);
        assert_orthonormal(qr.q());

        // Textbook values: R = [[14, 21, -14], [0, 175, -70], [0, 0, 35]]
        let r_expected = Matrix::from_rows(&[
            &[14.0, 21.0, -14.0],
            &[0.0, 175.0, -70.0],
            &[0.0, 0.0, 35.0],
        ])
        .unwrap();
        assert_abs_diff_eq!(*qr.r(), r_expected, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_tall_with_zero_row() {
        let a = Matrix::from_rows(&[&[2.0, 0.0], &[0.0, 0.0], &[0.0, 3.0]]).unwrap();
        let (q, r) = QrDecomposition::decompose(&a).unwrap().into_factors();
        assert_eq!(q.shape(), (3, 2));
        assert_eq!(r.shape(), (2, 2));
        assert_eq!(r.as_slice(), &[2.0, 0.0, 0.0, 3.0]);
        assert_orthonormal(&q);
        assert_abs_diff_eq!(q.matmul(&r).unwrap(), a, epsilon = 1e-12);
    }

    #[test]
    fn test_qr_r_is_upper_triangular() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0], &[7.0, 8.0]]).unwrap();
        let qr = QrDecomposition::decompose(&a).unwrap();
        assert_eq!(qr.r()[(1, 0)], 0.0);
        assert!(qr.r().diagonal().iter().all(|&d| d > 0.0));
        assert_orthonormal(qr.q());
    }

    #[test]
    fn test_qr_wide_matrix() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            QrDecomposition::decompose(&a).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "qr",
                expected: (3, 3),
                got: (2, 3)
            }
        );
    }

    #[test]
    fn test_qr_rank_deficient() {
        // Second column is twice the first
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[2.0, 4.0], &[3.0, 6.0]]).unwrap();
        assert_eq!(
            QrDecomposition::decompose(&a).unwrap_err(),
            MatrixError::RankDeficient { column: 1 }
        );

        let zero_first = Matrix::from_rows(&[&[0.0, 1.0], &[0.0, 1.0]]).unwrap();
        assert_eq!(
            QrDecomposition::decompose(&zero_first).unwrap_err(),
            MatrixError::RankDeficient { column: 0 }
        );
    }

    #[test]
    fn test_qr_zero_tolerance_rejected() {
        let zero = DecompConfig::default().with_rank_tolerance(0.0);
        assert!(matches!(
            QrDecomposition::decompose_with(&Matrix::zeros(2, 1), &zero),
            Err(MatrixError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_qr_nan_column_is_rank_deficient() {
        let a = Matrix::from_rows(&[&[f64::NAN, 1.0], &[1.0, 0.0]]).unwrap();
        assert_eq!(
            QrDecomposition::decompose(&a).unwrap_err(),
            MatrixError::RankDeficient { column: 0 }
        );
    }

    #[test]
    fn test_qr_solve_square() {
        let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
        let b = Matrix::from_vec(vec![5.0, 6.0], 2, 1).unwrap();
        let x = QrDecomposition::decompose(&a).unwrap().solve(&b).unwrap();
        assert_abs_diff_eq!(
            x,
            Matrix::from_vec(vec![2.0, 1.0], 2, 1).unwrap(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_lstsq_4x3() {
        // Normal equations solution: x = [2.0, -0.5, 0.5]
        let a = Matrix::from_rows(&[
            &[1.0, 1.0, 1.0],
            &[1.0, 2.0, 4.0],
            &[1.0, 3.0, 9.0],
            &[1.0, 4.0, 16.0],
        ])
        .unwrap();
        let b = Matrix::from_vec(vec![2.0, 3.0, 5.0, 8.0], 4, 1).unwrap();
        let x = lstsq(&a, &b).unwrap();
        assert_abs_diff_eq!(
            x,
            Matrix::from_vec(vec![2.0, -0.5, 0.5], 3, 1).unwrap(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_lstsq_dimension_mismatch() {
        let a = Matrix::identity(2);
        assert!(matches!(
            lstsq(&a, &Matrix::zeros(3, 1)),
            Err(MatrixError::DimensionMismatch { op: "lstsq", .. })
        ));
    }
}
