//! LU decomposition by Doolittle elimination.
//!
//! Decomposes a square matrix `A` into `A = LU` where:
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! No rows are exchanged by default, so a zero leading pivot fails even if
//! the matrix is invertible (e.g. `[[0, 1], [1, 0]]`). With
//! [`Pivoting::Partial`] the factorization becomes `PA = LU` and the
//! permutation is tracked.

use crate::config::{DecompConfig, Pivoting};
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, ensure_square};

/// Result of an LU decomposition.
///
/// `L` and `U` are owned, separately allocated matrices. The row
/// permutation is the identity unless partial pivoting was requested.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    l: Matrix,
    u: Matrix,
    /// Row `i` of `L·U` is row `perm[i]` of the input.
    perm: Vec<usize>,
    /// Sign of the permutation (+1 or -1), for determinant computation.
    sign: f64,
}

impl LuDecomposition {
    /// Decompose `a` with the default configuration (no pivoting).
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// # use lml_core::linalg::LuDecomposition;
    /// let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.l()[(1, 0)], 1.5);
    /// assert!((lu.det() - (-6.0)).abs() < 1e-12);
    /// ```
    pub fn decompose(a: &Matrix) -> Result<Self> {
        Self::decompose_with(a, &DecompConfig::default())
    }

    /// Decompose `a` using the tolerance and pivoting policy in `config`.
    ///
    /// Fails with `DimensionMismatch` for a non-square input and with
    /// `SingularMatrix` when a pivot falls below `config.pivot_tolerance`
    /// (or is NaN).
    /// On failure nothing is returned; there are no partial factors.
    pub fn decompose_with(a: &Matrix, config: &DecompConfig) -> Result<Self> {
        config.validate()?;
        let n = ensure_square(a, "lu")?;
        let tol = config.pivot_tolerance;

        // Packed working buffer: once row k is processed, columns >= k of
        // row k hold U and column k of rows > k holds L. Everything else is
        // still the (row-permuted) input.
        let mut lu: Vec<f64> = a.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1.0;

        for k in 0..n {
            if config.pivoting == Pivoting::Partial {
                let best = (k..n)
                    .map(|i| (i, residual(&lu, n, i, k, k).abs()))
                    .fold((k, f64::NEG_INFINITY), |acc, cur| {
                        if cur.1 > acc.1 { cur } else { acc }
                    })
                    .0;
                if best != k {
                    for j in 0..n {
                        lu.swap(k * n + j, best * n + j);
                    }
                    perm.swap(k, best);
                    sign = -sign;
                    log::trace!("lu: exchanged rows {k} and {best}");
                }
            }

            // Row k of U: residual of A after earlier rows' contributions.
            for j in k..n {
                lu[k * n + j] = residual(&lu, n, k, j, k);
            }

            let pivot = lu[k * n + k];
            if pivot.is_nan() || pivot.abs() < tol {
                if config.pivoting == Pivoting::None
                    && (k + 1..n).any(|i| residual(&lu, n, i, k, k).abs() >= tol)
                {
                    log::warn!(
                        "lu: pivot {k} is zero but a row below it is not; \
                         a row exchange (Pivoting::Partial) would succeed"
                    );
                }
                log::debug!("lu: singular at pivot {k} (|u_kk| = {:e})", pivot.abs());
                return Err(MatrixError::SingularMatrix { pivot: k });
            }

            // Column k of L: residual divided by the pivot.
            for i in (k + 1)..n {
                lu[i * n + k] = residual(&lu, n, i, k, k) / pivot;
            }
        }

        let (l, u) = unpack(&lu, n)?;
        Ok(Self { l, u, perm, sign })
    }

    /// The unit lower-triangular factor `L`.
    pub fn l(&self) -> &Matrix {
        &self.l
    }

    /// The upper-triangular factor `U`.
    pub fn u(&self) -> &Matrix {
        &self.u
    }

    /// Take ownership of `(L, U)`.
    pub fn into_factors(self) -> (Matrix, Matrix) {
        (self.l, self.u)
    }

    /// Row permutation: row `i` of `L·U` is row `permutation()[i]` of `A`.
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// The permutation matrix `P` with `P·A = L·U`.
    pub fn p(&self) -> Matrix {
        let n = self.perm.len();
        let mut p = Matrix::zeros(n, n);
        for (i, &pi) in self.perm.iter().enumerate() {
            p[(i, pi)] = 1.0;
        }
        p
    }

    /// Whether any rows were exchanged.
    pub fn is_permuted(&self) -> bool {
        self.perm.iter().enumerate().any(|(i, &p)| i != p)
    }

    /// `det(A) = sign * product(diag(U))`
    pub fn det(&self) -> f64 {
        self.u.diagonal().iter().fold(self.sign, |d, &x| d * x)
    }

    /// Solve `A·X = B` for every column of `b`.
    ///
    /// `b` must have as many rows as `A`; the result has `b`'s column count.
    pub fn solve(&self, b: &Matrix) -> Result<Matrix> {
        let n = self.perm.len();
        if b.rows() != n {
            return Err(MatrixError::DimensionMismatch {
                op: "solve",
                expected: (n, b.cols()),
                got: b.shape(),
            });
        }

        let mut x = Matrix::zeros(n, b.cols());
        let mut col = vec![0.0; n];
        for c in 0..b.cols() {
            for (i, &pi) in self.perm.iter().enumerate() {
                col[i] = b[(pi, c)];
            }
            self.forward_substitute(&mut col);
            self.back_substitute(&mut col);
            for (r, &v) in col.iter().enumerate() {
                x[(r, c)] = v;
            }
        }
        Ok(x)
    }

    /// Inverse of `A`, i.e. the solution of `A·X = I`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.solve(&Matrix::identity(self.perm.len()))
    }

    /// `L·y = b` in place. `L` has a unit diagonal, so no division.
    fn forward_substitute(&self, y: &mut [f64]) {
        // y[j] is read while y[i] is written for j < i; index loops are
        // clearer than split borrows here.
        #[allow(clippy::needless_range_loop)]
        for i in 1..y.len() {
            let row = self.l.row_slice(i);
            for j in 0..i {
                y[i] -= row[j] * y[j];
            }
        }
    }

    /// `U·x = y` in place.
    fn back_substitute(&self, x: &mut [f64]) {
        #[allow(clippy::needless_range_loop)]
        for i in (0..x.len()).rev() {
            let row = self.u.row_slice(i);
            for j in (i + 1)..x.len() {
                x[i] -= row[j] * x[j];
            }
            x[i] /= row[i];
        }
    }
}

/// `a[i][j] - sum_{p<k} l[i][p] * u[p][j]` on the packed buffer.
#[inline]
fn residual(lu: &[f64], n: usize, i: usize, j: usize, k: usize) -> f64 {
    (0..k).fold(lu[i * n + j], |acc, p| acc - lu[i * n + p] * lu[p * n + j])
}

fn unpack(lu: &[f64], n: usize) -> Result<(Matrix, Matrix)> {
    let mut l = vec![0.0; n * n];
    let mut u = vec![0.0; n * n];
    for i in 0..n {
        l[i * n + i] = 1.0;
        l[i * n..i * n + i].copy_from_slice(&lu[i * n..i * n + i]);
        u[i * n + i..(i + 1) * n].copy_from_slice(&lu[i * n + i..(i + 1) * n]);
    }
    Ok((Matrix::from_vec(l, n, n)?, Matrix::from_vec(u, n, n)?))
}
