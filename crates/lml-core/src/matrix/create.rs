//! Matrix creation functions: zeros, ones, identity and friends.

use super::{Matrix, check_dims};

impl Matrix {
    /// Create a `rows x cols` matrix filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `rows * cols` overflows.
    pub fn full(rows: usize, cols: usize, value: f64) -> Self {
        let len = match check_dims(rows, cols) {
            Ok(len) => len,
            Err(e) => panic!("{e}"),
        };
        Self {
            data: vec![value; len],
            rows,
            cols,
        }
    }

    /// Create a matrix filled with zeros.
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, 0.0)
    }

    /// Create a matrix filled with ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, 1.0)
    }

    /// Create an identity matrix of size `n x n`.
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// let eye = Matrix::identity(3);
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Create a square matrix with `diag` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `diag` is empty.
    pub fn from_diag(diag: &[f64]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m.data[i * n + i] = d;
        }
        m
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.as_slice().len(), 12);
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_ones_and_full() {
        assert!(Matrix::ones(2, 2).iter().all(|&x| x == 1.0));
        assert!(Matrix::full(2, 3, 7.5).iter().all(|&x| x == 7.5));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn test_zeros_rejects_empty() {
        let _ = Matrix::zeros(0, 3);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_full_rejects_overflowing_shape() {
        let _ = Matrix::full(usize::MAX, 2, 1.0);
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m[(r, c)], if r == c { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_diag() {
        let m = Matrix::from_diag(&[2.0, 3.0]);
        assert_eq!(m.as_slice(), &[2.0, 0.0, 0.0, 3.0]);
    }
}
