//! Determinant by elimination with partial pivoting.
//!
//! The determinant is the product of the pivots, negated once per row
//! exchange. A singular matrix has determinant `0.0`; that is a result, not
//! an error.

use crate::config::{DecompConfig, Pivoting};
use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, ensure_square};

use super::LuDecomposition;

/// Determinant of a square matrix under the default tolerance.
///
/// ```
/// # use lml_core::Matrix;
/// # use lml_core::linalg::det;
/// let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
/// assert!((det(&a).unwrap() - (-6.0)).abs() < 1e-12);
/// ```
pub fn det(a: &Matrix) -> Result<f64> {
    det_with(a, &DecompConfig::default())
}

/// Determinant using `config.pivot_tolerance` as the singularity threshold.
///
/// Rows are always exchanged as needed regardless of `config.pivoting`, so
/// only a matrix with a pivot below the tolerance yields `0.0`. The
/// tolerance is absolute: `det(1e-10 * I)` is `0.0` under the default.
///
/// A 1x1 matrix skips the threshold and returns its element as is, so
/// `det([[1e-12]])` is `1e-12` even though LU reports it singular.
pub fn det_with(a: &Matrix, config: &DecompConfig) -> Result<f64> {
    config.validate()?;
    let n = ensure_square(a, "det")?;
    if n == 1 {
        return Ok(a[(0, 0)]);
    }

    let pivoted = config.with_pivoting(Pivoting::Partial);
    match LuDecomposition::decompose_with(a, &pivoted) {
        Ok(lu) => Ok(lu.det()),
        Err(MatrixError::SingularMatrix { pivot }) => {
            log::debug!("det: singular at pivot {pivot}, returning 0");
            Ok(0.0)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_det_2x2() {
        let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
        assert_relative_eq!(det(&a).unwrap(), -6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_det_3x3_numpy() {
        // >>> np.linalg.det([[6,1,1],[4,-2,5],[2,8,7]])
        // -306.0
        let a = Matrix::from_rows(&[&[6.0, 1.0, 1.0], &[4.0, -2.0, 5.0], &[2.0, 8.0, 7.0]])
            .unwrap();
        assert_relative_eq!(det(&a).unwrap(), -306.0, max_relative = 1e-12);
    }

    #[test]
    fn test_det_1x1_returns_element() {
        let a = Matrix::full(1, 1, -2.5);
        assert_eq!(det(&a).unwrap(), -2.5);
        assert_eq!(det(&Matrix::zeros(1, 1)).unwrap(), 0.0);
    }

    #[test]
    fn test_det_tolerance_is_absolute() {
        let tiny = Matrix::identity(2).scaled(1e-10);
        assert_eq!(det(&tiny).unwrap(), 0.0);
        let loose = DecompConfig::default().with_pivot_tolerance(1e-15);
        assert_relative_eq!(det_with(&tiny, &loose).unwrap(), 1e-20, max_relative = 1e-12);

        // The 1x1 case bypasses the threshold.
        assert_eq!(det(&Matrix::full(1, 1, 1e-12)).unwrap(), 1e-12);
    }

    #[test]
    fn test_det_row_exchange_flips_sign() {
        let a = Matrix::from_rows(&[&[0.0, 2.0], &[3.0, 0.0]]).unwrap();
        assert_eq!(det(&a).unwrap(), -6.0);
    }

    #[test]
    fn test_det_singular_is_zero() {
        let ones = Matrix::ones(2, 2);
        assert_eq!(det(&ones).unwrap(), 0.0);

        let zero_row =
            Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0], &[4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(det(&zero_row).unwrap(), 0.0);
    }

    #[test]
    fn test_det_identity() {
        assert_eq!(det(&Matrix::identity(5)).unwrap(), 1.0);
    }

    #[test]
    fn test_det_not_square() {
        assert_eq!(
            det(&Matrix::zeros(2, 3)).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "det",
                expected: (2, 2),
                got: (2, 3)
            }
        );
    }

    #[test]
    fn test_det_with_rejects_bad_config() {
        let bad = DecompConfig::default().with_pivot_tolerance(f64::NAN);
        assert!(matches!(
            det_with(&Matrix::identity(2), &bad),
            Err(MatrixError::InvalidConfig { .. })
        ));
    }
}
