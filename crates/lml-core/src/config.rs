//! Tolerances and pivoting policy shared by the decompositions.
//!
//! Every `*_with` entry point in [`linalg`](crate::linalg) takes a
//! [`DecompConfig`]; the plain entry points use [`DecompConfig::default`].

use crate::error::{MatrixError, Result};

/// Default threshold below which a pivot or residual norm counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Row-exchange policy for LU decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pivoting {
    /// Plain Doolittle elimination. A zero leading pivot fails even when a
    /// row exchange would have rescued the factorization.
    #[default]
    None,
    /// Pick the largest remaining entry in the pivot column at every step.
    /// The factorization then satisfies `L·U = P·A`.
    Partial,
}

/// Numerical settings for LU, QR, determinant, solve and inverse.
///
/// Both tolerances are absolute thresholds, not scaled by the magnitude of
/// the input. A well-conditioned but tiny matrix such as `1e-10 * I` is
/// therefore reported singular under the defaults; rescale the input or
/// lower the tolerance for such data.
///
/// ```
/// # use lml_core::config::{DecompConfig, Pivoting};
/// let cfg = DecompConfig::default()
///     .with_pivot_tolerance(1e-12)
///     .with_pivoting(Pivoting::Partial);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecompConfig {
    /// Pivots with `|p| < pivot_tolerance` are treated as zero.
    pub pivot_tolerance: f64,
    /// Gram-Schmidt residual norms below this mark a dependent column.
    pub rank_tolerance: f64,
    /// Row-exchange policy for LU (and therefore solve and inverse).
    pub pivoting: Pivoting,
}

impl Default for DecompConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_TOLERANCE,
            rank_tolerance: DEFAULT_TOLERANCE,
            pivoting: Pivoting::None,
        }
    }
}

impl DecompConfig {
    /// Set the threshold below which an LU pivot counts as zero.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Set the threshold below which a QR residual norm counts as zero.
    #[must_use]
    pub fn with_rank_tolerance(mut self, tolerance: f64) -> Self {
        self.rank_tolerance = tolerance;
        self
    }

    /// Set the LU row-exchange policy.
    #[must_use]
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    /// Reject tolerances that are zero, negative, NaN or infinite.
    ///
    /// A zero tolerance would let an exact zero pivot or residual through.
    pub fn validate(&self) -> Result<()> {
        if !(self.pivot_tolerance.is_finite() && self.pivot_tolerance > 0.0) {
            return Err(MatrixError::InvalidConfig {
                reason: "pivot_tolerance must be finite and positive",
            });
        }
        if !(self.rank_tolerance.is_finite() && self.rank_tolerance > 0.0) {
            return Err(MatrixError::InvalidConfig {
                reason: "rank_tolerance must be finite and positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DecompConfig::default();
        assert_eq!(cfg.pivot_tolerance, DEFAULT_TOLERANCE);
        assert_eq!(cfg.rank_tolerance, DEFAULT_TOLERANCE);
        assert_eq!(cfg.pivoting, Pivoting::None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = DecompConfig::default()
            .with_rank_tolerance(1e-6)
            .with_pivoting(Pivoting::Partial);
        assert_eq!(cfg.rank_tolerance, 1e-6);
        assert_eq!(cfg.pivoting, Pivoting::Partial);
    }

    #[test]
    fn test_validate_rejects_bad_tolerances() {
        let neg = DecompConfig::default().with_pivot_tolerance(-1.0);
        assert!(matches!(
            neg.validate(),
            Err(MatrixError::InvalidConfig { .. })
        ));
        let nan = DecompConfig::default().with_rank_tolerance(f64::NAN);
        assert!(nan.validate().is_err());
        let inf = DecompConfig::default().with_pivot_tolerance(f64::INFINITY);
        assert!(inf.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tolerances() {
        let zero_pivot = DecompConfig::default().with_pivot_tolerance(0.0);
        assert_eq!(
            zero_pivot.validate().unwrap_err(),
            MatrixError::InvalidConfig {
                reason: "pivot_tolerance must be finite and positive"
            }
        );
        let zero_rank = DecompConfig::default().with_rank_tolerance(0.0);
        assert!(matches!(
            zero_rank.validate(),
            Err(MatrixError::InvalidConfig { .. })
        ));
        assert!(
            DecompConfig::default()
                .with_pivot_tolerance(f64::MIN_POSITIVE)
                .validate()
                .is_ok()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_defaults() {
        let cfg = DecompConfig::default().with_pivoting(Pivoting::Partial);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"partial\""));
        let back: DecompConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);

        // Missing fields fall back to the defaults.
        let partial: DecompConfig = serde_json::from_str(r#"{"rank_tolerance":1e-6}"#).unwrap();
        assert_eq!(partial.pivot_tolerance, DEFAULT_TOLERANCE);
        assert_eq!(partial.rank_tolerance, 1e-6);
    }
}
