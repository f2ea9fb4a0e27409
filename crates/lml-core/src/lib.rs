//! `lml-core`: dense `f64` matrices and the classic factorizations.
//!
//! Provides the [`Matrix`] type, element-wise and matrix arithmetic, LU and
//! QR decompositions, determinant, linear solve and inverse.
//!
//! # Design
//!
//! - **Pure Rust**: every algorithm is implemented here, no BLAS/LAPACK.
//! - Every fallible operation returns [`Result`] with a [`MatrixError`];
//!   numerical thresholds come from a [`DecompConfig`].
//! - Inputs are borrowed and never modified; results are new matrices.
//!
//! ```
//! use lml_core::Matrix;
//!
//! let a = Matrix::from_rows(&[&[4.0, 3.0], &[6.0, 3.0]]).unwrap();
//! assert!((a.det().unwrap() + 6.0).abs() < 1e-12);
//!
//! let inv = a.inverse().unwrap();
//! let eye = a.matmul(&inv).unwrap();
//! assert!((eye[(1, 1)] - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use config::{DEFAULT_TOLERANCE, DecompConfig, Pivoting};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use lml_core::prelude::*;`
pub mod prelude {
    pub use crate::config::{DEFAULT_TOLERANCE, DecompConfig, Pivoting};
    pub use crate::error::{MatrixError, Result};
    pub use crate::linalg::{
        LuDecomposition, QrDecomposition, det, det_with, inverse, inverse_with, lstsq, solve,
        solve_with,
    };
    pub use crate::matrix::Matrix;
}
