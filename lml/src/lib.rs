//! # LML
//!
//! Lightweight Matrix Library: dense `f64` matrices with LU and QR
//! decompositions, determinant, linear solve and inverse.
//!
//! One `use lml::prelude::*;` brings the matrix type, the decompositions and
//! the error and configuration types into scope.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrices and linear algebra |
//! | `serde` | `Serialize`/`Deserialize` for the configuration types |
//!
//! ```
//! use lml::prelude::*;
//!
//! let a = Matrix::from_rows(&[&[2.0, 1.0], &[1.0, 4.0]]).unwrap();
//! let b = Matrix::from_vec(vec![5.0, 6.0], 2, 1).unwrap();
//! let x = solve(&a, &b).unwrap();
//! assert!((x[(0, 0)] - 2.0).abs() < 1e-10);
//! ```

pub use lml_core as core;

/// Glob-import convenience: `use lml::prelude::*;`
pub mod prelude {
    pub use lml_core::prelude::*;
}
