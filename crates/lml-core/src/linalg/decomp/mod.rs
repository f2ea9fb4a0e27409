//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization           |
//! |---------------|---------|-------------------------|
//! | LU            | [`lu`]  | `A = LU` (or `PA = LU`) |
//! | QR            | [`qr`]  | `A = QR`                |

pub mod lu;
pub mod qr;

pub use lu::LuDecomposition;
pub use qr::{QrDecomposition, lstsq};
