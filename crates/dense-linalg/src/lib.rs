//! dense-linalg: small dense matrices and vectors.
//!
//! This crate provides a `Matrix` type with transpose, arithmetic and the
//! determinant/minor/cofactor/adjoint/inverse/power family, a dynamic
//! `Vector` with the usual metrics, and a fixed-size `Vector3D` adding cross
//! and triple products.
//!
//! Determinants are computed by recursive cofactor expansion, which is exact
//! in structure but O(n!) in time; the crate targets small matrices where
//! that trade-off is acceptable. Singularity is tested by exact comparison
//! with zero.
//!
//! ```
//! use dense_linalg::prelude::*;
//!
//! let m = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;
//! assert_eq!(m.determinant()?, 10.0);
//!
//! let product = m.matmul(&m.inverse()?)?;
//! assert!((product[(0, 0)] - 1.0).abs() < 1e-12);
//! # Ok::<(), LinalgError>(())
//! ```
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

pub mod prelude {
    pub use crate::config::{FormatOptions, Notation};
    pub use crate::error::{LinalgError, ShapeError};
    pub use crate::math::{Matrix, Vector, Vector3D};
}
