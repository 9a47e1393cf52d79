//! The `Matrix` type and the algebra built on it.
//!
//! `matrix` holds the storage, construction and element access, `ops` the
//! arithmetic and operator traits, and `linalg` the minor/cofactor based
//! determinant and inverse.
pub mod linalg;
pub mod matrix;
pub mod ops;

#[cfg(feature = "ndarray")]
pub mod interop;

pub use matrix::Matrix;
