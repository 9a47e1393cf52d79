//! dense-matrix: a small dense `f64` matrix value type.
//!
//! This crate provides a row-major `Matrix` with dimension-checked
//! arithmetic (pure and in-place forms), transposition, minors, cofactors,
//! determinant by Laplace expansion and inversion through the adjugate.
//!
//! Every precondition failure surfaces as a [`MatrixError`]; the operator
//! traits (`+`, `-`, `*`, `+=`, ...) are thin panicking wrappers over the
//! checked methods. The optional `ndarray` feature adds conversions to and
//! from `ndarray::Array2<f64>`.
pub mod config;
pub mod error;
pub mod math;

pub use config::Tolerances;
pub use error::{MatrixError, Result};
pub use math::matrix::Extent;
pub use math::Matrix;
