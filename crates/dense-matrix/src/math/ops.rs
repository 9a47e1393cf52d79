//! Arithmetic on `Matrix`.
//!
//! Each operation exists as a checked method returning `Result` (in-place
//! and pure forms) and as a `std::ops` operator. The operators panic with the
//! `MatrixError` message when the shapes are wrong; prefer the methods when
//! the shapes come from user input.
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;

// In-place forms. Every check runs before the receiver is touched.
impl Matrix {
    /// `self += other`, elementwise.
    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other)?;
        self.as_mut_slice()
            .iter_mut()
            .zip(other.as_slice())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }

    /// `self -= other`, elementwise.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other)?;
        self.as_mut_slice()
            .iter_mut()
            .zip(other.as_slice())
            .for_each(|(a, b)| *a -= b);
        Ok(())
    }

    /// Scale every element by `num`.
    pub fn mul_number(&mut self, num: f64) {
        self.as_mut_slice().iter_mut().for_each(|x| *x *= num);
    }

    /// Replace `self` with the product `self * other`.
    ///
    /// The product is built in a fresh buffer, so `other` may be a clone of
    /// `self`.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<()> {
        let product = self.checked_mul(other)?;
        log::debug!(
            "mul_matrix: {:?} x {:?} -> {:?}",
            self.shape(),
            other.shape(),
            product.shape()
        );
        *self = product;
        Ok(())
    }
}

// Pure forms
impl Matrix {
    pub fn checked_add(&self, other: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.sum_matrix(other)?;
        Ok(result)
    }

    pub fn checked_sub(&self, other: &Matrix) -> Result<Matrix> {
        let mut result = self.clone();
        result.sub_matrix(other)?;
        Ok(result)
    }

    pub fn scaled(&self, num: f64) -> Matrix {
        self.mapv(|x| x * num)
    }

    /// Matrix product; `self.cols()` must equal `other.rows()`.
    pub fn checked_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionIncompatible {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (rows, inner, cols) = (self.rows(), self.cols(), other.cols());
        let lhs = self.as_slice();
        let rhs = other.as_slice();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = 0.0;
                for k in 0..inner {
                    sum += lhs[i * inner + k] * rhs[k * cols + j];
                }
                data[i * cols + j] = sum;
            }
        }
        Ok(Matrix::from_parts(rows, cols, data))
    }
}

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

// Operators

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sum_matrix(rhs))
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sub_matrix(rhs))
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, num: f64) {
        self.mul_number(num)
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.mul_matrix(rhs))
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.checked_add(rhs))
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    fn add(mut self, rhs: &Matrix) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Self::Output {
        self + &rhs
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.checked_sub(rhs))
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    fn sub(mut self, rhs: &Matrix) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<Matrix> for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Self::Output {
        self - &rhs
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, num: f64) -> Self::Output {
        self.scaled(num)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, num: f64) -> Self::Output {
        self *= num;
        self
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        or_panic(self.checked_mul(rhs))
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        &self * rhs
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        &self * &rhs
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.scaled(-1.0)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(mut self) -> Self::Output {
        self.mul_number(-1.0);
        self
    }
}
