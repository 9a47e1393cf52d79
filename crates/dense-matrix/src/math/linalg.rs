//! Minors, cofactors, determinant and inverse.
//!
//! The determinant is computed by Laplace expansion along the first row,
//! recursing into minors until order 2. This is O(n!) and meant for small
//! matrices only; there is no LU fallback.
use crate::config::Tolerances;
use crate::error::{MatrixError, Result};
use crate::math::matrix::{Extent, Matrix};

impl Matrix {
    /// The submatrix left after deleting `row` and `col`.
    ///
    /// Requires a square matrix of order at least 2 (`InvalidShapeForMinor`)
    /// and in-range indices (`IndexOutOfRange`).
    pub fn minor<R: Extent, C: Extent>(&self, row: R, col: C) -> Result<Matrix> {
        if !self.is_square() || self.rows() < 2 {
            return Err(MatrixError::InvalidShapeForMinor {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let (row, col) = self.checked_index(row, col)?;
        Ok(strike(self, row, col))
    }

    /// Matrix of cofactors: entry `(i, j)` is `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// A 1x1 matrix has the single cofactor `1.0`.
    pub fn cofactors(&self) -> Result<Matrix> {
        ensure_square(self)?;
        let n = self.rows();
        if n == 1 {
            return Ok(Matrix::from_parts(1, 1, vec![1.0]));
        }
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(sign(i + j) * laplace(&strike(self, i, j)));
            }
        }
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        Ok(self.cofactors()?.transpose())
    }

    pub fn determinant(&self) -> Result<f64> {
        ensure_square(self)?;
        Ok(laplace(self))
    }

    /// Inverse using the default singularity threshold.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&Tolerances::default())
    }

    /// `adjugate / det`, failing with `SingularMatrix` when
    /// `|det| < tolerances.singularity()`.
    pub fn inverse_with(&self, tolerances: &Tolerances) -> Result<Matrix> {
        let determinant = self.determinant()?;
        log::debug!(
            "inverse: order {}, determinant {}",
            self.rows(),
            determinant
        );
        if determinant.abs() < tolerances.singularity() {
            log::warn!(
                "refusing to invert: |{}| is below the singularity threshold {}",
                determinant,
                tolerances.singularity()
            );
            return Err(MatrixError::SingularMatrix { determinant });
        }
        Ok(self.adjugate()?.mapv(|x| x / determinant))
    }
}

fn ensure_square(m: &Matrix) -> Result<()> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    Ok(())
}

#[inline]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

// Unchecked minor: `m` is square of order >= 2 and the indices are in range.
fn strike(m: &Matrix, row: usize, col: usize) -> Matrix {
    let n = m.rows();
    let mut data = Vec::with_capacity((n - 1) * (n - 1));
    for i in (0..n).filter(|&i| i != row) {
        let src = m.row_slice(i);
        data.extend(
            src.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v),
        );
    }
    Matrix::from_parts(n - 1, n - 1, data)
}

// `m` is square and non-empty.
fn laplace(m: &Matrix) -> f64 {
    let a = m.as_slice();
    match m.rows() {
        1 => a[0],
        2 => a[0] * a[3] - a[1] * a[2],
        n => {
            log::trace!("laplace expansion of order {}", n);
            let mut det = 0.0;
            for j in 0..n {
                det += a[j] * laplace(&strike(m, 0, j)) * sign(j);
            }
            det
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[[f64; 3]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_sign_alternates() {
        assert_eq!(sign(0), 1.0);
        assert_eq!(sign(1), -1.0);
        assert_eq!(sign(4), 1.0);
        assert_eq!(sign(7), -1.0);
    }

    #[test]
    fn test_strike_keeps_relative_order() {
        let a = m(&[[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        assert_eq!(strike(&a, 0, 0).as_slice(), &[5., 6., 8., 9.]);
        assert_eq!(strike(&a, 1, 1).as_slice(), &[1., 3., 7., 9.]);
        assert_eq!(strike(&a, 2, 0).as_slice(), &[2., 3., 5., 6.]);
    }

    #[test]
    fn test_laplace_matches_rule_of_sarrus() {
        let a = m(&[[2., -3., 1.], [2., 0., -1.], [1., 4., 5.]]);
        let s = a.as_slice();
        let sarrus = s[0] * s[4] * s[8] + s[1] * s[5] * s[6] + s[2] * s[3] * s[7]
            - s[2] * s[4] * s[6]
            - s[0] * s[5] * s[7]
            - s[1] * s[3] * s[8];
        assert_eq!(laplace(&a), sarrus);
        assert_eq!(laplace(&a), 49.0);
    }
}
