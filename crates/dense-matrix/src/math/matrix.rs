use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::Tolerances;
use crate::error::{MatrixError, Result};

/// Integer types accepted as a dimension or an index.
///
/// Signed types are allowed so that a negative request is rejected with a
/// `MatrixError` instead of being impossible to express.
pub trait Extent: Copy {
    /// `None` when the value is negative or does not fit in `usize`.
    fn to_usize(self) -> Option<usize>;
    /// The value as given, for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_extent {
    ($($t:ty),*) => {
        $(
            impl Extent for $t {
                #[inline]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_extent!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Dense `f64` matrix with row-major storage.
#[derive(Clone, Debug)]
pub struct Matrix {
    // invariant: data.len() == rows * cols
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

// Construction & lifetime
impl Matrix {
    /// Make a `rows x cols` matrix filled with zeros.
    ///
    /// Fails with `InvalidDimensions` unless both counts are positive.
    pub fn new<R: Extent, C: Extent>(rows: R, cols: C) -> Result<Self> {
        let (r, c) = checked_dims(rows, cols)?;
        Ok(Self::zeros(r, c))
    }

    /// Wrap a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = checked_dims(shape.0, shape.1)?;
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Make a matrix from a slice of rows.
    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Result<Self> {
        let (r, c) = checked_dims(rows.len(), C)?;
        Ok(Self {
            data: rows.iter().flatten().copied().collect(),
            rows: r,
            cols: c,
        })
    }

    /// The `n x n` identity matrix.
    pub fn identity<N: Extent>(n: N) -> Result<Self> {
        let (n, _) = checked_dims(n, n)?;
        let mut m = Self::zeros(n, n);
        m.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(m)
    }

    /// A `0 x 0` matrix with no storage: the state left behind by [`Matrix::take`].
    pub const fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Move the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    // Unchecked; callers have already validated the shape.
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }
}

impl Default for Matrix {
    /// A 3x3 zero matrix.
    fn default() -> Self {
        Self::zeros(3, 3)
    }
}

fn checked_dims<R: Extent, C: Extent>(rows: R, cols: C) -> Result<(usize, usize)> {
    let invalid = || MatrixError::InvalidDimensions {
        rows: rows.to_i128(),
        cols: cols.to_i128(),
    };
    match (rows.to_usize(), cols.to_usize()) {
        (Some(r), Some(c)) if r > 0 && c > 0 => {
            r.checked_mul(c).ok_or_else(invalid)?;
            Ok((r, c))
        }
        _ => Err(invalid()),
    }
}

// Accessors
impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True only for the `0 x 0` state left by [`Matrix::take`].
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Square with order at least 1.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols && !self.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The entries of one row.
    ///
    /// # Panics
    /// If `row >= self.rows()`.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn checked_index<R: Extent, C: Extent>(
        &self,
        row: R,
        col: C,
    ) -> Result<(usize, usize)> {
        match (row.to_usize(), col.to_usize()) {
            (Some(r), Some(c)) if r < self.rows && c < self.cols => Ok((r, c)),
            _ => Err(MatrixError::IndexOutOfRange {
                row: row.to_i128(),
                col: col.to_i128(),
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    fn checked_offset<R: Extent, C: Extent>(&self, row: R, col: C) -> Result<usize> {
        let (r, c) = self.checked_index(row, col)?;
        Ok(self.offset(r, c))
    }

    /// Read the element at `(row, col)`.
    pub fn get<R: Extent, C: Extent>(&self, row: R, col: C) -> Result<f64> {
        let offset = self.checked_offset(row, col)?;
        Ok(self.data[offset])
    }

    /// Mutable reference to the element at `(row, col)`.
    pub fn get_mut<R: Extent, C: Extent>(&mut self, row: R, col: C) -> Result<&mut f64> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the element at `(row, col)`.
    pub fn set<R: Extent, C: Extent>(&mut self, row: R, col: C, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }
}

// Shape-level operations
impl Matrix {
    /// Returns a new `cols x rows` matrix; `self` is left untouched.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let dst = result.offset(col, row);
                result.data[dst] = self.data[self.offset(row, col)];
            }
        }
        result
    }

    /// Compare with the default equality tolerance.
    ///
    /// A shape mismatch is an error rather than `false`; differing values
    /// give `Ok(false)`.
    pub fn eq_matrix(&self, other: &Matrix) -> Result<bool> {
        self.approx_eq(other, Tolerances::default().equality())
    }

    /// Compare every pair of entries against an absolute tolerance `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> Result<bool> {
        self.ensure_same_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= eps))
    }

    pub(crate) fn ensure_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

/// Tolerant equality: `false` on a shape mismatch, otherwise every pair of
/// entries must be within [`crate::config::EQUALITY_EPSILON`].
///
/// Not transitive, hence no `Eq`.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other).unwrap_or(false)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    /// If the index is out of range; use [`Matrix::get`] for a `Result`.
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.checked_offset(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(e) => panic!("{}", e),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
