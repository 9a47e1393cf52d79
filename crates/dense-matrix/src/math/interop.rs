//! Conversions between `Matrix` and `ndarray::Array2<f64>`.
use ndarray::Array2;

use crate::error::MatrixError;
use crate::math::matrix::Matrix;

impl From<&Matrix> for Array2<f64> {
    fn from(m: &Matrix) -> Self {
        Array2::from_shape_fn(m.shape(), |(row, col)| m[(row, col)])
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    /// Any memory layout is accepted; elements are read in logical
    /// (row-major) order.
    fn try_from(array: Array2<f64>) -> Result<Self, Self::Error> {
        let data: Vec<f64> = array.iter().copied().collect();
        Matrix::from_shape_vec(array.dim(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_ndarray() {
        let m = Matrix::from_rows(&[[1., 2., 3.], [4., 5., 6.]]).unwrap();
        let a = Array2::from(&m);
        assert_eq!(a.dim(), (2, 3));
        assert_eq!(a[[1, 0]], 4.0);
        assert_eq!(Matrix::try_from(a).unwrap(), m);
    }

    #[test]
    fn test_fortran_layout_is_read_logically() {
        let a = Array2::from_shape_vec((2, 2), vec![1., 2., 3., 4.]).unwrap();
        let m = Matrix::try_from(a.reversed_axes()).unwrap();
        assert_eq!(m.as_slice(), &[1., 3., 2., 4.]);
    }

    #[test]
    fn test_zero_length_axis_is_rejected() {
        let a = Array2::<f64>::zeros((0, 3));
        assert_eq!(
            Matrix::try_from(a),
            Err(MatrixError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }
}
