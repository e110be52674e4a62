//! Conversion into faer dense matrices.
//!
//! Integer matrices are widened to `faer::Mat<f64>` so results can be checked
//! against, or handed on to, faer's floating-point routines.

use crate::core::traits::Cell;
use crate::matrix::Matrix;
use faer::Mat;
use num_traits::ToPrimitive;

impl<T: Cell> From<&Matrix<T>> for Mat<f64> {
    fn from(m: &Matrix<T>) -> Self {
        Mat::from_fn(m.size(), m.size(), |i, j| m[(i, j)].to_f64().unwrap_or(f64::NAN))
    }
}

impl<T: Cell> Matrix<T> {
    /// Widen to a faer dense matrix of `f64`.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from(self)
    }
}
