//! Arithmetic over square matrices: add, multiply, transpose, trace.
//!
//! Every operation borrows its operands and returns a freshly built result;
//! operands are never modified. `add` and `multiply` require equal sizes and
//! fail with [`MatrixError::SizeMismatch`] otherwise. Sums and products are
//! checked; a cell that does not fit the cell type is [`MatrixError::Overflow`].

use crate::core::kernels;
use crate::core::traits::Cell;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

fn check_sizes<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<usize> {
    if a.size() == b.size() {
        Ok(a.size())
    } else {
        Err(MatrixError::SizeMismatch { left: a.size(), right: b.size() })
    }
}

/// Elementwise sum `C[i,j] = A[i,j] + B[i,j]`.
///
/// # Errors
/// * `MatrixError::SizeMismatch` if the sizes differ.
/// * `MatrixError::Overflow` if a cell sum does not fit the cell type.
pub fn add<T: Cell>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let n = check_sizes(a, b)?;
    Ok(Matrix::from_cells(n, kernels::sum_cells(a, b)?))
}

/// Standard product `C[i,j] = sum_k A[i,k] * B[k,j]`.
///
/// # Errors
/// * `MatrixError::SizeMismatch` if the sizes differ.
/// * `MatrixError::Overflow` if an accumulated cell does not fit the cell type.
pub fn multiply<T: Cell>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let n = check_sizes(a, b)?;
    Ok(Matrix::from_cells(n, kernels::product_cells(a, b)?))
}

/// Transpose: `T[j,i] = A[i,j]`.
pub fn transpose<T: Cell>(a: &Matrix<T>) -> Matrix<T> {
    Matrix::from_fn(a.size(), |i, j| a[(j, i)])
}

/// Sum of the main diagonal.
///
/// # Errors
/// * `MatrixError::Overflow` if the running sum does not fit the cell type; the
///   reported cell is the diagonal entry that overflowed.
pub fn trace<T: Cell>(a: &Matrix<T>) -> Result<T> {
    (0..a.size()).try_fold(T::zero(), |acc, i| {
        acc.checked_add(&a[(i, i)]).ok_or(MatrixError::Overflow { row: i, col: i })
    })
}
