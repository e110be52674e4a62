//! Integer kernels behind the public matrix operations.
//!
//! The product kernel fills the result one row at a time. With the `rayon`
//! feature enabled rows are computed in parallel; otherwise a plain serial loop
//! is used. Both paths use checked arithmetic and report the first cell that
//! overflows.

use crate::core::traits::Cell;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Computes row `i` of `a * b` into `out`.
fn product_row<T: Cell>(a: &Matrix<T>, b: &Matrix<T>, i: usize, out: &mut [T]) -> Result<()> {
    let lhs = a.row(i);
    for (j, slot) in out.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (k, &aik) in lhs.iter().enumerate() {
            sum = aik
                .checked_mul(&b[(k, j)])
                .and_then(|p| sum.checked_add(&p))
                .ok_or(MatrixError::Overflow { row: i, col: j })?;
        }
        *slot = sum;
    }
    Ok(())
}

/// Row-major cells of `a * b`. Sizes must already be validated by the caller.
pub(crate) fn product_cells<T: Cell>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Vec<T>> {
    let n = a.size();
    let mut cells = vec![T::zero(); n * n];
    if n == 0 {
        return Ok(cells);
    }
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        cells
            .par_chunks_mut(n)
            .enumerate()
            .try_for_each(|(i, row)| product_row(a, b, i, row))?;
    }
    #[cfg(not(feature = "rayon"))]
    {
        for (i, row) in cells.chunks_mut(n).enumerate() {
            product_row(a, b, i, row)?;
        }
    }
    Ok(cells)
}

/// Row-major cells of `a + b`. Sizes must already be validated by the caller.
pub(crate) fn sum_cells<T: Cell>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Vec<T>> {
    let n = a.size();
    a.cells()
        .iter()
        .zip(b.cells())
        .enumerate()
        .map(|(idx, (&x, &y))| {
            x.checked_add(&y).ok_or(MatrixError::Overflow {
                row: idx / n,
                col: idx % n,
            })
        })
        .collect()
}
