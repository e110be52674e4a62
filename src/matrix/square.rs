//! Square integer matrix.
//!
//! `Matrix<T>` owns a `size x size` grid stored row-major. The size is fixed at
//! construction; cells can only be written through [`Matrix::set`] or
//! `IndexMut`, which never change the shape.
//!
//! # Construction
//! - [`Matrix::create_random`]: every cell drawn uniformly from `1..=9` using
//!   a caller-supplied random source.
//! - [`Matrix::create_from_grid`]: deep copy of a square grid of rows.
//!
//! # Rendering
//! [`Matrix::render`] (and `Display`) writes one line per row with cells
//! separated by a tab.

use crate::core::traits::Cell;
use crate::error::{MatrixError, Result};
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Square matrix of integer cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T = i64> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Cell> Matrix<T> {
    /// All-zero matrix of the given size.
    pub fn zeros(size: usize) -> Self {
        Matrix { size, cells: vec![T::zero(); size * size] }
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(f(i, j));
            }
        }
        Matrix { size, cells }
    }

    /// Random matrix with every cell uniform in `1..=9`.
    ///
    /// # Arguments
    /// * `size` - Number of rows (and columns). Callers are expected to pass a
    ///   positive size; `0` yields an empty matrix.
    /// * `rng` - Random source. Pass a seeded generator for reproducible cells.
    pub fn create_random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self::from_fn(size, |_, _| <T as From<u8>>::from(rng.gen_range(1..=9u8)))
    }

    /// Copy a grid of rows into a new matrix.
    ///
    /// # Errors
    /// * `MatrixError::Shape` if any row length differs from the number of rows.
    pub fn create_from_grid<G: AsRef<[T]>>(grid: &[G]) -> Result<Self> {
        let size = grid.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in grid {
            let row = row.as_ref();
            if row.len() != size {
                return Err(MatrixError::Shape { rows: size, cols: row.len() });
            }
            cells.extend_from_slice(row);
        }
        Ok(Matrix { size, cells })
    }
}

impl<T> Matrix<T> {
    /// Wrap row-major cells produced by a kernel. `cells.len()` must be `size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Matrix { size, cells }
    }

    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Row `i` as a slice. Panics if `i >= size`.
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(MatrixError::Index { row, col, size: self.size })
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Read cell `(row, col)`, failing with `MatrixError::Index` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.offset(row, col).map(|idx| self.cells[idx])
    }

    /// Write cell `(row, col)`, failing with `MatrixError::Index` when out of range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Copy the cells out as a grid of rows.
    pub fn to_grid(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl<T: fmt::Display> Matrix<T> {
    /// Tab-separated text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of range for {0}x{0} matrix",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of range for {0}x{0} matrix",
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
