use thiserror::Error;

// Unified error type for matcalc

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("grid is not square: {rows} rows but a row of {cols} columns")]
    Shape { rows: usize, cols: usize },
    #[error("matrix sizes must match: {left}x{left} vs {right}x{right}")]
    SizeMismatch { left: usize, right: usize },
    #[error("cell ({row}, {col}) is out of range for a {size}x{size} matrix")]
    Index { row: usize, col: usize, size: usize },
    #[error("arithmetic overflow in cell ({row}, {col})")]
    Overflow { row: usize, col: usize },
    #[error("operation code {0} is already owned by another handler")]
    DuplicateHandler(i64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
