//! Matrix module: the square integer matrix type, its operations, and faer interop.

pub mod dense;
pub mod ops;
pub mod square;

pub use ops::{add, multiply, trace, transpose};
pub use square::Matrix;
