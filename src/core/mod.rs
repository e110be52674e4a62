//! Core element traits and arithmetic kernels shared by the matrix operations.

pub mod kernels;
pub mod traits;

pub use traits::Cell;
