//! Configuration for the calculator binary.

pub mod options;

pub use options::CalcOptions;
