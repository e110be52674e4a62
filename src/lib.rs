//! matcalc: calculator for square integer matrices
//!
//! This crate provides a square integer matrix type with random construction,
//! the four calculator operations (add, multiply, transpose, trace), and a
//! handler chain that routes numeric menu codes to those operations. A menu
//! session and a small binary sit on top.

pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod matrix;
pub mod session;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::Cell;
pub use dispatch::{DispatchContext, HandlerChain, OpCode, Outcome};
pub use error::*;
pub use matrix::*;
pub use session::Session;
