//! Result of a single dispatch call.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// What a handler produced.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Text to show the user.
    Rendered(String),
    /// An operation failed in a recoverable way; the session carries on.
    Recovered(MatrixError),
    /// New matrices that must take the place of the live ones.
    Replaced { a: Matrix<T>, b: Matrix<T> },
    /// No handler owns the code. Nothing happens.
    Unrecognized,
}

impl<T> Outcome<T> {
    /// Assign replaced matrices into the caller's slots and return the text to print, if any.
    pub fn apply(self, a: &mut Matrix<T>, b: &mut Matrix<T>) -> Option<String> {
        match self {
            Outcome::Rendered(text) => Some(text),
            Outcome::Recovered(err) => Some(format!("Error: {err}\n")),
            Outcome::Replaced { a: new_a, b: new_b } => {
                let size = new_a.size();
                *a = new_a;
                *b = new_b;
                Some(format!("New {size}x{size} matrices created\n"))
            }
            Outcome::Unrecognized => None,
        }
    }
}
