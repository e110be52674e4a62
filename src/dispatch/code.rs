//! Operation codes understood by the standard handler chain.

/// Enum of the built-in operations, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// Show both matrices
    Display,
    /// Sum of the two matrices
    Add,
    /// Product of the two matrices
    Multiply,
    /// Transpose of the first matrix
    Transpose,
    /// Trace of the first matrix
    Trace,
    /// Replace both matrices with new random ones
    Recreate,
}

impl OpCode {
    /// All built-in operations in the order the chain tries them.
    pub const ALL: [OpCode; 6] = [
        OpCode::Display,
        OpCode::Add,
        OpCode::Multiply,
        OpCode::Transpose,
        OpCode::Trace,
        OpCode::Recreate,
    ];

    /// Numeric menu code owned by this operation.
    pub fn code(self) -> i64 {
        match self {
            OpCode::Display => 1,
            OpCode::Add => 2,
            OpCode::Multiply => 3,
            OpCode::Transpose => 4,
            OpCode::Trace => 5,
            OpCode::Recreate => 6,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            OpCode::Display => "Show matrices",
            OpCode::Add => "Add matrices",
            OpCode::Multiply => "Multiply matrices",
            OpCode::Transpose => "Transpose the first matrix",
            OpCode::Trace => "Trace of the first matrix",
            OpCode::Recreate => "Create new matrices",
        }
    }
}
