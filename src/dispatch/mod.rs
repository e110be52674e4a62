//! Operation dispatch: routes a numeric menu code to the handler that owns it.
//!
//! The chain is an ordered list of handlers, each owning exactly one code. A
//! dispatch walks the list from the head; the first handler whose code matches
//! fires and the walk stops. A code no handler owns is a no-op
//! ([`Outcome::Unrecognized`]).
//!
//! Handlers never mutate the live matrices. The recreate handler returns the
//! new pair in [`Outcome::Replaced`] and the caller assigns it, usually via
//! [`Outcome::apply`].
//!
//! # Example
//! ```rust
//! use matcalc::dispatch::{DispatchContext, HandlerChain, OpCode, Outcome};
//! use matcalc::Matrix;
//! use rand::SeedableRng;
//!
//! let chain = HandlerChain::<i64>::standard();
//! let a = Matrix::create_from_grid(&[[1, 2], [3, 4]]).unwrap();
//! let b = Matrix::create_from_grid(&[[5, 6], [7, 8]]).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut next_size = || Ok::<usize, matcalc::MatrixError>(3);
//! let mut ctx = DispatchContext { rng: &mut rng, next_size: &mut next_size };
//! match chain.dispatch(OpCode::Trace.code(), &a, &b, &mut ctx).unwrap() {
//!     Outcome::Rendered(text) => assert!(text.ends_with("5\n")),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod code;
pub mod handlers;
pub mod outcome;

pub use code::OpCode;
pub use outcome::Outcome;

use crate::core::traits::Cell;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;
use rand::RngCore;
use tracing::{debug, trace};

/// Borrowed operands of one dispatch call.
#[derive(Debug)]
pub struct OperationRequest<'a, T> {
    pub code: i64,
    pub a: &'a Matrix<T>,
    pub b: &'a Matrix<T>,
}

/// Services a handler may need beyond its operands.
pub struct DispatchContext<'a> {
    /// Random source for newly created matrices.
    pub rng: &'a mut dyn RngCore,
    /// Asked for the size of new matrices when the recreate handler fires.
    pub next_size: &'a mut dyn FnMut() -> Result<usize>,
}

/// Handler action.
pub type Action<T> = fn(&OperationRequest<'_, T>, &mut DispatchContext<'_>) -> Result<Outcome<T>>;

/// One node of the chain.
#[derive(Clone)]
pub struct Handler<T> {
    pub code: i64,
    pub name: &'static str,
    pub action: Action<T>,
}

/// Ordered chain of handlers with mutually exclusive codes.
#[derive(Clone)]
pub struct HandlerChain<T> {
    handlers: Vec<Handler<T>>,
}

impl<T: Cell> HandlerChain<T> {
    /// Empty chain: every code is unrecognized.
    pub fn new() -> Self {
        HandlerChain { handlers: Vec::new() }
    }

    /// Display, add, multiply, transpose, trace, recreate.
    pub fn standard() -> Self {
        let handlers = OpCode::ALL
            .into_iter()
            .map(|op| Handler { code: op.code(), name: op.label(), action: handlers::action_for(op) })
            .collect::<Vec<_>>();
        debug!(handlers = handlers.len(), "assembled standard handler chain");
        HandlerChain { handlers }
    }

    /// Append a handler owning `code` at the tail of the chain.
    ///
    /// # Errors
    /// * `MatrixError::DuplicateHandler` if another handler already owns `code`.
    pub fn with_handler(mut self, code: i64, name: &'static str, action: Action<T>) -> Result<Self> {
        if self.owns(code) {
            return Err(MatrixError::DuplicateHandler(code));
        }
        self.handlers.push(Handler { code, name, action });
        Ok(self)
    }

    pub fn owns(&self, code: i64) -> bool {
        self.handlers.iter().any(|h| h.code == code)
    }

    /// Handlers in chain order.
    pub fn handlers(&self) -> &[Handler<T>] {
        &self.handlers
    }

    /// Route `code` to its handler.
    ///
    /// # Returns
    /// * `Ok(Outcome::Unrecognized)` if no handler owns `code`
    /// * `Ok(outcome)` of the handler that fired
    /// * `Err(MatrixError)` for errors the handler does not recover from
    pub fn dispatch(
        &self,
        code: i64,
        a: &Matrix<T>,
        b: &Matrix<T>,
        ctx: &mut DispatchContext<'_>,
    ) -> Result<Outcome<T>> {
        self.handle(&OperationRequest { code, a, b }, ctx)
    }

    pub fn handle(&self, req: &OperationRequest<'_, T>, ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
        match self.handlers.iter().find(|h| h.code == req.code) {
            Some(handler) => {
                debug!(code = req.code, handler = handler.name, "dispatching");
                (handler.action)(req, ctx)
            }
            None => {
                trace!(code = req.code, "no handler owns code");
                Ok(Outcome::Unrecognized)
            }
        }
    }
}

impl<T: Cell> Default for HandlerChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
