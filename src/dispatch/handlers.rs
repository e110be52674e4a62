//! Actions of the built-in handlers.
//!
//! Each action receives the request and the dispatch context and returns an
//! [`Outcome`]. Size mismatches from `add`/`multiply`, and overflow from
//! `add`/`multiply`/`trace`, are turned into [`Outcome::Recovered`] here so the
//! session keeps going; any other error propagates.

use crate::core::traits::Cell;
use crate::dispatch::{Action, DispatchContext, OpCode, OperationRequest, Outcome};
use crate::error::{MatrixError, Result};
use crate::matrix::{self, Matrix};
use tracing::{debug, warn};

/// Action implementing a built-in operation.
pub fn action_for<T: Cell>(op: OpCode) -> Action<T> {
    match op {
        OpCode::Display => display,
        OpCode::Add => add,
        OpCode::Multiply => multiply,
        OpCode::Transpose => transpose,
        OpCode::Trace => trace,
        OpCode::Recreate => recreate,
    }
}

fn recover<T, V>(result: Result<V>, render: impl FnOnce(V) -> String) -> Result<Outcome<T>>
where
    T: Cell,
{
    match result {
        Ok(value) => Ok(Outcome::Rendered(render(value))),
        Err(err @ (MatrixError::SizeMismatch { .. } | MatrixError::Overflow { .. })) => {
            warn!(%err, "operation failed, continuing");
            Ok(Outcome::Recovered(err))
        }
        Err(err) => Err(err),
    }
}

fn display<T: Cell>(req: &OperationRequest<'_, T>, _ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    Ok(Outcome::Rendered(format!("First matrix:\n{}\nSecond matrix:\n{}", req.a, req.b)))
}

fn add<T: Cell>(req: &OperationRequest<'_, T>, _ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    recover(matrix::add(req.a, req.b), |m| format!("Sum of matrices:\n{m}"))
}

fn multiply<T: Cell>(req: &OperationRequest<'_, T>, _ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    recover(matrix::multiply(req.a, req.b), |m| format!("Product of matrices:\n{m}"))
}

fn transpose<T: Cell>(req: &OperationRequest<'_, T>, _ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    let t = matrix::transpose(req.a);
    Ok(Outcome::Rendered(format!("Transposed first matrix:\n{t}")))
}

fn trace<T: Cell>(req: &OperationRequest<'_, T>, _ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    recover(matrix::trace(req.a), |t| format!("Trace of the first matrix: {t}\n"))
}

fn recreate<T: Cell>(_req: &OperationRequest<'_, T>, ctx: &mut DispatchContext<'_>) -> Result<Outcome<T>> {
    let size = (ctx.next_size)()?;
    let a = Matrix::create_random(size, &mut *ctx.rng);
    let b = Matrix::create_random(size, &mut *ctx.rng);
    debug!(size, "recreated matrices");
    Ok(Outcome::Replaced { a, b })
}
