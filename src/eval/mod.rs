//! Expression evaluation.
//!
//! [`evaluate`] runs the whole pipeline:
//!
//! 1. rewrite keypad notation (`×`, `^`, `5!`, `50%`, ...) into canonical form
//! 2. reject any name outside the allow-list
//! 3. parse into an [`Expr`](crate::expr::Expr) tree
//! 4. bind a [`FunctionTable`] to the angle mode and last answer
//! 5. interpret the tree and accept only finite results
//!
//! Evaluation is a pure function of its inputs; committing a result into the
//! calculator state is the caller's job.

mod functions;
mod interpreter;

pub use functions::{factorial, AngleMode, Binding, Function, FunctionTable};
pub use interpreter::interpret;

use tracing::debug;

use crate::error::{CalcError, Result};
use crate::expr;

/// Evaluate a keypad expression to a finite number.
pub fn evaluate(expression: &str, angle_mode: AngleMode, last_answer: Option<f64>) -> Result<f64> {
    let rewritten = expr::rewrite(expression);
    debug!(input = expression, rewritten = %rewritten, "evaluating expression");

    expr::check_identifiers(&rewritten)?;
    let ast = expr::parse(&rewritten)?;

    let table = FunctionTable::new(angle_mode, last_answer);
    let value = interpret(&ast, &table)?;

    if !value.is_finite() {
        return Err(CalcError::non_finite(value));
    }
    debug!(value, "evaluation succeeded");
    Ok(value)
}
