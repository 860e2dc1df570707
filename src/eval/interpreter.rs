//! Tree-walking interpreter over [`Expr`].

use crate::error::{CalcError, Result};
use crate::expr::{Expr, UnaryOp};

use super::functions::{Binding, FunctionTable};

/// Evaluate an expression tree against a function table.
///
/// Intermediate values may be non-finite; the caller checks the final result.
pub fn interpret(expr: &Expr, table: &FunctionTable) -> Result<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Name(name) => match table.lookup(name) {
            Some(Binding::Value(value)) => Ok(value),
            Some(Binding::Function(_)) => Err(CalcError::MissingCall { name: name.clone() }),
            None => Err(CalcError::invalid_identifier(name.as_str())),
        },
        Expr::Call { name, args } => {
            let function = match table.lookup(name) {
                Some(Binding::Function(function)) => function,
                Some(Binding::Value(_)) => {
                    return Err(CalcError::NotCallable { name: name.clone() })
                }
                None => return Err(CalcError::invalid_identifier(name.as_str())),
            };
            if args.len() != function.arity() {
                return Err(CalcError::wrong_arity(
                    name.as_str(),
                    function.arity(),
                    args.len(),
                ));
            }
            let values = args
                .iter()
                .map(|arg| interpret(arg, table))
                .collect::<Result<Vec<f64>>>()?;
            table.call(function, &values)
        }
        Expr::Unary { op, operand } => {
            let value = interpret(operand, table)?;
            Ok(match op {
                UnaryOp::Neg => -value,
                UnaryOp::Plus => value,
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let lhs = interpret(lhs, table)?;
            let rhs = interpret(rhs, table)?;
            Ok(op.apply(lhs, rhs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::AngleMode;
    use crate::expr::parse;

    fn run(input: &str) -> Result<f64> {
        let table = FunctionTable::new(AngleMode::Radians, Some(7.0));
        interpret(&parse(input)?, &table)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(run("1+2*3"), Ok(7.0));
        assert_eq!(run("(1+2)*3"), Ok(9.0));
        assert_eq!(run("-2**2"), Ok(-4.0));
        assert_eq!(run("2**3**2"), Ok(512.0));
        assert_eq!(run("10/4-1"), Ok(1.5));
        assert_eq!(run("ans*2"), Ok(14.0));
    }

    #[test]
    fn test_call_errors() {
        assert_eq!(run("pow(2)"), Err(CalcError::wrong_arity("pow", 2, 1)));
        assert_eq!(run("sin(1,2)"), Err(CalcError::wrong_arity("sin", 1, 2)));
        assert_eq!(
            run("pi(2)"),
            Err(CalcError::NotCallable {
                name: "pi".to_string()
            })
        );
        assert_eq!(
            run("sin+1"),
            Err(CalcError::MissingCall {
                name: "sin".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_name_without_validation() {
        assert_eq!(run("zeta(1)"), Err(CalcError::invalid_identifier("zeta")));
    }

    #[test]
    fn test_nonfinite_intermediates_pass_through() {
        assert_eq!(run("1/0"), Ok(f64::INFINITY));
        assert!(run("sqrt(-1)").unwrap().is_nan());
    }
}
