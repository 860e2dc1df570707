//! Allow-list check on the identifiers of a rewritten expression.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CalcError, Result};

/// Every name an expression may mention.
pub const ALLOWED_NAMES: [&str; 19] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "ln", "log", "exp", "abs", "floor",
    "ceil", "round", "pow", "fact", "ans", "pi", "e",
];

lazy_static! {
    static ref IDENTIFIER: Regex =
        Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("valid identifier pattern");
}

/// Check whether `name` is in [`ALLOWED_NAMES`].
pub fn is_allowed(name: &str) -> bool {
    ALLOWED_NAMES.contains(&name)
}

/// Reject the expression if any identifier-shaped substring is not allowed.
///
/// This is a purely lexical filter: arity, ranges, and bracket balance are
/// left to the parser and interpreter.
pub fn check_identifiers(expr: &str) -> Result<()> {
    match IDENTIFIER
        .find_iter(expr)
        .map(|m| m.as_str())
        .find(|name| !is_allowed(name))
    {
        Some(name) => Err(CalcError::invalid_identifier(name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_expression() {
        assert!(check_identifiers("2+sin(1)").is_ok());
        assert!(check_identifiers("fact(5)*pi+e-ans").is_ok());
        assert!(check_identifiers("1+2").is_ok());
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert_eq!(
            check_identifiers("2+xyz(1)"),
            Err(CalcError::invalid_identifier("xyz"))
        );
    }

    #[test]
    fn test_reports_first_offender() {
        assert_eq!(
            check_identifiers("foo+sin(bar)"),
            Err(CalcError::invalid_identifier("foo"))
        );
    }

    #[test]
    fn test_exponent_literals() {
        // `1e+21` only exposes the allowed name `e`; `2e3` exposes `e3`.
        assert!(check_identifiers("1e+21").is_ok());
        assert_eq!(
            check_identifiers("2e3"),
            Err(CalcError::invalid_identifier("e3"))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(
            check_identifiers("SIN(1)"),
            Err(CalcError::invalid_identifier("SIN"))
        );
    }
}
