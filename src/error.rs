//! Error types for the SciCalc evaluator and calculator state.
//!
//! This module provides a unified error type [`CalcError`] that covers
//! all error conditions that can occur during rewriting, validation,
//! parsing, and evaluation of an expression.

use thiserror::Error;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Unified error type for all SciCalc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    // ============ Validation Errors ============
    /// Name outside the allow-list
    #[error("Invalid identifier '{name}'")]
    InvalidIdentifier { name: String },

    // ============ Parsing Errors ============
    /// Malformed expression (unbalanced parentheses, dangling operator, ...)
    #[error("Syntax error at position {position}: {message}")]
    SyntaxFailure { position: usize, message: String },

    /// Function called with the wrong number of arguments
    #[error("Function '{name}' expects {expected} argument(s), got {found}")]
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
    },

    /// A constant used with a call argument list, e.g. `pi(2)`
    #[error("'{name}' is not a function")]
    NotCallable { name: String },

    /// A function name used as a value, e.g. `sin + 1`
    #[error("Function '{name}' must be called with arguments")]
    MissingCall { name: String },

    // ============ Evaluation Errors ============
    /// Factorial of NaN or an infinite value
    #[error("Invalid factorial operand: {value}")]
    InvalidFactorialOperand { value: f64 },

    /// Factorial of a value with a fractional part
    #[error("Factorial requires an integer, got {value}")]
    NonIntegerFactorial { value: f64 },

    /// Factorial of a negative integer
    #[error("Factorial is undefined for negative numbers, got {value}")]
    NegativeFactorial { value: f64 },

    /// Evaluation produced NaN or an infinite value
    #[error("Result is not a finite number ({value})")]
    NonFiniteResult { value: f64 },

    // ============ I/O Errors ============
    /// Error reading or writing a CLI session stream
    #[cfg(feature = "cli")]
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl CalcError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }

    /// Create a syntax error
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::SyntaxFailure {
            position,
            message: message.into(),
        }
    }

    /// Create an arity error
    pub fn wrong_arity(name: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::WrongArity {
            name: name.into(),
            expected,
            found,
        }
    }

    /// Create a non-finite result error
    pub fn non_finite(value: f64) -> Self {
        Self::NonFiniteResult { value }
    }
}
