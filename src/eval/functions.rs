//! Numeric semantics of every allowed name.

use std::f64::consts::{E, PI};
use std::fmt;

use crate::error::{CalcError, Result};

/// Unit used by the trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Display label (`DEG` / `RAD`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "DEG",
            Self::Radians => "RAD",
        }
    }

    fn to_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => x.to_radians(),
            Self::Radians => x,
        }
    }

    fn from_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => x.to_degrees(),
            Self::Radians => x,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A callable entry of the function table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Ln,
    Log,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Pow,
    Fact,
}

impl Function {
    /// Look up a function by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sqrt" => Self::Sqrt,
            "ln" => Self::Ln,
            "log" => Self::Log,
            "exp" => Self::Exp,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "pow" => Self::Pow,
            "fact" => Self::Fact,
            _ => return None,
        };
        Some(function)
    }

    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Pow => 2,
            _ => 1,
        }
    }
}

/// A name resolved against the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    Value(f64),
    Function(Function),
}

/// Function table bound to one evaluation's angle mode and last answer.
///
/// Cheap to build; the evaluator creates a fresh one per call so mode changes
/// take effect immediately.
#[derive(Debug, Clone, Copy)]
pub struct FunctionTable {
    angle_mode: AngleMode,
    last_answer: Option<f64>,
}

impl FunctionTable {
    pub fn new(angle_mode: AngleMode, last_answer: Option<f64>) -> Self {
        Self {
            angle_mode,
            last_answer,
        }
    }

    /// Resolve a name to a constant or a function.
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        match name {
            "pi" => Some(Binding::Value(PI)),
            "e" => Some(Binding::Value(E)),
            "ans" => Some(Binding::Value(self.last_answer.unwrap_or(0.0))),
            _ => Function::from_name(name).map(Binding::Function),
        }
    }

    /// Apply a function to already evaluated arguments.
    ///
    /// The caller checks arity beforehand.
    pub fn call(&self, function: Function, args: &[f64]) -> Result<f64> {
        let x = args.first().copied().unwrap_or(f64::NAN);
        let mode = self.angle_mode;
        let value = match function {
            Function::Sin => mode.to_radians(x).sin(),
            Function::Cos => mode.to_radians(x).cos(),
            Function::Tan => mode.to_radians(x).tan(),
            Function::Asin => mode.from_radians(x.asin()),
            Function::Acos => mode.from_radians(x.acos()),
            Function::Atan => mode.from_radians(x.atan()),
            Function::Sqrt => x.sqrt(),
            Function::Ln => x.ln(),
            Function::Log => x.log10(),
            Function::Exp => x.exp(),
            Function::Abs => x.abs(),
            Function::Floor => x.floor(),
            Function::Ceil => x.ceil(),
            Function::Round => round_half_up(x),
            Function::Pow => x.powf(args.get(1).copied().unwrap_or(f64::NAN)),
            Function::Fact => factorial(x)?,
        };
        Ok(value)
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Factorial of a non-negative integer as an iterative product.
///
/// Stops once the product overflows; the evaluator then reports the
/// infinite result.
pub fn factorial(n: f64) -> Result<f64> {
    if !n.is_finite() {
        return Err(CalcError::InvalidFactorialOperand { value: n });
    }
    if n.fract() != 0.0 {
        return Err(CalcError::NonIntegerFactorial { value: n });
    }
    if n < 0.0 {
        return Err(CalcError::NegativeFactorial { value: n });
    }

    let mut product = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n && product.is_finite() {
        product *= i;
        i += 1.0;
    }
    Ok(product)
}
