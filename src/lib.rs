//! # SciCalc
//!
//! A scientific calculator core.
//!
//! This library provides:
//! - An evaluator for keypad-style expressions (`2×π`, `3^2`, `5!`, `50%`)
//! - Trigonometry in degrees or radians, logarithms, factorial, and a few
//!   rounding primitives
//! - A calculator state machine with a memory register and a last answer
//! - A keyboard and button action vocabulary for UI layers
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`expr`] - Rewriting, allow-list validation, and parsing of expressions
//! - [`eval`] - Function table and the tree-walking interpreter
//! - [`calculator`] - Calculator state, actions, and display snapshot
//! - [`session`] - Line-oriented stdin/stdout session (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! scicalc "2^10" "ans/4"
//! echo "sin(30)" | scicalc
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import init, { WasmCalculator } from 'scicalc';
//!
//! await init();
//! const calc = new WasmCalculator(true);
//! calc.press("5");
//! calc.press("factorial");
//! calc.press("equals");
//! calc.expression; // "120"
//! ```
//!
//! ## Evaluation
//!
//! ```
//! use scicalc::{evaluate, AngleMode};
//!
//! assert_eq!(evaluate("5!", AngleMode::Radians, None).unwrap(), 120.0);
//! assert_eq!(evaluate("ans", AngleMode::Radians, Some(7.0)).unwrap(), 7.0);
//! ```

pub mod calculator;
pub mod error;
pub mod eval;
pub mod expr;

#[cfg(feature = "cli")]
pub mod session;

// Re-export main types for convenience
pub use calculator::{Action, Calculator, CalculatorConfig, DisplaySnapshot};
pub use error::{CalcError, Result};
pub use eval::{evaluate, AngleMode};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCalculator;
