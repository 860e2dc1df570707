//! WASM bindings for SciCalc.
//!
//! This module provides JavaScript-friendly bindings for the calculator page.
//! The page wires its buttons and keyboard listener to [`WasmCalculator`] and
//! re-renders from the display getters after every call; failures come back
//! as rejected string values the page shows in an alert.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCalculator } from 'scicalc';
//!
//! await init();
//!
//! const calc = new WasmCalculator(true);
//!
//! for (const button of document.querySelectorAll('button')) {
//!   button.addEventListener('click', () => {
//!     try {
//!       calc.press(button.dataset.action ?? button.textContent);
//!     } catch (message) {
//!       alert(message);
//!     }
//!     render(calc);
//!   });
//! }
//!
//! document.addEventListener('keydown', (event) => {
//!   try {
//!     if (calc.key(event.key, event.shiftKey)) event.preventDefault();
//!   } catch (message) {
//!     alert(message);
//!   }
//!   render(calc);
//! });
//! ```

use wasm_bindgen::prelude::*;

use crate::calculator::{Action, Calculator, CalculatorConfig};
use crate::error::CalcError;
use crate::eval::{self, AngleMode};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn angle_mode(degrees: bool) -> AngleMode {
    if degrees {
        AngleMode::Degrees
    } else {
        AngleMode::Radians
    }
}

/// WASM-compatible calculator.
///
/// This struct wraps the native [`Calculator`] and exposes the UI actions and
/// display fields to JavaScript.
#[wasm_bindgen]
pub struct WasmCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a new calculator.
    ///
    /// # Arguments
    /// * `degrees` - Start in degree mode (`true`) or radian mode (`false`)
    #[wasm_bindgen(constructor)]
    pub fn new(degrees: bool) -> WasmCalculator {
        let config = CalculatorConfig::new().with_angle_mode(angle_mode(degrees));
        WasmCalculator {
            calculator: Calculator::with_config(config),
        }
    }

    /// Apply a button press.
    ///
    /// # Arguments
    /// * `tag_or_value` - An action tag such as `"equals"` or `"memory-add"`,
    ///   or literal text to append such as `"7"` or `"sin("`
    #[wasm_bindgen]
    pub fn press(&mut self, tag_or_value: &str) -> Result<(), JsValue> {
        self.calculator
            .apply(Action::from_button(tag_or_value))
            .map_err(to_js)
    }

    /// Apply a key press.
    ///
    /// # Returns
    /// `true` if the key is mapped to an action, `false` if it was ignored.
    #[wasm_bindgen]
    pub fn key(&mut self, key: &str, shift: bool) -> Result<bool, JsValue> {
        match Action::from_key(key, shift) {
            Some(action) => self.calculator.apply(action).map(|_| true).map_err(to_js),
            None => Ok(false),
        }
    }

    /// Expression line (`"0"` when empty).
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.calculator.display().expression
    }

    /// Secondary line (`"ans = …"` or empty).
    #[wasm_bindgen(getter)]
    pub fn answer_line(&self) -> String {
        self.calculator.display().answer_line
    }

    /// Memory indicator.
    #[wasm_bindgen(getter)]
    pub fn memory(&self) -> String {
        self.calculator.display().memory
    }

    /// `DEG` or `RAD`.
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> String {
        self.calculator.angle_mode().label().to_string()
    }
}

/// Evaluate a single expression without any calculator state.
#[wasm_bindgen]
pub fn evaluate(expression: &str, degrees: bool, last_answer: Option<f64>) -> Result<f64, JsValue> {
    eval::evaluate(expression, angle_mode(degrees), last_answer).map_err(to_js)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
