//! Calculator state and its mutation operations.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{CalcError, Result};
use crate::eval::{evaluate, AngleMode};

use super::action::Action;
use super::display::{format_number, DisplaySnapshot, MEMORY_PLACEHOLDER};

lazy_static! {
    /// An expression that is just a (possibly negated) numeric literal.
    static ref PLAIN_NUMBER: Regex =
        Regex::new(r"^-?(\d+\.?\d*|\.\d+)$").expect("valid number pattern");
}

/// Configuration for the calculator.
#[derive(Debug, Clone, Default)]
pub struct CalculatorConfig {
    /// Angle mode at startup.
    pub angle_mode: AngleMode,
}

impl CalculatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial angle mode.
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }
}

/// A calculator: expression buffer, memory register, angle mode, last answer.
///
/// Memory and the last answer are always finite when present.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    expression: String,
    memory: Option<f64>,
    angle_mode: AngleMode,
    last_answer: Option<f64>,
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator with a custom configuration.
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            angle_mode: config.angle_mode,
            ..Self::default()
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn last_answer(&self) -> Option<f64> {
        self.last_answer
    }

    // ============ Buffer editing ============

    pub fn clear(&mut self) {
        self.expression.clear();
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.expression.pop();
    }

    pub fn append_token(&mut self, token: &str) {
        self.expression.push_str(token);
    }

    /// Flip the sign of a plain number, or wrap anything else in `(-1)*(...)`.
    pub fn toggle_sign(&mut self) {
        if self.expression.is_empty() {
            return;
        }
        if PLAIN_NUMBER.is_match(&self.expression) {
            if let Some(rest) = self.expression.strip_prefix('-') {
                self.expression = rest.to_string();
            } else {
                self.expression.insert(0, '-');
            }
        } else {
            self.expression = format!("(-1)*({})", self.expression);
        }
    }

    pub fn insert_percent_suffix(&mut self) {
        self.expression.push('%');
    }

    pub fn insert_factorial_suffix(&mut self) {
        self.expression.push('!');
    }

    pub fn insert_square(&mut self) {
        self.expression.push_str("^2");
    }

    pub fn insert_power_operator(&mut self) {
        self.expression.push('^');
    }

    pub fn insert_pi(&mut self) {
        self.expression.push('π');
    }

    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = self.angle_mode.toggled();
        debug!(mode = %self.angle_mode, "angle mode toggled");
    }

    // ============ Evaluation ============

    /// Evaluate the buffer (or the last answer when the buffer is empty).
    ///
    /// On success the result becomes the last answer and replaces the buffer.
    /// On failure the buffer is cleared and the error is returned. Returns
    /// `Ok(None)` when there is nothing to evaluate.
    pub fn compute_equals(&mut self) -> Result<Option<f64>> {
        let source = if self.expression.is_empty() {
            match self.last_answer {
                Some(answer) => format_number(answer),
                None => return Ok(None),
            }
        } else {
            self.expression.clone()
        };

        match evaluate(&source, self.angle_mode, self.last_answer) {
            Ok(value) => {
                self.last_answer = Some(value);
                self.expression = format_number(value);
                debug!(value, "result committed");
                Ok(Some(value))
            }
            Err(err) => {
                warn!(expression = %source, error = %err, "evaluation failed");
                self.expression.clear();
                Err(err)
            }
        }
    }

    // ============ Memory ============

    pub fn memory_clear(&mut self) {
        self.memory = None;
    }

    /// Append the memory value to the buffer, if there is one.
    pub fn memory_recall(&mut self) {
        if let Some(value) = self.memory {
            self.expression.push_str(&format_number(value));
        }
    }

    /// Add the buffer's value (0 when empty) to memory.
    pub fn memory_add(&mut self) -> Result<f64> {
        self.accumulate_memory(1.0)
    }

    /// Subtract the buffer's value (0 when empty) from memory.
    pub fn memory_subtract(&mut self) -> Result<f64> {
        self.accumulate_memory(-1.0)
    }

    fn accumulate_memory(&mut self, sign: f64) -> Result<f64> {
        let source = if self.expression.is_empty() {
            "0"
        } else {
            self.expression.as_str()
        };

        let value = evaluate(source, self.angle_mode, self.last_answer).map_err(|err| {
            warn!(expression = %source, error = %err, "memory operation failed");
            err
        })?;

        let updated = self.memory.unwrap_or(0.0) + sign * value;
        if !updated.is_finite() {
            warn!(updated, "memory overflow");
            return Err(CalcError::non_finite(updated));
        }
        self.memory = Some(updated);
        debug!(memory = updated, "memory updated");
        Ok(updated)
    }

    // ============ Dispatch ============

    /// Run one UI action.
    ///
    /// Errors come back after the operation's own recovery has been applied.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Token(token) => self.append_token(&token),
            Action::Clear => self.clear(),
            Action::Backspace => self.backspace(),
            Action::Equals => {
                self.compute_equals()?;
            }
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.insert_percent_suffix(),
            Action::Factorial => self.insert_factorial_suffix(),
            Action::Square => self.insert_square(),
            Action::Power => self.insert_power_operator(),
            Action::Pi => self.insert_pi(),
            Action::MemoryClear => self.memory_clear(),
            Action::MemoryRecall => self.memory_recall(),
            Action::MemoryAdd => {
                self.memory_add()?;
            }
            Action::MemorySubtract => {
                self.memory_subtract()?;
            }
            Action::ToggleAngle => self.toggle_angle_mode(),
        }
        Ok(())
    }

    /// Snapshot of everything the UI renders.
    pub fn display(&self) -> DisplaySnapshot {
        let expression = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        };
        let answer_line = self
            .last_answer
            .map(|answer| format!("ans = {}", format_number(answer)))
            .unwrap_or_default();
        let memory = format!(
            "M: {}",
            self.memory
                .map(format_number)
                .unwrap_or_else(|| MEMORY_PLACEHOLDER.to_string())
        );

        DisplaySnapshot {
            expression,
            answer_line,
            memory,
            angle: self.angle_mode.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn with_expression(text: &str) -> Calculator {
        let mut calc = Calculator::with_config(
            CalculatorConfig::new().with_angle_mode(AngleMode::Radians),
        );
        calc.append_token(text);
        calc
    }

    #[test]
    fn test_toggle_sign_number() {
        let mut calc = with_expression("5");
        calc.toggle_sign();
        assert_eq!(calc.expression(), "-5");
        calc.toggle_sign();
        assert_eq!(calc.expression(), "5");

        let mut calc = with_expression("2.5");
        calc.toggle_sign();
        assert_eq!(calc.expression(), "-2.5");
    }

    #[test]
    fn test_toggle_sign_wraps_expression() {
        let mut calc = with_expression("2+3");
        calc.toggle_sign();
        assert_eq!(calc.expression(), "(-1)*(2+3)");
        assert_eq!(calc.compute_equals(), Ok(Some(-5.0)));
    }

    #[test]
    fn test_toggle_sign_empty_is_noop() {
        let mut calc = Calculator::new();
        calc.toggle_sign();
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_editing() {
        let mut calc = with_expression("12");
        calc.insert_power_operator();
        calc.append_token("3");
        calc.backspace();
        calc.backspace();
        calc.insert_square();
        assert_eq!(calc.expression(), "12^2");
        calc.insert_pi();
        calc.backspace();
        assert_eq!(calc.expression(), "12^2");
        calc.clear();
        assert_eq!(calc.expression(), "");
        calc.backspace();
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_compute_equals_commits_result() {
        let mut calc = with_expression("5");
        calc.insert_factorial_suffix();
        assert_eq!(calc.compute_equals(), Ok(Some(120.0)));
        assert_eq!(calc.expression(), "120");
        assert_eq!(calc.last_answer(), Some(120.0));

        calc.insert_percent_suffix();
        assert_eq!(calc.compute_equals(), Ok(Some(1.2)));
        assert_eq!(calc.expression(), "1.2");
    }

    #[test]
    fn test_compute_equals_failure_clears_buffer() {
        let mut calc = with_expression("2+xyz(1)");
        assert_eq!(
            calc.compute_equals(),
            Err(CalcError::invalid_identifier("xyz"))
        );
        assert_eq!(calc.expression(), "");
        assert_eq!(calc.last_answer(), None);

        let mut calc = with_expression("1/0");
        assert!(matches!(
            calc.compute_equals(),
            Err(CalcError::NonFiniteResult { .. })
        ));
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_compute_equals_on_empty_buffer() {
        let mut calc = Calculator::new();
        assert_eq!(calc.compute_equals(), Ok(None));
        assert_eq!(calc.expression(), "");

        calc.append_token("7");
        calc.compute_equals().unwrap();
        calc.clear();
        assert_eq!(calc.compute_equals(), Ok(Some(7.0)));
        assert_eq!(calc.expression(), "7");
    }

    #[test]
    fn test_ans_uses_previous_result() {
        let mut calc = with_expression("3*4");
        calc.compute_equals().unwrap();
        calc.clear();
        calc.append_token("ans+1");
        assert_eq!(calc.compute_equals(), Ok(Some(13.0)));
    }

    #[test]
    fn test_angle_mode_takes_effect_immediately() {
        let mut calc = Calculator::new();
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
        calc.append_token("sin(90)");
        assert_abs_diff_eq!(calc.compute_equals().unwrap().unwrap(), 1.0, epsilon = 1e-12);

        calc.toggle_angle_mode();
        calc.clear();
        calc.append_token("sin(90)");
        assert_abs_diff_eq!(
            calc.compute_equals().unwrap().unwrap(),
            0.8939966636,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_memory_add_and_recall() {
        let mut calc = with_expression("3");
        assert_eq!(calc.memory_add(), Ok(3.0));
        assert_eq!(calc.memory(), Some(3.0));
        assert_eq!(calc.expression(), "3");

        calc.clear();
        calc.memory_recall();
        assert_eq!(calc.expression(), "3");
        calc.append_token("+");
        calc.memory_recall();
        assert_eq!(calc.expression(), "3+3");
    }

    #[test]
    fn test_memory_subtract_and_clear() {
        let mut calc = with_expression("10");
        calc.memory_subtract().unwrap();
        assert_eq!(calc.memory(), Some(-10.0));
        calc.clear();
        assert_eq!(calc.memory_add(), Ok(-10.0));

        calc.memory_clear();
        assert_eq!(calc.memory(), None);
        calc.memory_recall();
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_memory_failure_leaves_state() {
        let mut calc = with_expression("2");
        calc.memory_add().unwrap();
        calc.clear();
        calc.append_token("2+");
        assert!(calc.memory_add().is_err());
        assert_eq!(calc.memory(), Some(2.0));
        assert_eq!(calc.expression(), "2+");
    }

    #[test]
    fn test_memory_overflow_rejected() {
        let mut calc = with_expression("1e+308");
        calc.memory_add().unwrap();
        assert!(matches!(
            calc.memory_add(),
            Err(CalcError::NonFiniteResult { .. })
        ));
        assert_eq!(calc.memory(), Some(1e308));
    }

    #[test]
    fn test_recovers_from_deeply_nested_input() {
        let mut calc = with_expression(&"(".repeat(5_000));
        calc.append_token("2");
        calc.append_token(&")".repeat(5_000));
        assert!(matches!(
            calc.compute_equals(),
            Err(CalcError::SyntaxFailure { .. })
        ));
        assert_eq!(calc.expression(), "");

        calc.append_token("1+1");
        assert_eq!(calc.compute_equals(), Ok(Some(2.0)));
    }

    #[test]
    fn test_apply_actions() {
        let mut calc = Calculator::new();
        for tag in ["2", "power", "3", "equals"] {
            calc.apply(Action::from_button(tag)).unwrap();
        }
        assert_eq!(calc.expression(), "8");

        calc.apply(Action::MemoryAdd).unwrap();
        calc.apply(Action::Clear).unwrap();
        calc.apply(Action::MemoryRecall).unwrap();
        calc.apply(Action::Factorial).unwrap();
        assert_eq!(calc.apply(Action::Equals), Ok(()));
        assert_eq!(calc.expression(), "40320");

        calc.apply(Action::Token("+".to_string())).unwrap();
        assert!(calc.apply(Action::Equals).is_err());
        assert_eq!(calc.expression(), "");
    }

    #[test]
    fn test_display_snapshot() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.display(),
            DisplaySnapshot {
                expression: "0".to_string(),
                answer_line: String::new(),
                memory: "M: --".to_string(),
                angle: "DEG",
            }
        );

        calc.append_token("7");
        calc.compute_equals().unwrap();
        calc.memory_add().unwrap();
        calc.toggle_angle_mode();
        let display = calc.display();
        assert_eq!(display.expression, "7");
        assert_eq!(display.answer_line, "ans = 7");
        assert_eq!(display.memory, "M: 7");
        assert_eq!(display.angle, "RAD");
    }
}
