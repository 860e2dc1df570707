//! Line-oriented calculator session for the CLI frontend.
//!
//! Each input line is either a command (`:deg`, `:rad`, `:mc`, `:mr`, `:m+`,
//! `:m-`) or an expression evaluated through one [`Calculator`], so `ans`
//! carries over from line to line.

use std::io::{BufRead, Write};

use tracing::info;

use crate::calculator::{format_number, Action, Calculator, MEMORY_PLACEHOLDER};
use crate::error::{CalcError, Result};
use crate::eval::AngleMode;

/// Outcome counts of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines evaluated successfully
    pub evaluated: usize,
    /// Lines that failed to evaluate
    pub failed: usize,
}

fn command_action(command: &str) -> Option<Action> {
    let action = match command {
        ":mc" => Action::MemoryClear,
        ":m+" => Action::MemoryAdd,
        ":m-" => Action::MemorySubtract,
        _ => return None,
    };
    Some(action)
}

fn io_error(err: std::io::Error) -> CalcError {
    CalcError::Io {
        message: err.to_string(),
    }
}

/// Drives a [`Calculator`] from text lines.
pub struct Session<W: Write, E: Write> {
    calculator: Calculator,
    output: W,
    errors: E,
    summary: SessionSummary,
}

impl<W: Write, E: Write> Session<W, E> {
    /// Create a session writing results to `output` and failures to `errors`.
    pub fn new(calculator: Calculator, output: W, errors: E) -> Self {
        Self {
            calculator,
            output,
            errors,
            summary: SessionSummary::default(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Handle one input line.
    ///
    /// Evaluation failures are reported on the error stream and counted; only
    /// I/O failures are returned.
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        match line {
            ":deg" | ":rad" => {
                let wanted = if line == ":deg" {
                    AngleMode::Degrees
                } else {
                    AngleMode::Radians
                };
                if self.calculator.angle_mode() != wanted {
                    self.calculator.toggle_angle_mode();
                }
                return writeln!(self.output, "{}", wanted).map_err(io_error);
            }
            ":mr" => {
                return match self.calculator.memory() {
                    Some(value) => writeln!(self.output, "{}", format_number(value)),
                    None => writeln!(self.output, "M: {}", MEMORY_PLACEHOLDER),
                }
                .map_err(io_error);
            }
            _ => {}
        }

        if let Some(action) = command_action(line) {
            return match self.calculator.apply(action) {
                Ok(()) => writeln!(self.output, "{}", self.calculator.display().memory)
                    .map_err(io_error),
                Err(err) => self.report(err),
            };
        }

        self.calculator.clear();
        self.calculator.append_token(line);
        match self.calculator.compute_equals() {
            Ok(Some(value)) => {
                self.summary.evaluated += 1;
                writeln!(self.output, "{}", format_number(value)).map_err(io_error)
            }
            Ok(None) => Ok(()),
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: CalcError) -> Result<()> {
        self.summary.failed += 1;
        writeln!(self.errors, "error: {}", err).map_err(io_error)
    }

    /// Handle every line of `input`, then flush the output.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<SessionSummary> {
        for line in input.lines() {
            let line = line.map_err(io_error)?;
            self.handle_line(&line)?;
        }
        self.finish()
    }

    /// Flush the streams and return the counts.
    pub fn finish(&mut self) -> Result<SessionSummary> {
        self.output.flush().map_err(io_error)?;
        self.errors.flush().map_err(io_error)?;
        info!(
            evaluated = self.summary.evaluated,
            failed = self.summary.failed,
            "session finished"
        );
        Ok(self.summary)
    }
}
