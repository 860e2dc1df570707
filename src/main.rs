//! SciCalc - Scientific Calculator
//!
//! Evaluates keypad-style expressions from the command line or stdin.
//!
//! # Usage
//!
//! ```bash
//! scicalc "2^10" "ans/4"
//! printf 'sin(30)\n:rad\nsin(pi/2)\n' | scicalc
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use scicalc::{
    calculator::{Calculator, CalculatorConfig},
    error::Result,
    session::Session,
    AngleMode,
};
use tracing_subscriber::EnvFilter;

/// Scientific calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Expressions to evaluate in order; reads lines from stdin when omitted
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Start in radian mode instead of degrees
    #[arg(short, long)]
    radians: bool,

    /// Log evaluation steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "scicalc=debug" } else { "scicalc=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mode = if args.radians {
        AngleMode::Radians
    } else {
        AngleMode::Degrees
    };
    let calculator = Calculator::with_config(CalculatorConfig::new().with_angle_mode(mode));
    let mut session = Session::new(calculator, io::stdout().lock(), io::stderr().lock());

    let summary = if args.expressions.is_empty() {
        if io::stdin().is_terminal() {
            eprintln!("Reading expressions from stdin (Ctrl-D to finish)");
        }
        session.run(io::stdin().lock())?
    } else {
        for expression in &args.expressions {
            session.handle_line(expression)?;
        }
        session.finish()?
    };

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
