//! Expression front end: rewriting, validation, and parsing.
//!
//! The calculator keypad produces text in a human-friendly notation
//! (`2×π`, `3^2`, `5!`, `50%`). Before anything is evaluated the text is
//! rewritten into a canonical form, checked against the name allow-list, and
//! parsed into an [`Expr`] tree.
//!
//! # Grammar (after rewriting)
//!
//! ```text
//! sum       = product { ('+' | '-') product }
//! product   = unary { ('*' | '/') unary }
//! unary     = ('-' | '+') unary | power
//! power     = primary [ '**' unary ]
//! primary   = number | name [ '(' [ sum { ',' sum } ] ')' ] | '(' sum ')'
//!
//! number    = digit+ ['.' digit*] [exponent] | '.' digit+ [exponent]
//! exponent  = ('e' | 'E') ['+' | '-'] digit+
//! name      = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! `**` binds tighter than unary minus, so `-2**2` is `-4`.
//!
//! # Rewrites
//!
//! | Input | Rewritten |
//! |-------|-----------|
//! | `×` `÷` `−` | `*` `/` `-` |
//! | `π` | `pi` |
//! | `^` | `**` |
//! | `x%` | `(x/100)` |
//! | `x!` | `fact(x)` |

mod ast;
mod lexer;
mod parser;
mod rewrite;
mod validate;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use rewrite::{expand_postfix, normalize_operators, normalize_power, rewrite};
pub use validate::{check_identifiers, is_allowed, ALLOWED_NAMES};

use crate::error::Result;

/// Parse an already rewritten expression into an AST.
pub fn parse(input: &str) -> Result<Expr> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}
