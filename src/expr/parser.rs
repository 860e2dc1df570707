//! Recursive-descent parser for rewritten expressions.

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::lexer::{parse_number, Lexer, Token, TokenKind};
use crate::error::{CalcError, Result};

/// Deepest nesting the parser accepts.
///
/// Every parenthesis, call, sign, exponent, and chained `+ - * /` operator
/// spends one level, which also bounds the height of the resulting tree.
pub const MAX_DEPTH: usize = 256;

/// Parser for arithmetic expressions.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parse the entire input as a single expression.
    pub fn parse(&mut self) -> Result<Expr> {
        if self.current.kind == TokenKind::Eof {
            return Err(CalcError::syntax(self.current.position, "empty expression"));
        }
        let expr = self.parse_sum()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected());
        }
        Ok(expr)
    }

    fn advance(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(CalcError::syntax(
                self.current.position,
                format!("expected {:?}, got {}", kind, self.describe_current()),
            ))
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::syntax(
                self.current.position,
                "expression nested too deeply",
            ));
        }
        Ok(())
    }

    fn describe_current(&self) -> String {
        match self.current.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.current.text),
        }
    }

    fn unexpected(&self) -> CalcError {
        CalcError::syntax(
            self.current.position,
            format!("unexpected {}", self.describe_current()),
        )
    }

    // sum := product (('+' | '-') product)*
    fn parse_sum(&mut self) -> Result<Expr> {
        let entry = self.depth;
        let mut lhs = self.parse_product()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.descend()?;
            self.advance()?;
            let rhs = self.parse_product()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    // product := unary (('*' | '/') unary)*
    fn parse_product(&mut self) -> Result<Expr> {
        let entry = self.depth;
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => {
                    self.depth = entry;
                    return Ok(lhs);
                }
            };
            self.descend()?;
            self.advance()?;
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    // unary := ('-' | '+') unary | power
    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.current.kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return self.parse_power(),
        };
        self.descend()?;
        self.advance()?;
        let operand = self.parse_unary()?;
        self.depth -= 1;
        Ok(Expr::unary(op, operand))
    }

    // power := primary ['**' unary]
    fn parse_power(&mut self) -> Result<Expr> {
        let base = self.parse_primary()?;
        if self.current.kind == TokenKind::StarStar {
            self.descend()?;
            self.advance()?;
            let exponent = self.parse_unary()?;
            self.depth -= 1;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    // primary := number | name ['(' [sum (',' sum)*] ')'] | '(' sum ')'
    fn parse_primary(&mut self) -> Result<Expr> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance()?;
                parse_number(&token.text).map(Expr::Number).ok_or_else(|| {
                    CalcError::syntax(token.position, format!("invalid number '{}'", token.text))
                })
            }
            TokenKind::Identifier => {
                let name = self.advance()?.text;
                if self.current.kind != TokenKind::OpenParen {
                    return Ok(Expr::Name(name));
                }
                self.descend()?;
                self.advance()?;
                let args = self.parse_arguments()?;
                self.depth -= 1;
                Ok(Expr::Call { name, args })
            }
            TokenKind::OpenParen => {
                self.descend()?;
                self.advance()?;
                let inner = self.parse_sum()?;
                self.expect(TokenKind::CloseParen)?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>> {
        let mut args = Vec::new();
        if self.current.kind == TokenKind::CloseParen {
            self.advance()?;
            return Ok(args);
        }
        loop {
            args.push(self.parse_sum()?);
            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                }
                TokenKind::CloseParen => {
                    self.advance()?;
                    return Ok(args);
                }
                _ => {
                    return Err(CalcError::syntax(
                        self.current.position,
                        format!("expected ',' or ')', got {}", self.describe_current()),
                    ));
                }
            }
        }
    }
}
