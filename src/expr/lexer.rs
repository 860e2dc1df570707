//! Lexer (tokenizer) for rewritten expressions.

use crate::error::{CalcError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Character offset in the rewritten expression (0-indexed)
    pub position: usize,
}

/// Token types in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A function or constant name
    Identifier,
    /// A numeric literal, possibly with an exponent
    Number,
    Plus,
    Minus,
    Star,
    /// `**`
    StarStar,
    Slash,
    OpenParen,
    CloseParen,
    Comma,
    /// End of input
    Eof,
}

/// Lexer for tokenizing expression input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::iter::Enumerate<std::str::Chars<'a>>>,
    len: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().enumerate().peekable(),
            len: input.chars().count(),
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let (position, ch) = match self.chars.peek().copied() {
            Some(next) => next,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    position: self.len,
                });
            }
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '/' => TokenKind::Slash,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ',' => TokenKind::Comma,
            '*' => {
                self.chars.next();
                if let Some(&(_, '*')) = self.chars.peek() {
                    self.chars.next();
                    return Ok(Token {
                        kind: TokenKind::StarStar,
                        text: "**".to_string(),
                        position,
                    });
                }
                return Ok(Token {
                    kind: TokenKind::Star,
                    text: "*".to_string(),
                    position,
                });
            }
            '.' | '0'..='9' => {
                let text = self.read_number();
                return Ok(Token {
                    kind: TokenKind::Number,
                    text,
                    position,
                });
            }
            _ if ch.is_ascii_alphabetic() || ch == '_' => {
                let text = self.read_identifier();
                return Ok(Token {
                    kind: TokenKind::Identifier,
                    text,
                    position,
                });
            }
            _ => {
                return Err(CalcError::syntax(
                    position,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };

        self.chars.next();
        Ok(Token {
            kind,
            text: ch.to_string(),
            position,
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        text
    }

    fn read_digits(&mut self, text: &mut String) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();

        // Integer part
        self.read_digits(&mut text);

        // Decimal part
        if let Some(&(_, '.')) = self.chars.peek() {
            text.push('.');
            self.chars.next();
            self.read_digits(&mut text);
        }

        // Exponent part, only when digits follow: `2e` stays `2` then `e`
        if let Some(&(_, ch)) = self.chars.peek() {
            if ch == 'e' || ch == 'E' {
                let mut ahead = self.chars.clone();
                ahead.next();
                let mut exponent = String::from(ch);
                if let Some(&(_, sign)) = ahead.peek() {
                    if sign == '+' || sign == '-' {
                        exponent.push(sign);
                        ahead.next();
                    }
                }
                if matches!(ahead.peek(), Some(&(_, d)) if d.is_ascii_digit()) {
                    self.chars = ahead;
                    text.push_str(&exponent);
                    self.read_digits(&mut text);
                }
            }
        }

        text
    }
}

/// Parse the text of a [`TokenKind::Number`] token.
pub fn parse_number(text: &str) -> Option<f64> {
    if text == "." {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_lexer_basic() {
        assert_eq!(
            kinds("2+sin(30)"),
            vec![
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::OpenParen,
                TokenKind::Number,
                TokenKind::CloseParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_power_vs_star() {
        assert_eq!(
            kinds("2**3*4"),
            vec![
                TokenKind::Number,
                TokenKind::StarStar,
                TokenKind::Number,
                TokenKind::Star,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_numbers() {
        let tokens = tokenize("1.5 .25 1e+21 3e-7 2.").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["1.5", ".25", "1e+21", "3e-7", "2.", ""]);
        assert_eq!(parse_number("2."), Some(2.0));
        assert_eq!(parse_number(".25"), Some(0.25));
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn test_lexer_dangling_exponent() {
        assert_eq!(
            kinds("2e"),
            vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_lexer_rejects_unknown_character() {
        let err = tokenize("2 $ 3").unwrap_err();
        assert_eq!(err, CalcError::syntax(2, "unexpected character '$'"));
    }
}
