//! String rewrites from keypad notation to the canonical evaluable notation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Operand of a postfix `%` or `!`: a numeric literal or a
    /// parenthesized group with no nested parentheses.
    static ref PERCENT: Regex =
        Regex::new(r"(\d*\.?\d+|\([^()]*\))%").expect("valid percent pattern");
    static ref FACTORIAL: Regex =
        Regex::new(r"(\d*\.?\d+|\([^()]*\))!").expect("valid factorial pattern");
}

/// Replace the keypad glyphs with their computable equivalents.
///
/// `×` → `*`, `÷` → `/`, `−` → `-`, `π` → `pi`.
pub fn normalize_operators(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len());
    for ch in expr.chars() {
        match ch {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str("pi"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace every `^` with `**`.
pub fn normalize_power(expr: &str) -> String {
    expr.replace('^', "**")
}

/// Expand trailing `%` into `(x/100)` and trailing `!` into `fact(x)`.
///
/// Rescans until nothing changes. Every pass that rewrites something consumes
/// at least one postfix character, so the loop always ends.
pub fn expand_postfix(expr: &str) -> String {
    let mut current = expr.to_string();
    loop {
        let percent = PERCENT.replace_all(&current, "($1/100)").into_owned();
        let next = FACTORIAL.replace_all(&percent, "fact($1)").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Run all rewrites in the order the evaluator requires.
pub fn rewrite(expr: &str) -> String {
    let expr = normalize_operators(expr);
    let expr = normalize_power(&expr);
    expand_postfix(&expr)
}
