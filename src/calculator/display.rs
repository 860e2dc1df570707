//! Rendered calculator outputs and the text form of numbers.

/// Text shown by the memory indicator when the register is empty.
pub const MEMORY_PLACEHOLDER: &str = "--";

/// Everything the UI layer renders after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Expression buffer, or `"0"` when empty
    pub expression: String,
    /// `"ans = <value>"`, or empty before the first result
    pub answer_line: String,
    /// `"M: <value>"`, or `"M: --"` when memory is empty
    pub memory: String,
    /// `DEG` or `RAD`
    pub angle: &'static str,
}

/// Render a number the way it is written back into the expression buffer.
///
/// Shortest round-tripping decimal; exponent form (`1e+21`, `1.5e-7`) outside
/// `[1e-6, 1e21)`. Negative zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(120.0), "120");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_format_zero_and_nonfinite() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
