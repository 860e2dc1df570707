//! UI actions: button tags and the keyboard mapping.

/// One discrete input event from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Literal text appended to the expression (digit, operator, `sin(`, ...)
    Token(String),
    Clear,
    Backspace,
    Equals,
    ToggleSign,
    Percent,
    Factorial,
    Square,
    Power,
    Pi,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ToggleAngle,
}

impl Action {
    /// Parse a named action tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let action = match tag {
            "clear" => Self::Clear,
            "backspace" => Self::Backspace,
            "equals" => Self::Equals,
            "toggle-sign" => Self::ToggleSign,
            "percent" => Self::Percent,
            "factorial" => Self::Factorial,
            "square" => Self::Square,
            "power" => Self::Power,
            "pi" => Self::Pi,
            "memory-clear" => Self::MemoryClear,
            "memory-recall" => Self::MemoryRecall,
            "memory-add" => Self::MemoryAdd,
            "memory-subtract" => Self::MemorySubtract,
            "angle-toggle" => Self::ToggleAngle,
            _ => return None,
        };
        Some(action)
    }

    /// Map a button to its action: a known tag, otherwise its literal value.
    pub fn from_button(tag_or_value: &str) -> Self {
        Self::from_tag(tag_or_value).unwrap_or_else(|| Self::Token(tag_or_value.to_string()))
    }

    /// Map a keyboard key (DOM `KeyboardEvent.key` naming) to an action.
    ///
    /// `m` adds to memory; with shift held it subtracts.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        let action = match key {
            "Enter" | "=" => Self::Equals,
            "Backspace" => Self::Backspace,
            "Escape" | "c" | "C" => Self::Clear,
            "^" => Self::Power,
            "!" => Self::Factorial,
            "%" => Self::Percent,
            "m" | "M" if shift => Self::MemorySubtract,
            "m" | "M" => Self::MemoryAdd,
            "." | "+" | "-" | "*" | "/" | "(" | ")" => Self::Token(key.to_string()),
            _ if key.len() == 1 && key.chars().all(|c| c.is_ascii_digit()) => {
                Self::Token(key.to_string())
            }
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_tags() {
        assert_eq!(Action::from_button("toggle-sign"), Action::ToggleSign);
        assert_eq!(Action::from_button("angle-toggle"), Action::ToggleAngle);
        assert_eq!(Action::from_button("memory-subtract"), Action::MemorySubtract);
        assert_eq!(Action::from_button("7"), Action::Token("7".to_string()));
        assert_eq!(Action::from_button("sin("), Action::Token("sin(".to_string()));
        assert_eq!(Action::from_button("×"), Action::Token("×".to_string()));
    }

    #[test]
    fn test_keys() {
        assert_eq!(Action::from_key("5", false), Some(Action::Token("5".to_string())));
        assert_eq!(Action::from_key("(", false), Some(Action::Token("(".to_string())));
        assert_eq!(Action::from_key("Enter", false), Some(Action::Equals));
        assert_eq!(Action::from_key("=", false), Some(Action::Equals));
        assert_eq!(Action::from_key("Escape", false), Some(Action::Clear));
        assert_eq!(Action::from_key("C", true), Some(Action::Clear));
        assert_eq!(Action::from_key("^", true), Some(Action::Power));
        assert_eq!(Action::from_key("!", true), Some(Action::Factorial));
        assert_eq!(Action::from_key("%", true), Some(Action::Percent));
    }

    #[test]
    fn test_memory_keys_use_shift() {
        assert_eq!(Action::from_key("m", false), Some(Action::MemoryAdd));
        assert_eq!(Action::from_key("M", true), Some(Action::MemorySubtract));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Action::from_key("x", false), None);
        assert_eq!(Action::from_key("Tab", false), None);
        assert_eq!(Action::from_key("12", false), None);
    }
}
