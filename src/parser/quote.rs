//! Quote tracking for inline comment removal.
//!
//! Finds the first comment marker that is not inside a single- or
//! double-quoted run on the same line. Quotes do not span lines.

use super::classify::COMMENT_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Stateless quote analysis.
pub struct QuoteTracker;

impl QuoteTracker {
    /// Byte offset of the first comment marker outside quotes.
    ///
    /// Inside a quoted run the other quote kind is inert and a backslash
    /// escapes the next character.
    pub fn unquoted_marker(line: &str) -> Option<usize> {
        let mut state = Quote::None;
        let mut escaped = false;

        for (i, ch) in line.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match (state, ch) {
                (Quote::None, c) if c == COMMENT_MARKER => return Some(i),
                (Quote::None, '\'') => state = Quote::Single,
                (Quote::None, '"') => state = Quote::Double,
                (Quote::Single, '\'') | (Quote::Double, '"') => state = Quote::None,
                (Quote::Single | Quote::Double, '\\') => escaped = true,
                _ => {}
            }
        }
        None
    }

    /// Drop an inline comment and trailing whitespace from a code line.
    pub fn strip_inline_comment(line: &str) -> &str {
        match Self::unquoted_marker(line) {
            Some(pos) => line[..pos].trim_end(),
            None => line.trim_end(),
        }
    }
}
