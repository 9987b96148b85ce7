//! The tag markup dialect.
//!
//! Tags are written in angle brackets: `<red>`, `<#fcfcfc>`, `<bold>`,
//! `<gradient:red:blue>`, closed with `</name>`. A backslash escapes the
//! four control characters `\`, `<`, `>` and `&`.

mod lexer;
mod parser;
mod serializer;
mod tag;

use std::borrow::Cow;

pub use lexer::{Lexer, Token};
pub use parser::parse;
pub use serializer::serialize;
pub use tag::{TagContent, is_known_name, tag_key};

use crate::text::StyledText;

/// The escape character of the markup dialect.
pub const ESCAPE_CHAR: char = '\\';

/// Characters the serializer escapes.
pub const ESCAPABLE: [char; 4] = ['\\', '<', '>', '&'];

/// Returns true if `c` is one of the escapable control characters.
pub fn is_escapable(c: char) -> bool {
    ESCAPABLE.contains(&c)
}

/// Escape the four control characters with a backslash.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(&ESCAPABLE[..]) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if is_escapable(c) {
            result.push(ESCAPE_CHAR);
        }
        result.push(c);
    }
    Cow::Owned(result)
}

/// The markup dialect engine.
///
/// Stateless; a single instance can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupDialect;

impl MarkupDialect {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }

    /// Parse markup into styled text.
    pub fn deserialize(&self, input: &str) -> StyledText {
        parse(input)
    }

    /// Serialize styled text into markup, escaping control characters.
    pub fn serialize(&self, styled: &StyledText) -> String {
        serialize(styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_borrows_when_clean() {
        assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn escape_all_control_characters() {
        assert_eq!(escape(r"<a> & \"), r"\<a\> \& \\");
    }
}
