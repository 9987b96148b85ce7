//! Lexer for tag markup.
//!
//! Converts input text into a stream of tokens. The lexer never fails: a `<`
//! that does not open a tag-shaped sequence is handed back as text.
//!
//! A tag is `<`, an optional `/`, then either `#` with 3 to 6 hex digits or
//! a name of ASCII letters, digits and `_` starting with a letter, which may
//! be followed by `:` or `=` and arguments, then `>`. Anything else between
//! brackets (`</>`, `<#fff >`, `<bold >`) is text.

use super::is_escapable;

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq)]
pub enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag. `raw` includes the brackets, `content` does not: `<red>` / `red`.
    OpenTag { raw: &'a str, content: &'a str },
    /// Closing tag. `raw` includes the brackets, `name` excludes `</`: `</red>` / `red`.
    CloseTag { raw: &'a str, name: &'a str },
    /// Escaped control character (`\<` yields `<`).
    Escaped(char),
}

/// Whether `content`, the text between `<` and `>`, has the shape of a tag.
pub fn is_tag_shaped(content: &str) -> bool {
    let body = content.strip_prefix('/').unwrap_or(content);

    if let Some(hex) = body.strip_prefix('#') {
        return hex.chars().all(|c| c.is_ascii_hexdigit()) && (3..=6).contains(&hex.len());
    }

    let name_end = body.find([':', '=']).unwrap_or(body.len());
    let mut name = body[..name_end].chars();
    matches!(name.next(), Some(c) if c.is_ascii_alphabetic())
        && name.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Lexer for tag markup text.
///
/// # Examples
///
/// ```
/// use styled::markup::Lexer;
///
/// let lexer = Lexer::new("<bold>Hello</bold>");
/// let tokens: Vec<_> = lexer.collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume text until we hit a special character or end of input.
    fn consume_text(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let len = self
            .remaining()
            .find(['<', '\\'])
            .unwrap_or(self.remaining().len());
        self.pos += len;

        if self.pos > start {
            Some(&self.input[start..self.pos])
        } else {
            None
        }
    }

    /// Consume a tag, or a lone `<` when the text up to the next `>` is not
    /// tag-shaped.
    fn consume_tag(&mut self) -> Token<'a> {
        let tag_start = self.pos;
        let after_open = &self.input[tag_start + 1..];

        let close = after_open
            .find('>')
            .filter(|&i| is_tag_shaped(&after_open[..i]));

        let Some(content_len) = close else {
            self.pos += 1;
            return Token::Text(&self.input[tag_start..self.pos]);
        };

        let content = &after_open[..content_len];
        self.pos = tag_start + 1 + content_len + 1;
        let raw = &self.input[tag_start..self.pos];

        match content.strip_prefix('/') {
            Some(name) => Token::CloseTag { raw, name },
            None => Token::OpenTag { raw, content },
        }
    }

    /// Consume an escape sequence, or a lone backslash.
    fn consume_escape(&mut self) -> Token<'a> {
        let escape_start = self.pos;
        self.pos += 1; // consume '\'

        match self.peek() {
            Some(c) if is_escapable(c) => {
                self.pos += c.len_utf8();
                Token::Escaped(c)
            }
            _ => Token::Text(&self.input[escape_start..self.pos]),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peek()? {
            '<' => Some(self.consume_tag()),
            '\\' => Some(self.consume_escape()),
            _ => self.consume_text().map(Token::Text),
        }
    }
}
