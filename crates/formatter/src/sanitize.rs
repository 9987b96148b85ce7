//! Escape handling for markup text.
//!
//! The markup serializer protects `\`, `<`, `>` and `&` with a backslash so
//! that literal text survives a reparse. When its output is spliced back into
//! a larger markup string, those escapes are removed again: they would
//! otherwise stop the surrounding markup engine from seeing characters that
//! were meant literally, such as an `&` that begins a legacy code.

use std::borrow::Cow;

use styled::markup::{ESCAPE_CHAR, is_escapable};

pub use styled::markup::escape;

/// Remove one level of serializer escaping.
///
/// Every `\` followed by an escapable character is dropped and the character
/// kept. Any other `\` (including a trailing one) stays. Returns the input
/// unchanged, without allocating, when it contains no `\`.
///
/// ```
/// use formatter::sanitize::unescape;
///
/// assert_eq!(unescape(r"\<red\> \& \\"), r"<red> & \");
/// assert_eq!(unescape(r"path\to\file"), r"path\to\file");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPE_CHAR) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHAR {
            if let Some(&next) = chars.peek() {
                if is_escapable(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }

    Cow::Owned(out)
}
