//! Span type for styled regions in styled text.

use crate::style::Style;

/// A styled region within styled text.
///
/// Spans reference byte positions in the plain text (with markup stripped).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive) in the plain text.
    pub start: usize,
    /// End byte offset (exclusive) in the plain text.
    pub end: usize,
    /// Style to apply to this region.
    pub style: Style,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_contains() {
        let span = Span::new(5, 10, Style::default());
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn empty_span_contains_nothing() {
        let empty = Span::new(5, 5, Style::default());
        assert!(!empty.contains(4));
        assert!(!empty.contains(5));
    }
}
