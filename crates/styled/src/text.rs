//! StyledText result type.
//!
//! This is what both dialect engines produce when deserializing and consume
//! when serializing.

use crate::span::Span;
use crate::style::Style;

/// Plain text plus the styled regions that decorate it.
///
/// Spans are kept canonical: sorted, non-overlapping, never empty, never
/// unstyled, and adjacent spans with the same style are merged. Two values
/// are therefore equal exactly when they style every byte the same way,
/// regardless of how the source markup nested its tags.
///
/// # Examples
///
/// ```
/// use styled::{Decorations, Style, StyledText};
///
/// let mut builder = StyledText::builder();
/// builder.push("Hello", Style::new().with_decorations(Decorations::BOLD));
/// builder.push(" World", Style::new());
/// let text = builder.build();
///
/// assert_eq!(text.text(), "Hello World");
/// assert_eq!(text.spans().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    /// Plain text with all markup stripped.
    text: String,
    /// Style spans referencing positions in `text`.
    spans: Vec<Span>,
}

impl StyledText {
    /// Create a StyledText from plain text (no spans).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Start building a StyledText run by run.
    pub fn builder() -> StyledTextBuilder {
        StyledTextBuilder::default()
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns true if there are no spans (plain text only).
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over styled segments.
    ///
    /// Yields `(text_slice, style)` for each maximal run of equally styled
    /// text. Unstyled regions are included with an empty style.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator::new(self)
    }

    /// Get the style at a specific byte offset.
    pub fn style_at(&self, offset: usize) -> Style {
        self.spans
            .iter()
            .find(|span| span.contains(offset))
            .map(|span| span.style)
            .unwrap_or_default()
    }
}

/// Accumulates runs of text into a canonical [`StyledText`].
#[derive(Clone, Debug, Default)]
pub struct StyledTextBuilder {
    text: String,
    spans: Vec<Span>,
}

impl StyledTextBuilder {
    /// Append `text` rendered with `style`.
    pub fn push(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }

        let start = self.text.len();
        self.text.push_str(text);
        let end = self.text.len();

        if style.is_empty() {
            return;
        }

        match self.spans.last_mut() {
            Some(last) if last.end == start && last.style == style => last.end = end,
            _ => self.spans.push(Span::new(start, end, style)),
        }
    }

    /// Finish building.
    pub fn build(self) -> StyledText {
        StyledText {
            text: self.text,
            spans: self.spans,
        }
    }
}

/// Iterator over styled segments in StyledText.
pub struct SegmentIterator<'a> {
    styled: &'a StyledText,
    pos: usize,
    next_span: usize,
}

impl<'a> SegmentIterator<'a> {
    fn new(styled: &'a StyledText) -> Self {
        Self {
            styled,
            pos: 0,
            next_span: 0,
        }
    }
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, Style);

    fn next(&mut self) -> Option<Self::Item> {
        let text = &self.styled.text;
        if self.pos >= text.len() {
            return None;
        }

        match self.styled.spans.get(self.next_span) {
            // Inside the next span
            Some(span) if span.start <= self.pos => {
                self.pos = span.end;
                self.next_span += 1;
                Some((&text[span.start..span.end], span.style))
            }
            // Unstyled gap before the next span
            Some(span) => {
                let start = self.pos;
                self.pos = span.start;
                Some((&text[start..span.start], Style::default()))
            }
            // Unstyled tail
            None => {
                let start = self.pos;
                self.pos = text.len();
                Some((&text[start..], Style::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, NamedColor};
    use crate::style::Decorations;

    fn bold() -> Style {
        Style::new().with_decorations(Decorations::BOLD)
    }

    #[test]
    fn styled_text_plain() {
        let styled = StyledText::plain("Hello World");
        assert_eq!(styled.text(), "Hello World");
        assert!(styled.is_plain());
    }

    #[test]
    fn builder_merges_adjacent_equal_styles() {
        let mut builder = StyledText::builder();
        builder.push("He", bold());
        builder.push("llo", bold());
        builder.push("", Style::colored(NamedColor::Red));
        builder.push(" World", Style::new());
        let styled = builder.build();

        assert_eq!(styled.spans(), &[Span::new(0, 5, bold())]);
    }

    #[test]
    fn builder_keeps_gapped_spans_apart() {
        let mut builder = StyledText::builder();
        builder.push("a", bold());
        builder.push("b", Style::new());
        builder.push("c", bold());
        assert_eq!(builder.build().spans().len(), 2);
    }

    #[test]
    fn style_at() {
        let mut builder = StyledText::builder();
        builder.push("Hello", Style::colored(NamedColor::Red));
        builder.push(" World", Style::new());
        let styled = builder.build();

        assert_eq!(styled.style_at(0).color, Some(Color::Named(NamedColor::Red)));
        assert!(styled.style_at(6).color.is_none());
    }

    #[test]
    fn segments_iterator() {
        let mut builder = StyledText::builder();
        builder.push("Plain ", Style::new());
        builder.push("Hello", bold());
        builder.push(" World", Style::new());
        let styled = builder.build();

        let segments: Vec<_> = styled.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], ("Plain ", Style::new()));
        assert_eq!(segments[1], ("Hello", bold()));
        assert_eq!(segments[2], (" World", Style::new()));
    }
}
