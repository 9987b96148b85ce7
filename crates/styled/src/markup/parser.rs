//! Main markup parser.
//!
//! Combines the lexer and tag resolution to produce [`StyledText`].

use unicode_segmentation::UnicodeSegmentation;

use crate::color::Color;
use crate::style::Style;
use crate::text::StyledText;

use super::lexer::{Lexer, Token};
use super::tag::{TagContent, is_known_name, tag_key};

/// Parses tag markup into styled text.
///
/// Parsing is total: unknown tags, malformed tags and unmatched closing
/// tags never fail the parse.
///
/// # Examples
///
/// ```
/// use styled::markup::parse;
///
/// let styled = parse("<bold>Hello</bold> World");
/// assert_eq!(styled.text(), "Hello World");
/// assert_eq!(styled.spans().len(), 1);
/// ```
pub fn parse(input: &str) -> StyledText {
    let mut parser = Parser::default();
    for token in Lexer::new(input) {
        parser.process_token(token);
    }

    // Close any remaining open tags
    parser.close_all_remaining();
    parser.finish()
}

/// The main parser state.
#[derive(Default)]
struct Parser {
    /// Stack of open tags (for nesting).
    stack: Vec<StackEntry>,
    /// Text runs produced so far, in order.
    runs: Vec<Run>,
}

/// An entry on the tag stack.
#[derive(Clone, Debug)]
struct StackEntry {
    /// Key used to match closing tags.
    key: String,
    /// What the tag contributes to enclosed text.
    kind: EntryKind,
    /// Index of the first run produced while this tag was open.
    first_run: usize,
}

#[derive(Clone, Debug)]
enum EntryKind {
    Style(Style),
    Gradient(Vec<Color>),
}

/// A run of text with the style in effect when it was read.
#[derive(Clone, Debug)]
struct Run {
    text: String,
    style: Style,
    /// Stack index of the gradient that still has to color this run.
    gradient: Option<usize>,
}

impl Parser {
    /// Process a single token.
    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::Escaped(c) => self.push_text(c.encode_utf8(&mut [0; 4])),
            Token::OpenTag { raw, content } => self.process_open_tag(raw, content),
            Token::CloseTag { raw, name } => self.process_close_tag(raw, name),
        }
    }

    /// Process an opening tag. Unresolvable tags are kept as text.
    fn process_open_tag(&mut self, raw: &str, content: &str) {
        match TagContent::parse(content) {
            Ok(TagContent::Color(color)) => {
                self.push_entry(content, EntryKind::Style(Style::colored(color)));
            }
            Ok(TagContent::Decoration(decoration)) => {
                self.push_entry(
                    content,
                    EntryKind::Style(Style::new().with_decorations(decoration)),
                );
            }
            Ok(TagContent::Gradient(stops)) => {
                self.push_entry(content, EntryKind::Gradient(stops));
            }
            Ok(TagContent::Reset) => self.close_all_remaining(),
            Err(_) => self.push_text(raw),
        }
    }

    /// Process a closing tag.
    fn process_close_tag(&mut self, raw: &str, name: &str) {
        if !is_known_name(name.split(':').next().unwrap_or_default()) {
            self.push_text(raw);
            return;
        }

        let key = tag_key(name);
        // Unmatched closing tags are dropped
        if let Some(index) = self.stack.iter().rposition(|entry| entry.key == key) {
            while self.stack.len() > index {
                self.pop_entry();
            }
        }
    }

    fn push_entry(&mut self, content: &str, kind: EntryKind) {
        self.stack.push(StackEntry {
            key: tag_key(content),
            kind,
            first_run: self.runs.len(),
        });
    }

    /// Pop the most recent tag, coloring its text if it is a gradient.
    fn pop_entry(&mut self) {
        let index = self.stack.len().saturating_sub(1);
        match self.stack.pop() {
            Some(StackEntry {
                kind: EntryKind::Gradient(stops),
                first_run,
                ..
            }) => self.apply_gradient(index, &stops, first_run),
            Some(_) | None => {}
        }
    }

    /// Close all remaining open tags.
    fn close_all_remaining(&mut self) {
        while !self.stack.is_empty() {
            self.pop_entry();
        }
    }

    /// The style in effect at the top of the stack, and the gradient owning its color.
    fn current_style(&self) -> (Style, Option<usize>) {
        let mut style = Style::default();
        let mut gradient = None;

        for (index, entry) in self.stack.iter().enumerate() {
            match &entry.kind {
                EntryKind::Style(entry_style) => {
                    style = style.apply(entry_style);
                    if entry_style.color.is_some() {
                        gradient = None;
                    }
                }
                EntryKind::Gradient(stops) => {
                    style.color = stops.first().copied();
                    gradient = Some(index);
                }
            }
        }

        (style, gradient)
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let (style, gradient) = self.current_style();
        self.runs.push(Run {
            text: text.to_string(),
            style,
            gradient,
        });
    }

    /// Recolor the runs a gradient owns, one color per grapheme.
    ///
    /// Positions count every grapheme the gradient encloses, including ones
    /// colored by nested tags, so inner colors do not shift the gradient.
    fn apply_gradient(&mut self, index: usize, stops: &[Color], first_run: usize) {
        let tail = self.runs.split_off(first_run.min(self.runs.len()));
        let total: usize = tail.iter().map(|run| run.text.graphemes(true).count()).sum();
        let denominator = total.saturating_sub(1).max(1) as f32;
        let mut position = 0usize;

        for run in tail {
            if run.gradient != Some(index) {
                position += run.text.graphemes(true).count();
                self.runs.push(run);
                continue;
            }

            for grapheme in run.text.graphemes(true) {
                let color = Color::sample_gradient(stops, position as f32 / denominator);
                self.runs.push(Run {
                    text: grapheme.to_string(),
                    style: Style {
                        color,
                        decorations: run.style.decorations,
                    },
                    gradient: None,
                });
                position += 1;
            }
        }
    }

    fn finish(self) -> StyledText {
        let mut builder = StyledText::builder();
        for run in &self.runs {
            builder.push(&run.text, run.style);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::style::Decorations;

    fn red() -> Option<Color> {
        Some(Color::Named(NamedColor::Red))
    }

    #[test]
    fn parse_plain_text() {
        let styled = parse("Hello World");
        assert_eq!(styled.text(), "Hello World");
        assert!(styled.is_plain());
    }

    #[test]
    fn parse_single_style() {
        let styled = parse("<bold>Hello</bold>");
        assert_eq!(styled.text(), "Hello");
        assert_eq!(styled.spans().len(), 1);
        assert!(styled.spans()[0].style.decorations.contains(Decorations::BOLD));
    }

    #[test]
    fn parse_nested_styles() {
        let styled = parse("<bold><red>hi</red></bold> there");
        assert_eq!(styled.text(), "hi there");
        let style = styled.style_at(0);
        assert_eq!(style.color, red());
        assert!(style.decorations.contains(Decorations::BOLD));
        assert!(styled.style_at(3).is_empty());
    }

    #[test]
    fn inner_color_overrides_outer() {
        let styled = parse("<red>a<blue>b</blue>c</red>");
        assert_eq!(styled.style_at(0).color, red());
        assert_eq!(styled.style_at(1).color, Some(Color::Named(NamedColor::Blue)));
        assert_eq!(styled.style_at(2).color, red());
    }

    #[test]
    fn close_tag_closes_everything_above_it() {
        let styled = parse("<red><bold>a</red>b");
        assert_eq!(styled.text(), "ab");
        assert!(styled.style_at(1).is_empty());
    }

    #[test]
    fn unmatched_close_tag_is_dropped() {
        let styled = parse("a</bold>b");
        assert_eq!(styled.text(), "ab");
        assert!(styled.is_plain());
    }

    #[test]
    fn nameless_closer_is_text() {
        let styled = parse("<red>a</>b");
        assert_eq!(styled.text(), "a</>b");
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.style_at(4).color, red());
    }

    #[test]
    fn padded_tags_are_text() {
        let styled = parse("<red><#fff >x< bold>y<bold >");
        assert_eq!(styled.text(), "<#fff >x< bold>y<bold >");
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.style_at(0).color, red());
    }

    #[test]
    fn alias_close_matches() {
        let styled = parse("<b>a</bold>b");
        assert!(styled.style_at(0).decorations.contains(Decorations::BOLD));
        assert!(styled.style_at(1).is_empty());
    }

    #[test]
    fn unknown_tags_stay_literal() {
        let styled = parse("<player_name> says </player_name>hi");
        assert_eq!(styled.text(), "<player_name> says </player_name>hi");
        assert!(styled.is_plain());
    }

    #[test]
    fn escaped_brackets_are_literal() {
        let styled = parse(r"\<red\>not a tag");
        assert_eq!(styled.text(), "<red>not a tag");
        assert!(styled.is_plain());
    }

    #[test]
    fn reset_closes_everything() {
        let styled = parse("<bold><red>a<reset>b");
        assert!(!styled.style_at(0).is_empty());
        assert!(styled.style_at(1).is_empty());
    }

    #[test]
    fn unclosed_tags_run_to_end() {
        let styled = parse("<red>Hello");
        assert_eq!(styled.spans().len(), 1);
        assert_eq!(styled.spans()[0].end, 5);
    }

    #[test]
    fn hex_color_tag_with_hex_closer() {
        let styled = parse("<#fcfcfc>World</#fcfcfc>!");
        assert_eq!(styled.style_at(0).color, Some(Color::Rgb(252, 252, 252)));
        assert!(styled.style_at(5).is_empty());
    }

    #[test]
    fn gradient_colors_each_grapheme() {
        let styled = parse("<gradient:#000000:#ffffff>abc</gradient>");
        assert_eq!(styled.text(), "abc");
        assert_eq!(styled.style_at(0).color, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(styled.style_at(1).color, Some(Color::Rgb(128, 128, 128)));
        assert_eq!(styled.style_at(2).color, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn gradient_yields_to_inner_color() {
        let styled = parse("<gradient:#000000:#ffffff>a<red>b</red>c</gradient>");
        assert_eq!(styled.style_at(0).color, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(styled.style_at(1).color, red());
        assert_eq!(styled.style_at(2).color, Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn gradient_keeps_decorations() {
        let styled = parse("<bold><gradient:red:blue>ab</gradient></bold>");
        assert!(styled.style_at(0).decorations.contains(Decorations::BOLD));
        assert!(styled.style_at(1).decorations.contains(Decorations::BOLD));
    }

    #[test]
    fn parse_empty_input() {
        let styled = parse("");
        assert!(styled.is_empty());
        assert!(styled.is_plain());
    }
}
