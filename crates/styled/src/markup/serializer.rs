//! Serializer from styled text back to tag markup.

use crate::color::Color;
use crate::style::{Decorations, Style};
use crate::text::StyledText;

use super::escape;

/// A single open tag the serializer is tracking.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Property {
    Color(Color),
    Decoration(Decorations),
}

impl Property {
    fn name(&self) -> String {
        match self {
            Property::Color(Color::Named(named)) => named.name().to_string(),
            Property::Color(color) => color.to_hex(),
            Property::Decoration(decoration) => {
                decoration.tag_name().unwrap_or_default().to_string()
            }
        }
    }
}

/// The tags needed to render `style`, color first.
fn properties(style: &Style) -> Vec<Property> {
    let mut properties = Vec::with_capacity(6);
    if let Some(color) = style.color {
        properties.push(Property::Color(color));
    }
    properties.extend(
        Decorations::ORDERED
            .into_iter()
            .filter(|decoration| style.decorations.contains(*decoration))
            .map(Property::Decoration),
    );
    properties
}

/// Serialize styled text to tag markup.
///
/// Tags still needed by the next run stay open; every tag is closed by the
/// end of the output. Text is escaped so it never reads back as markup.
///
/// # Examples
///
/// ```
/// use styled::markup::{parse, serialize};
///
/// let styled = parse("<red>1 < 2</red>");
/// assert_eq!(serialize(&styled), r"<red>1 \< 2</red>");
/// ```
pub fn serialize(styled: &StyledText) -> String {
    let mut out = String::with_capacity(styled.len() + 16);
    let mut open: Vec<Property> = Vec::new();

    for (text, style) in styled.segments() {
        let wanted = properties(&style);

        // Keep the longest run of open tags the next segment still needs
        let keep = open
            .iter()
            .take_while(|property| wanted.contains(property))
            .count();
        for property in open.drain(keep..).rev() {
            close_tag(&mut out, property);
        }

        for property in wanted {
            if !open.contains(&property) {
                open_tag(&mut out, property);
                open.push(property);
            }
        }

        out.push_str(&escape(text));
    }

    for property in open.drain(..).rev() {
        close_tag(&mut out, property);
    }

    out
}

fn open_tag(out: &mut String, property: Property) {
    out.push('<');
    out.push_str(&property.name());
    out.push('>');
}

fn close_tag(out: &mut String, property: Property) {
    out.push_str("</");
    out.push_str(&property.name());
    out.push('>');
}
