use crate::color::Color;
use crate::style::{Decorations, Style};
use crate::text::StyledText;

use super::{ColorFormat, LegacyDialect};

/// Serialize styled text into legacy text.
///
/// A color code clears decorations, so removing a decoration while keeping
/// the color re-emits the color and the remaining decorations. Dropping the
/// color altogether emits a reset.
pub(super) fn serialize(dialect: &LegacyDialect, styled: &StyledText) -> String {
    let mut out = String::with_capacity(styled.len() + 8);
    let mut current = Style::default();

    for (text, style) in styled.segments() {
        if style != current {
            let lost_color = current.color.is_some() && style.color.is_none();
            let lost_decorations = !style.decorations.contains(current.decorations);

            if lost_color || lost_decorations {
                if style.color.is_none() {
                    write_code(&mut out, dialect.character, 'r');
                }
                current = Style::default();
            }

            if let Some(color) = style.color.filter(|color| current.color != Some(*color)) {
                write_color(dialect, &mut out, color);
                current = Style::colored(color);
            }

            for decoration in Decorations::ORDERED {
                if style.decorations.contains(decoration) && !current.decorations.contains(decoration) {
                    if let Some(code) = decoration.code() {
                        write_code(&mut out, dialect.character, code);
                    }
                    current.decorations |= decoration;
                }
            }
        }

        out.push_str(text);
    }

    out
}

fn write_code(out: &mut String, character: char, code: char) {
    out.push(character);
    out.push(code);
}

fn write_color(dialect: &LegacyDialect, out: &mut String, color: Color) {
    match (dialect.color_format, color) {
        (ColorFormat::Hex, color) => {
            out.push(dialect.character);
            out.push(dialect.hex_character);
            out.push_str(color.to_hex().trim_start_matches('#'));
        }
        (ColorFormat::RepeatedHex, Color::Rgb(..)) => {
            write_code(out, dialect.character, 'x');
            for digit in color.to_hex().trim_start_matches('#').chars() {
                write_code(out, dialect.character, digit);
            }
        }
        (_, color) => write_code(out, dialect.character, color.nearest_named().code()),
    }
}
