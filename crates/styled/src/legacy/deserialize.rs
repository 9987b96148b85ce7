use nom::{
    IResult,
    branch::alt,
    character::complete::{anychar, char, one_of, satisfy},
    combinator::map_opt,
    multi::count,
    sequence::preceded,
};

use crate::color::{Color, NamedColor};
use crate::style::{Decorations, Style};
use crate::text::StyledText;

use super::LegacyDialect;

/// A recognized legacy code.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Code {
    Color(Color),
    Decoration(Decorations),
    Reset,
    /// A lone `x` that does not start a full repeated-character hex color.
    Ignored,
}

impl Code {
    /// Map the character after the prefix to a code.
    fn from_char(c: char) -> Option<Self> {
        if let Some(named) = NamedColor::from_code(c) {
            return Some(Code::Color(Color::Named(named)));
        }
        if let Some(decoration) = Decorations::from_code(c) {
            return Some(Code::Decoration(decoration));
        }
        match c {
            'r' | 'R' => Some(Code::Reset),
            'x' | 'X' => Some(Code::Ignored),
            _ => None,
        }
    }

    /// Fold this code into the running style.
    fn apply(self, style: Style) -> Style {
        match self {
            Code::Color(color) => Style::colored(color),
            Code::Decoration(decoration) => style.with_decorations(decoration),
            Code::Reset => Style::default(),
            Code::Ignored => style,
        }
    }
}

fn hex_digit(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_hexdigit())(input)
}

/// Six hex digits to an RGB color.
fn rgb_from_digits(digits: Vec<char>) -> Option<Color> {
    let hex: String = digits.into_iter().collect();
    Color::parse_hex(&hex).ok()
}

/// Parse one code starting at the prefix character.
fn parse_code<'a>(dialect: &LegacyDialect, input: &'a str) -> IResult<&'a str, Code> {
    let prefix = dialect.character;

    // &x&r&r&g&g&b&b
    let repeated_hex = map_opt(
        preceded(
            char(prefix),
            preceded(one_of("xX"), count(preceded(char(prefix), hex_digit), 6)),
        ),
        |digits| rgb_from_digits(digits).map(Code::Color),
    );

    // &#rrggbb
    let hex = map_opt(
        preceded(char(prefix), preceded(char(dialect.hex_character), count(hex_digit, 6))),
        |digits| rgb_from_digits(digits).map(Code::Color),
    );

    // &c, &l, &r, ...
    let single = map_opt(preceded(char(prefix), anychar), Code::from_char);

    alt((repeated_hex, hex, single))(input)
}

/// Parse legacy text into styled text.
pub(super) fn deserialize(dialect: &LegacyDialect, input: &str) -> StyledText {
    let mut builder = StyledText::builder();
    let mut style = Style::default();
    let mut rest = input;

    while let Some(index) = rest.find(dialect.character) {
        builder.push(&rest[..index], style);

        match parse_code(dialect, &rest[index..]) {
            Ok((remaining, code)) => {
                style = code.apply(style);
                rest = remaining;
            }
            Err(_) => {
                // Not a code: keep the prefix character as text
                let after = index + dialect.character.len_utf8();
                builder.push(&rest[index..after], style);
                rest = &rest[after..];
            }
        }
    }

    builder.push(rest, style);
    builder.build()
}
