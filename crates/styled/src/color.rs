//! Color types for styled text.
//!
//! Supports the 16 named palette colors shared by both dialects and
//! arbitrary RGB colors written as hex.

use std::fmt;

use phf::phf_map;

use crate::error::ColorParseError;

/// One of the 16 palette colors addressable by a single legacy code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

/// Lookup from tag name to palette color. Aliases map to the same entry.
static NAMED_COLORS: phf::Map<&'static str, NamedColor> = phf_map! {
    "black" => NamedColor::Black,
    "dark_blue" => NamedColor::DarkBlue,
    "dark_green" => NamedColor::DarkGreen,
    "dark_aqua" => NamedColor::DarkAqua,
    "dark_red" => NamedColor::DarkRed,
    "dark_purple" => NamedColor::DarkPurple,
    "gold" => NamedColor::Gold,
    "gray" => NamedColor::Gray,
    "grey" => NamedColor::Gray,
    "dark_gray" => NamedColor::DarkGray,
    "dark_grey" => NamedColor::DarkGray,
    "blue" => NamedColor::Blue,
    "green" => NamedColor::Green,
    "aqua" => NamedColor::Aqua,
    "red" => NamedColor::Red,
    "light_purple" => NamedColor::LightPurple,
    "yellow" => NamedColor::Yellow,
    "white" => NamedColor::White,
};

impl NamedColor {
    /// All palette colors, ordered by legacy code.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Look up a palette color by tag name (case-insensitive, aliases included).
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Look up a palette color by its legacy code character (`0`-`9`, `a`-`f`).
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    /// The canonical tag name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The legacy code character of this color.
    pub fn code(self) -> char {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        char::from_digit(index as u32, 16).unwrap_or('0')
    }

    /// RGB components of this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => (0xaa, 0x00, 0xaa),
            NamedColor::Gold => (0xff, 0xaa, 0x00),
            NamedColor::Gray => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xff),
            NamedColor::Green => (0x55, 0xff, 0x55),
            NamedColor::Aqua => (0x55, 0xff, 0xff),
            NamedColor::Red => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow => (0xff, 0xff, 0x55),
            NamedColor::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A text color: a palette entry or an arbitrary RGB value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette color (e.g. `red`, `dark_aqua`).
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Palette names: `red`, `dark_aqua`, `grey`, etc.
    /// - Hex colors: `#RGB`, `#RRGGBB`
    ///
    /// # Examples
    ///
    /// ```
    /// use styled::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::Named(NamedColor::Red));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// assert_eq!(Color::parse("#f00").unwrap(), Color::Rgb(255, 0, 0));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        NamedColor::from_name(input)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a hex color (without the # prefix).
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .chars()
            .map(Self::parse_hex_digit)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ColorParseError::InvalidHex(format!("#{}", hex)))?;

        match digits.as_slice() {
            // #RGB
            [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
            // #RRGGBB
            [r1, r2, g1, g2, b1, b2] => {
                Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2))
            }
            _ => Err(ColorParseError::InvalidHex(format!("#{}", hex))),
        }
    }

    fn parse_hex_digit(c: char) -> Option<u8> {
        c.to_digit(16).map(|d| d as u8)
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Rgb(r, g, b) => (*r, *g, *b),
            Color::Named(named) => named.rgb(),
        }
    }

    /// Lowercase `#rrggbb` form of this color.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The palette color closest to this one (squared RGB distance).
    pub fn nearest_named(&self) -> NamedColor {
        if let Color::Named(named) = self {
            return *named;
        }

        let (r, g, b) = self.to_rgb();
        let distance = |named: &NamedColor| {
            let (nr, ng, nb) = named.rgb();
            let dr = i32::from(r) - i32::from(nr);
            let dg = i32::from(g) - i32::from(ng);
            let db = i32::from(b) - i32::from(nb);
            dr * dr + dg * dg + db * db
        };

        NamedColor::ALL
            .iter()
            .min_by_key(|named| distance(named))
            .copied()
            .unwrap_or(NamedColor::White)
    }

    /// Linear interpolation between two colors; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
    }

    /// Sample a multi-stop gradient at position `t` (`0.0..=1.0`).
    ///
    /// With a single stop the stop itself is returned.
    pub fn sample_gradient(stops: &[Color], t: f32) -> Option<Color> {
        match stops {
            [] => None,
            [only] => Some(*only),
            _ => {
                let t = t.clamp(0.0, 1.0);
                let segments = (stops.len() - 1) as f32;
                let scaled = t * segments;
                let index = (scaled.floor() as usize).min(stops.len() - 2);
                let local = scaled - index as f32;
                Some(stops[index].lerp(&stops[index + 1], local))
            }
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(..) => f.write_str(&self.to_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_color() {
        assert_eq!(Color::parse("red").unwrap(), Color::Named(NamedColor::Red));
        assert_eq!(
            Color::parse("Dark_Aqua").unwrap(),
            Color::Named(NamedColor::DarkAqua)
        );
        assert_eq!(Color::parse("grey").unwrap(), Color::Named(NamedColor::Gray));
    }

    #[test]
    fn parse_hex_short() {
        assert_eq!(Color::parse("#f00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(Color::parse("#0f0").unwrap(), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn parse_hex_long() {
        assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
        assert_eq!(Color::parse("#FCFCFC").unwrap(), Color::Rgb(252, 252, 252));
    }

    #[test]
    fn parse_rejects_padding() {
        assert!(Color::parse(" red").is_err());
        assert!(Color::parse("#fff ").is_err());
    }

    #[test]
    fn parse_invalid() {
        assert!(Color::parse("notacolor").is_err());
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("#ffff").is_err());
    }

    #[test]
    fn codes_round_trip_through_palette() {
        for named in NamedColor::ALL {
            assert_eq!(NamedColor::from_code(named.code()), Some(named));
        }
        assert_eq!(NamedColor::from_code('C'), Some(NamedColor::Red));
        assert_eq!(NamedColor::from_code('g'), None);
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Color::Named(NamedColor::Red).to_hex(), "#ff5555");
        assert_eq!(Color::Rgb(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
    }

    #[test]
    fn nearest_named_picks_closest() {
        assert_eq!(Color::Rgb(250, 80, 80).nearest_named(), NamedColor::Red);
        assert_eq!(Color::Rgb(2, 2, 2).nearest_named(), NamedColor::Black);
    }

    #[test]
    fn gradient_sampling() {
        let stops = [Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255)];
        assert_eq!(Color::sample_gradient(&stops, 0.0), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(
            Color::sample_gradient(&stops, 1.0),
            Some(Color::Rgb(255, 255, 255))
        );
        assert_eq!(
            Color::sample_gradient(&stops, 0.5),
            Some(Color::Rgb(128, 128, 128))
        );
        assert_eq!(Color::sample_gradient(&[], 0.5), None);
    }
}
