//! Style types for styled text.
//!
//! A Style combines an optional color with a set of text decorations.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text decorations shared by both dialects.
    ///
    /// # Example
    ///
    /// ```
    /// use styled::Decorations;
    ///
    /// let mut decorations = Decorations::empty();
    /// decorations |= Decorations::BOLD;
    /// assert!(decorations.contains(Decorations::BOLD));
    /// assert!(!decorations.contains(Decorations::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Legacy code `k`.
        const OBFUSCATED    = 0b0000_0001;
        /// Legacy code `l`.
        const BOLD          = 0b0000_0010;
        /// Legacy code `m`.
        const STRIKETHROUGH = 0b0000_0100;
        /// Legacy code `n`.
        const UNDERLINED    = 0b0000_1000;
        /// Legacy code `o`.
        const ITALIC        = 0b0001_0000;
    }
}

/// Tag name and legacy code of each single decoration, in legacy code order.
const DECORATION_TABLE: [(Decorations, &str, char); 5] = [
    (Decorations::OBFUSCATED, "obfuscated", 'k'),
    (Decorations::BOLD, "bold", 'l'),
    (Decorations::STRIKETHROUGH, "strikethrough", 'm'),
    (Decorations::UNDERLINED, "underlined", 'n'),
    (Decorations::ITALIC, "italic", 'o'),
];

impl Decorations {
    /// Single decorations in legacy code order (`k` through `o`).
    pub const ORDERED: [Decorations; 5] = [
        Decorations::OBFUSCATED,
        Decorations::BOLD,
        Decorations::STRIKETHROUGH,
        Decorations::UNDERLINED,
        Decorations::ITALIC,
    ];

    /// Look up a single decoration by tag name or alias.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            "bold" | "b" => Some(Decorations::BOLD),
            "italic" | "i" | "em" => Some(Decorations::ITALIC),
            "underlined" | "u" => Some(Decorations::UNDERLINED),
            "strikethrough" | "st" => Some(Decorations::STRIKETHROUGH),
            "obfuscated" | "obf" => Some(Decorations::OBFUSCATED),
            _ => None,
        }
    }

    /// Look up a single decoration by legacy code (`k`-`o`, case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        DECORATION_TABLE
            .iter()
            .find(|(_, _, c)| *c == code)
            .map(|(decoration, _, _)| *decoration)
    }

    /// Canonical tag name of a single decoration.
    ///
    /// Returns `None` when `self` is empty or holds more than one flag.
    pub fn tag_name(self) -> Option<&'static str> {
        DECORATION_TABLE
            .iter()
            .find(|(decoration, _, _)| *decoration == self)
            .map(|(_, name, _)| *name)
    }

    /// Legacy code of a single decoration.
    pub fn code(self) -> Option<char> {
        DECORATION_TABLE
            .iter()
            .find(|(decoration, _, _)| *decoration == self)
            .map(|(_, _, code)| *code)
    }
}

/// Complete style specification: color plus decorations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Text decorations.
    pub decorations: Decorations,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with only a color.
    pub fn colored(color: impl Into<Color>) -> Self {
        Self {
            color: Some(color.into()),
            decorations: Decorations::empty(),
        }
    }

    /// Returns this style with `decorations` added.
    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations |= decorations;
        self
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }

    /// Apply another style on top of this one.
    ///
    /// A color in `other` overrides the color in `self`.
    /// Decorations are OR'd together.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            decorations: self.decorations | other.decorations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn decoration_lookup() {
        assert_eq!(Decorations::from_tag_name("b"), Some(Decorations::BOLD));
        assert_eq!(Decorations::from_tag_name("em"), Some(Decorations::ITALIC));
        assert_eq!(Decorations::from_tag_name("blink"), None);
        assert_eq!(Decorations::from_code('L'), Some(Decorations::BOLD));
        assert_eq!(Decorations::from_code('r'), None);
    }

    #[test]
    fn decoration_names_and_codes() {
        for decoration in Decorations::ORDERED {
            let name = decoration.tag_name().unwrap();
            assert_eq!(Decorations::from_tag_name(name), Some(decoration));
            let code = decoration.code().unwrap();
            assert_eq!(Decorations::from_code(code), Some(decoration));
        }
        assert_eq!((Decorations::BOLD | Decorations::ITALIC).tag_name(), None);
    }

    #[test]
    fn style_apply() {
        let base = Style::colored(NamedColor::Red).with_decorations(Decorations::BOLD);
        let overlay = Style::colored(Color::Rgb(1, 2, 3)).with_decorations(Decorations::ITALIC);

        let combined = base.apply(&overlay);
        assert_eq!(combined.color, Some(Color::Rgb(1, 2, 3)));
        assert!(combined.decorations.contains(Decorations::BOLD | Decorations::ITALIC));

        let keeps_color = base.apply(&Style::new());
        assert_eq!(keeps_color.color, Some(Color::Named(NamedColor::Red)));
    }

    #[test]
    fn style_is_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::colored(NamedColor::Red).is_empty());
        assert!(!Style::new().with_decorations(Decorations::BOLD).is_empty());
    }
}
