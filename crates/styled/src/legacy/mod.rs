//! The legacy color-code dialect.
//!
//! Styling is written inline as a prefix character followed by a code:
//!
//! - `&0`-`&9`, `&a`-`&f` - palette color (clears decorations)
//! - `&k`-`&o` - obfuscated, bold, strikethrough, underlined, italic
//! - `&r` - reset
//! - `&#rrggbb` - RGB color
//! - `&x&r&r&g&g&b&b` - RGB color, one prefixed digit at a time
//!
//! Every instance reads all of these forms. Instances differ in the prefix
//! and hex-marker characters and in how they write RGB colors back out.

mod deserialize;
mod serialize;

use crate::text::StyledText;

/// How a legacy serializer writes colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// Palette codes only; RGB colors are downsampled to the nearest palette color.
    #[default]
    Named,
    /// Every color, palette colors included, as `&#rrggbb`.
    Hex,
    /// Palette colors as single codes, RGB colors as `&x&r&r&g&g&b&b`.
    RepeatedHex,
}

/// A configured legacy dialect engine.
///
/// # Examples
///
/// ```
/// use styled::legacy::LegacyDialect;
///
/// let canonical = LegacyDialect::canonical();
/// let styled = canonical.deserialize("&cHello");
/// assert_eq!(styled.text(), "Hello");
/// assert_eq!(canonical.serialize(&styled), "&#ff5555Hello");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyDialect {
    character: char,
    hex_character: char,
    color_format: ColorFormat,
}

impl Default for LegacyDialect {
    fn default() -> Self {
        Self {
            character: '&',
            hex_character: '#',
            color_format: ColorFormat::Named,
        }
    }
}

impl LegacyDialect {
    /// Start configuring a dialect (defaults: `&`, `#`, palette colors only).
    pub fn builder() -> LegacyDialectBuilder {
        LegacyDialectBuilder::default()
    }

    /// `&` prefix, writing RGB colors in the repeated-character form.
    pub fn compact() -> Self {
        Self::builder()
            .color_format(ColorFormat::RepeatedHex)
            .build()
    }

    /// `&` prefix, writing every color as explicit 6-digit hex.
    pub fn canonical() -> Self {
        Self::builder().color_format(ColorFormat::Hex).build()
    }

    /// The prefix character that introduces a code.
    pub fn character(&self) -> char {
        self.character
    }

    /// The marker that introduces a 6-digit hex color after the prefix.
    pub fn hex_character(&self) -> char {
        self.hex_character
    }

    /// How colors are written on serialize.
    pub fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Parse legacy text into styled text. Never fails: text that is not a
    /// recognized code is kept as content.
    pub fn deserialize(&self, input: &str) -> StyledText {
        deserialize::deserialize(self, input)
    }

    /// Serialize styled text into legacy text.
    pub fn serialize(&self, styled: &StyledText) -> String {
        serialize::serialize(self, styled)
    }
}

/// Builder for [`LegacyDialect`].
#[derive(Clone, Debug, Default)]
pub struct LegacyDialectBuilder {
    dialect: LegacyDialect,
}

impl LegacyDialectBuilder {
    /// Set the prefix character.
    pub fn character(mut self, character: char) -> Self {
        self.dialect.character = character;
        self
    }

    /// Set the hex-marker character.
    pub fn hex_character(mut self, hex_character: char) -> Self {
        self.dialect.hex_character = hex_character;
        self
    }

    /// Set how colors are written.
    pub fn color_format(mut self, color_format: ColorFormat) -> Self {
        self.dialect.color_format = color_format;
        self
    }

    pub fn build(self) -> LegacyDialect {
        self.dialect
    }
}
