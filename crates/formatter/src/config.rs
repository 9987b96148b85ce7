//! Pipeline configuration.

use styled::legacy::{ColorFormat, LegacyDialect};

/// Characters and switches the pipeline is built from.
///
/// The defaults match the conventional dialect: `&` introduces a code,
/// `&#` introduces a six-digit hex color, and the section sign `§` is an
/// accepted alternative prefix that gets rewritten to `&` before parsing.
///
/// # Example
///
/// ```
/// use formatter::FormatterConfig;
///
/// let config = FormatterConfig::default().with_normalize_section_marker(false);
/// assert_eq!(config.legacy_character, '&');
/// assert!(!config.normalize_section_marker);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Prefix character of legacy codes.
    pub legacy_character: char,
    /// Character following the prefix in `&#rrggbb` hex codes.
    pub hex_character: char,
    /// Alternative prefix rewritten to `legacy_character` on input.
    pub section_character: char,
    /// Whether `section_character` is rewritten at all.
    pub normalize_section_marker: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            legacy_character: '&',
            hex_character: '#',
            section_character: '§',
            normalize_section_marker: true,
        }
    }
}

impl FormatterConfig {
    pub fn with_legacy_character(mut self, c: char) -> Self {
        self.legacy_character = c;
        self
    }

    pub fn with_hex_character(mut self, c: char) -> Self {
        self.hex_character = c;
        self
    }

    pub fn with_section_character(mut self, c: char) -> Self {
        self.section_character = c;
        self
    }

    pub fn with_normalize_section_marker(mut self, normalize: bool) -> Self {
        self.normalize_section_marker = normalize;
        self
    }

    /// The permissive legacy dialect used to read input.
    ///
    /// Reads all three color spellings and writes RGB colors in the
    /// repeated-character form.
    pub fn compact_dialect(&self) -> LegacyDialect {
        self.dialect(ColorFormat::RepeatedHex)
    }

    /// The legacy dialect that writes every color as `&#rrggbb`.
    pub fn canonical_dialect(&self) -> LegacyDialect {
        self.dialect(ColorFormat::Hex)
    }

    fn dialect(&self, format: ColorFormat) -> LegacyDialect {
        LegacyDialect::builder()
            .character(self.legacy_character)
            .hex_character(self.hex_character)
            .color_format(format)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialects_follow_configured_characters() {
        let config = FormatterConfig::default()
            .with_legacy_character('$')
            .with_hex_character('@');
        let compact = config.compact_dialect();
        assert_eq!(compact.character(), '$');
        assert_eq!(compact.hex_character(), '@');
        assert_eq!(compact.color_format(), ColorFormat::RepeatedHex);
        assert_eq!(config.canonical_dialect().color_format(), ColorFormat::Hex);
    }
}
