//! Cheap detection of markup tags and legacy codes.
//!
//! The scanner decides which path a piece of text takes through the
//! pipeline. It works on syntax only: `<foo>` counts as a tag whether or not
//! any engine knows a tag called `foo`, and every match is case-insensitive.
//!
//! Two tag patterns exist. The presence pattern answers "is there any tag at
//! all" and may stop at the first `>`. The boundary pattern is used when
//! splitting text and never lets a tag's argument run past a `>`, so tag
//! boundaries are exact.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::FormatterConfig;

/// `<#rgb>`, `<#rrggbb>`, `<name>`, `<name:args>`, `<name=args>` and their
/// `</...>` closers.
static TAG_PRESENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(?:#[0-9a-f]{3,6}|[a-z][a-z0-9_]*(?:[:=].*?)?)>")
        .expect("tag presence pattern is a valid regex")
});

static TAG_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(?:#[0-9a-f]{3,6}|[a-z][a-z0-9_]*(?:[:=][^>]*)?)>")
        .expect("tag boundary pattern is a valid regex")
});

static DEFAULT_SCANNER: Lazy<TagScanner> =
    Lazy::new(|| TagScanner::new(&FormatterConfig::default()));

/// A tag found by [`TagScanner::find_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'t> {
    /// Byte offset of the opening `<`.
    pub start: usize,
    /// Byte offset just past the closing `>`.
    pub end: usize,
    pub text: &'t str,
}

/// Precompiled detectors for one legacy prefix configuration.
#[derive(Debug, Clone)]
pub struct TagScanner {
    legacy: Regex,
}

impl TagScanner {
    /// Build a scanner whose legacy detector uses the configured prefix and
    /// hex-marker characters.
    pub fn new(config: &FormatterConfig) -> Self {
        let legacy = Regex::new(&legacy_pattern(config))
            .expect("legacy pattern is built from escaped literals");
        Self { legacy }
    }

    /// The scanner for the default configuration, compiled once.
    pub fn global() -> &'static TagScanner {
        &DEFAULT_SCANNER
    }

    /// Whether `text` contains at least one tag-shaped substring.
    pub fn has_markup_tags(&self, text: &str) -> bool {
        !text.is_empty() && TAG_PRESENCE.is_match(text)
    }

    /// Whether `text` contains at least one legacy code.
    pub fn has_legacy_codes(&self, text: &str) -> bool {
        !text.is_empty() && self.legacy.is_match(text)
    }

    /// Non-overlapping tags in `text`, left to right.
    pub fn find_tags<'t>(&self, text: &'t str) -> impl Iterator<Item = TagMatch<'t>> + 't {
        TAG_BOUNDARY.find_iter(text).map(|m| TagMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
    }
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new(&FormatterConfig::default())
    }
}

/// `&` followed by a palette digit, decoration, reset or `x`; `&#rrggbb`;
/// or `&x&r&r&g&g&b&b`.
fn legacy_pattern(config: &FormatterConfig) -> String {
    let prefix = regex::escape(config.legacy_character.encode_utf8(&mut [0; 4]));
    let hex = regex::escape(config.hex_character.encode_utf8(&mut [0; 4]));
    format!(
        "(?i){prefix}(?:[0-9a-fk-orx]|{hex}[0-9a-f]{{6}}|x{prefix}[0-9a-f](?:{prefix}[0-9a-f]){{5}})"
    )
}

/// [`TagScanner::has_markup_tags`] on the default scanner.
pub fn has_markup_tags(text: &str) -> bool {
    DEFAULT_SCANNER.has_markup_tags(text)
}

/// [`TagScanner::has_legacy_codes`] on the default scanner.
pub fn has_legacy_codes(text: &str) -> bool {
    DEFAULT_SCANNER.has_legacy_codes(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_markup_tags() {
        assert!(has_markup_tags("<red>Hello"));
        assert!(has_markup_tags("Hello</red>"));
        assert!(has_markup_tags("<#fcfcfc>Hi"));
        assert!(has_markup_tags("<#fff>Hi"));
        assert!(has_markup_tags("<gradient:red:blue>Hi"));
        assert!(has_markup_tags("<click=run>Hi"));
        assert!(has_markup_tags("<RED>Hi"));
        assert!(has_markup_tags("<not_a_real_tag>"));
    }

    #[test]
    fn rejects_non_tags() {
        assert!(!has_markup_tags(""));
        assert!(!has_markup_tags("plain text"));
        assert!(!has_markup_tags("1 < 2 > 0"));
        assert!(!has_markup_tags("<>"));
        assert!(!has_markup_tags("<1abc>"));
        assert!(!has_markup_tags("<#ggg>"));
        assert!(!has_markup_tags("<red"));
    }

    #[test]
    fn detects_legacy_codes() {
        assert!(has_legacy_codes("&cHello"));
        assert!(has_legacy_codes("&CHello"));
        assert!(has_legacy_codes("&lbold"));
        assert!(has_legacy_codes("&r"));
        assert!(has_legacy_codes("&#fcfcfc"));
        assert!(has_legacy_codes("&x&f&c&f&c&f&c"));
    }

    #[test]
    fn rejects_non_codes() {
        assert!(!has_legacy_codes(""));
        assert!(!has_legacy_codes("Tom & Jerry"));
        assert!(!has_legacy_codes("&z"));
        assert!(!has_legacy_codes("&#12"));
        assert!(!has_legacy_codes("end&"));
    }

    #[test]
    fn boundary_stops_at_first_close() {
        let text = "<hover:show_text:'a'>x</hover>";
        let tags: Vec<_> = TagScanner::global().find_tags(text).collect();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].text, "<hover:show_text:'a'>");
        assert_eq!(tags[0].start, 0);
        assert_eq!(tags[1].text, "</hover>");
        assert_eq!(tags[1].end, text.len());
    }

    #[test]
    fn custom_prefix_is_escaped() {
        let scanner = TagScanner::new(&FormatterConfig::default().with_legacy_character('$'));
        assert!(scanner.has_legacy_codes("$cHi"));
        assert!(scanner.has_legacy_codes("$#00ff00Hi"));
        assert!(!scanner.has_legacy_codes("&cHi"));
    }
}
