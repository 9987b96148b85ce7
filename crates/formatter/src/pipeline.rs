//! The configured formatting pipeline.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use styled::StyledText;

use crate::config::FormatterConfig;
use crate::engine::Engines;
use crate::error::Result;
use crate::hook::FormatContext;
use crate::sanitize::unescape;
use crate::scanner::TagScanner;
use crate::split::SegmentSplitter;
use crate::transcode::SegmentTranscoder;

static GLOBAL: Lazy<Pipeline> = Lazy::new(Pipeline::default);

/// Configuration, compiled scanner and engines, shared by every formatting
/// call.
///
/// A pipeline holds no per-call state and can be used from any number of
/// threads at once.
#[derive(Debug)]
pub struct Pipeline {
    config: FormatterConfig,
    scanner: TagScanner,
    engines: Engines,
}

impl Pipeline {
    /// A pipeline using the bundled engines.
    pub fn new(config: FormatterConfig) -> Self {
        Self::with_engines(config, Engines::from_config(&config))
    }

    /// A pipeline using caller-supplied engines.
    pub fn with_engines(config: FormatterConfig, engines: Engines) -> Self {
        Self {
            scanner: TagScanner::new(&config),
            engines,
            config,
        }
    }

    /// The default-configured pipeline, built on first use.
    pub fn global() -> &'static Pipeline {
        &GLOBAL
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub fn scanner(&self) -> &TagScanner {
        &self.scanner
    }

    pub fn engines(&self) -> &Engines {
        &self.engines
    }

    /// Rewrite the section marker to the legacy prefix, if enabled.
    pub fn normalize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let FormatterConfig {
            legacy_character,
            section_character,
            normalize_section_marker,
            ..
        } = self.config;

        if normalize_section_marker
            && section_character != legacy_character
            && text.contains(section_character)
        {
            Cow::Owned(text.replace(section_character, legacy_character.encode_utf8(&mut [0; 4])))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn transcoder(&self) -> SegmentTranscoder<'_> {
        SegmentTranscoder::new(&self.scanner, self.engines.markup(), self.engines.compact())
    }

    pub fn splitter(&self) -> SegmentSplitter<'_> {
        SegmentSplitter::new(&self.scanner, self.transcoder())
    }

    /// Turn any mix of legacy codes and markup tags into pure markup.
    ///
    /// - Tags and codes: each tag-free segment is transcoded in place.
    /// - Tags only: the text is already markup.
    /// - Otherwise: the text is read as legacy, rewritten through the
    ///   canonical legacy form so every color is explicit hex, and written
    ///   as markup with the escapes removed.
    pub fn to_markup(&self, text: &str) -> Result<String> {
        let text = self.normalize(text);
        let has_tags = self.scanner.has_markup_tags(&text);
        let has_legacy = self.scanner.has_legacy_codes(&text);

        match (has_tags, has_legacy) {
            (true, true) => {
                log::trace!("mixed markup and legacy codes, splitting at tags");
                self.splitter().convert_legacy_within_markup(&text)
            }
            (true, false) => {
                log::trace!("markup only, passing through");
                Ok(text.into_owned())
            }
            (false, _) => {
                log::trace!("no markup tags, reading as legacy");
                let styled = self.engines.compact().deserialize(&text)?;
                let canonical = self.engines.canonical().serialize(&styled)?;
                let styled = self.engines.canonical().deserialize(&canonical)?;
                let markup = self.engines.markup().serialize(&styled)?;
                Ok(unescape(&markup).into_owned())
            }
        }
    }

    /// Final markup parse: the context's hook if it has one, else the
    /// markup engine.
    pub(crate) fn parse_markup(&self, ctx: &FormatContext<'_>, markup: &str) -> Result<StyledText> {
        match ctx.hook() {
            Some(hook) => {
                log::debug!("delegating markup to placeholder hook for {}", ctx.audience().name());
                Ok(hook.format(markup, ctx.audience())?)
            }
            None => Ok(self.engines.markup().deserialize(markup)?),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rewrites_section_marker() {
        let pipeline = Pipeline::default();
        assert_eq!(pipeline.normalize("§cHi §lthere"), "&cHi &lthere");
        assert!(matches!(pipeline.normalize("&cHi"), Cow::Borrowed(_)));
    }

    #[test]
    fn normalize_can_be_disabled() {
        let pipeline = Pipeline::new(FormatterConfig::default().with_normalize_section_marker(false));
        assert_eq!(pipeline.normalize("§cHi"), "§cHi");
    }

    #[test]
    fn to_markup_passes_pure_markup_through() {
        let markup = "<red>Hello</red> \\& <unknown>";
        assert_eq!(Pipeline::global().to_markup(markup).unwrap(), markup);
    }

    #[test]
    fn to_markup_canonicalizes_legacy() {
        assert_eq!(
            Pipeline::global().to_markup("&cHello &#fcfcfcWorld").unwrap(),
            "<#ff5555>Hello </#ff5555><#fcfcfc>World</#fcfcfc>"
        );
    }

    #[test]
    fn to_markup_of_plain_text_is_identity() {
        assert_eq!(Pipeline::global().to_markup("just text").unwrap(), "just text");
        assert_eq!(Pipeline::global().to_markup("").unwrap(), "");
    }

    #[test]
    fn to_markup_splits_mixed_input() {
        assert_eq!(
            Pipeline::global().to_markup("<bold>&cHi</bold>").unwrap(),
            "<bold><red>Hi</red></bold>"
        );
    }
}
