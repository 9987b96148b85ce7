//! Rewriting one plain-text segment from legacy codes into markup.

use std::borrow::Cow;

use crate::engine::{LegacyEngine, MarkupEngine};
use crate::error::Result;
use crate::sanitize::unescape;
use crate::scanner::TagScanner;

/// Converts legacy codes in a tag-free segment into equivalent markup.
#[derive(Clone, Copy)]
pub struct SegmentTranscoder<'a> {
    scanner: &'a TagScanner,
    markup: &'a dyn MarkupEngine,
    legacy: &'a dyn LegacyEngine,
}

impl<'a> SegmentTranscoder<'a> {
    pub fn new(
        scanner: &'a TagScanner,
        markup: &'a dyn MarkupEngine,
        legacy: &'a dyn LegacyEngine,
    ) -> Self {
        Self {
            scanner,
            markup,
            legacy,
        }
    }

    /// Transcode `segment`, which must not contain any markup tag.
    ///
    /// A segment without legacy codes is returned as is. Otherwise it is read
    /// by the legacy engine, written by the markup engine, and the markup
    /// engine's escapes are removed so the result splices cleanly into the
    /// surrounding markup.
    pub fn transcode_segment<'t>(&self, segment: &'t str) -> Result<Cow<'t, str>> {
        if !self.scanner.has_legacy_codes(segment) {
            return Ok(Cow::Borrowed(segment));
        }

        log::trace!("transcoding legacy segment {segment:?}");
        let styled = self.legacy.deserialize(segment)?;
        let markup = self.markup.serialize(&styled)?;
        Ok(Cow::Owned(unescape(&markup).into_owned()))
    }
}
