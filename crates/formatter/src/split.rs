//! Splitting mixed text at tag boundaries.
//!
//! Text that carries both markup tags and legacy codes is cut into an
//! alternating sequence of plain segments and tags. Tags are copied through
//! untouched; each plain segment is transcoded on its own. The result is a
//! single markup string.

use crate::error::Result;
use crate::scanner::{TagMatch, TagScanner};
use crate::transcode::SegmentTranscoder;

/// A piece of split text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Text between tags. Never contains a tag and is never empty.
    Plain(&'t str),
    Tag(TagMatch<'t>),
}


#[derive(Clone, Copy)]
pub struct SegmentSplitter<'a> {
    scanner: &'a TagScanner,
    transcoder: SegmentTranscoder<'a>,
}

impl<'a> SegmentSplitter<'a> {
    pub fn new(scanner: &'a TagScanner, transcoder: SegmentTranscoder<'a>) -> Self {
        Self {
            scanner,
            transcoder,
        }
    }

    /// Cut `text` into plain segments and tags, in order.
    ///
    /// Concatenating the pieces reproduces `text` exactly.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for tag in self.scanner.find_tags(text) {
            if tag.start > cursor {
                segments.push(Segment::Plain(&text[cursor..tag.start]));
            }
            segments.push(Segment::Tag(tag));
            cursor = tag.end;
        }

        if cursor < text.len() {
            segments.push(Segment::Plain(&text[cursor..]));
        }

        segments
    }

    /// Transcode the legacy codes in every plain segment, leaving tags as
    /// they are.
    ///
    /// Fails on the first engine failure; no partial output is returned.
    pub fn convert_legacy_within_markup(&self, text: &str) -> Result<String> {
        let mut out = String::with_capacity(text.len() + text.len() / 2);

        for segment in self.segments(text) {
            match segment {
                Segment::Plain(plain) => out.push_str(&self.transcoder.transcode_segment(plain)?),
                Segment::Tag(tag) => out.push_str(tag.text),
            }
        }

        Ok(out)
    }
}
