//! Normalizing pipeline for text that mixes tag markup and legacy color codes.
//!
//! Input may be written entirely in angle-bracket markup (`<red>Hi</red>`),
//! entirely in legacy codes (`&cHi`), or as a mix of both. A [`Formatter`]
//! chooses how to read it:
//!
//! - [`Formatter::MarkupOnly`] parses markup; legacy codes stay text
//! - [`Formatter::LegacyOnly`] parses legacy codes; tags stay text
//! - [`Formatter::Universal`] rewrites everything into markup first
//!
//! # Usage
//!
//! ```
//! use formatter::{Formatter, Pipeline};
//!
//! let styled = Formatter::Universal
//!     .format_default("<bold><red>hi</red></bold> &cworld")
//!     .unwrap();
//! assert_eq!(styled.text(), "hi world");
//! let world = styled.style_at(3).color.map(|color| color.to_rgb());
//! assert_eq!(world, Some((0xff, 0x55, 0x55)));
//!
//! let markup = Pipeline::global().to_markup("&cHello").unwrap();
//! assert_eq!(markup, "<#ff5555>Hello</#ff5555>");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod hook;
pub mod pipeline;
pub mod sanitize;
pub mod scanner;
pub mod split;
pub mod transcode;

// Re-export main types at crate root
pub use config::FormatterConfig;
pub use engine::{Engines, LegacyEngine, MarkupEngine};
pub use error::{EngineError, FormatError, ParseFormatterError};
pub use formatter::{Formatter, Strategy};
pub use hook::{Audience, Console, FormatContext, PlaceholderHook, Placeholders};
pub use pipeline::Pipeline;
pub use scanner::{TagScanner, has_legacy_codes, has_markup_tags};
pub use split::SegmentSplitter;
pub use transcode::SegmentTranscoder;
