//! Format chat and UI text written in tag markup, legacy color codes, or both.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`styled`]: the styled text model and the two dialect engines
//! - [`formatter`]: scanning, transcoding and the formatting strategies
//!
//! ```
//! use tagblend::prelude::*;
//!
//! let styled = Formatter::Universal.format_default("&6&lGold <italic>rush").unwrap();
//! assert_eq!(styled.text(), "Gold rush");
//! assert!(styled.style_at(0).decorations.contains(Decorations::BOLD));
//! ```

pub use formatter;
pub use styled;

pub use formatter::{FormatError, Formatter, FormatterConfig, Pipeline};
pub use styled::StyledText;

/// Common imports for formatting text.
pub mod prelude {
    pub use formatter::{
        Audience, Console, FormatContext, FormatError, Formatter, FormatterConfig, Pipeline,
        PlaceholderHook, Placeholders,
    };
    pub use styled::{Color, Decorations, NamedColor, Style, StyledText};
}
