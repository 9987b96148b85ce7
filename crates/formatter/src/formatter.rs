//! The three formatting strategies.

use std::fmt;
use std::str::FromStr;

use styled::StyledText;

use crate::error::{ParseFormatterError, Result};
use crate::hook::FormatContext;
use crate::pipeline::Pipeline;

/// A formatting strategy's entry point.
pub type Strategy = fn(&Pipeline, &FormatContext<'_>, &str) -> Result<StyledText>;

/// How input text is interpreted.
///
/// # Example
///
/// ```
/// use formatter::Formatter;
///
/// let styled = Formatter::Universal.format_default("<bold>&cHi</bold>").unwrap();
/// assert_eq!(styled.text(), "Hi");
///
/// let formatter: Formatter = "legacy".parse().unwrap();
/// assert_eq!(formatter, Formatter::LegacyOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    /// Input is tag markup; legacy codes are plain text.
    MarkupOnly,
    /// Input is legacy codes; tags are plain text.
    LegacyOnly,
    /// Input may mix both.
    Universal,
}

impl Formatter {
    pub const ALL: [Formatter; 3] = [
        Formatter::MarkupOnly,
        Formatter::LegacyOnly,
        Formatter::Universal,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Formatter::MarkupOnly => "MiniMessage",
            Formatter::LegacyOnly => "Legacy Text",
            Formatter::Universal => "Universal",
        }
    }

    pub fn strategy(self) -> Strategy {
        match self {
            Formatter::MarkupOnly => markup_only,
            Formatter::LegacyOnly => legacy_only,
            Formatter::Universal => universal,
        }
    }

    /// Format `text` for the context's audience.
    pub fn format(
        self,
        pipeline: &Pipeline,
        ctx: &FormatContext<'_>,
        text: &str,
    ) -> Result<StyledText> {
        log::debug!("formatting {} bytes with {}", text.len(), self.name());
        (self.strategy())(pipeline, ctx, text)
    }

    /// Format `text` with the global pipeline for the console, without a
    /// placeholder hook.
    pub fn format_default(self, text: &str) -> Result<StyledText> {
        self.format(Pipeline::global(), &FormatContext::default(), text)
    }
}

fn markup_only(pipeline: &Pipeline, ctx: &FormatContext<'_>, text: &str) -> Result<StyledText> {
    let text = pipeline.normalize(text);
    pipeline.parse_markup(ctx, &text)
}

fn legacy_only(pipeline: &Pipeline, _ctx: &FormatContext<'_>, text: &str) -> Result<StyledText> {
    let text = pipeline.normalize(text);
    Ok(pipeline.engines().compact().deserialize(&text)?)
}

fn universal(pipeline: &Pipeline, ctx: &FormatContext<'_>, text: &str) -> Result<StyledText> {
    let markup = pipeline.to_markup(text)?;
    markup_only(pipeline, ctx, &markup)
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formatter {
    type Err = ParseFormatterError;

    /// Accepts the configuration keys `MINIMESSAGE`, `MARKUP`, `LEGACY` and
    /// `UNIVERSAL` as well as the display names, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimessage" | "markup" => Ok(Formatter::MarkupOnly),
            "legacy" | "legacy text" => Ok(Formatter::LegacyOnly),
            "universal" => Ok(Formatter::Universal),
            _ => Err(ParseFormatterError(s.to_string())),
        }
    }
}
