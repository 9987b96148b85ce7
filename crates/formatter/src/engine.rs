//! Dialect engine traits and the bundle the pipeline holds.
//!
//! The pipeline never parses either dialect itself. It asks a
//! [`MarkupEngine`] and two [`LegacyEngine`]s (a permissive reader and a
//! canonical writer) to do so, which lets callers substitute their own.

use std::fmt;

use styled::legacy::LegacyDialect;
use styled::markup::MarkupDialect;
use styled::StyledText;

use crate::config::FormatterConfig;
use crate::error::EngineError;

/// Reads and writes the tag-markup dialect.
pub trait MarkupEngine: Send + Sync {
    fn deserialize(&self, input: &str) -> Result<StyledText, EngineError>;
    fn serialize(&self, styled: &StyledText) -> Result<String, EngineError>;
}

/// Reads and writes the legacy color-code dialect.
pub trait LegacyEngine: Send + Sync {
    fn deserialize(&self, input: &str) -> Result<StyledText, EngineError>;
    fn serialize(&self, styled: &StyledText) -> Result<String, EngineError>;
}

impl MarkupEngine for MarkupDialect {
    fn deserialize(&self, input: &str) -> Result<StyledText, EngineError> {
        Ok(MarkupDialect::deserialize(self, input))
    }

    fn serialize(&self, styled: &StyledText) -> Result<String, EngineError> {
        Ok(MarkupDialect::serialize(self, styled))
    }
}

impl LegacyEngine for LegacyDialect {
    fn deserialize(&self, input: &str) -> Result<StyledText, EngineError> {
        Ok(LegacyDialect::deserialize(self, input))
    }

    fn serialize(&self, styled: &StyledText) -> Result<String, EngineError> {
        Ok(LegacyDialect::serialize(self, styled))
    }
}

/// The three engines a pipeline dispatches to.
pub struct Engines {
    markup: Box<dyn MarkupEngine>,
    compact: Box<dyn LegacyEngine>,
    canonical: Box<dyn LegacyEngine>,
}

impl Engines {
    pub fn new(
        markup: Box<dyn MarkupEngine>,
        compact: Box<dyn LegacyEngine>,
        canonical: Box<dyn LegacyEngine>,
    ) -> Self {
        Self {
            markup,
            compact,
            canonical,
        }
    }

    /// The bundled dialects, configured with the given characters.
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(
            Box::new(MarkupDialect::new()),
            Box::new(config.compact_dialect()),
            Box::new(config.canonical_dialect()),
        )
    }

    pub fn markup(&self) -> &dyn MarkupEngine {
        self.markup.as_ref()
    }

    /// Permissive reader: accepts palette codes and both hex spellings.
    pub fn compact(&self) -> &dyn LegacyEngine {
        self.compact.as_ref()
    }

    /// Writes every color as explicit 6-digit hex.
    pub fn canonical(&self) -> &dyn LegacyEngine {
        self.canonical.as_ref()
    }
}

impl Default for Engines {
    fn default() -> Self {
        Self::from_config(&FormatterConfig::default())
    }
}

impl fmt::Debug for Engines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engines").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_engines_never_fail() {
        let engines = Engines::default();
        let styled = engines.compact().deserialize("&cHello").unwrap();
        assert_eq!(engines.markup().serialize(&styled).unwrap(), "<red>Hello</red>");
        assert_eq!(
            engines.canonical().serialize(&styled).unwrap(),
            "&#ff5555Hello"
        );
    }
}
