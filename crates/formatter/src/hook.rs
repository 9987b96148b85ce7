//! Audience-aware placeholder expansion.
//!
//! A [`PlaceholderHook`] takes over the final markup parse when one is
//! supplied with a [`FormatContext`]. It sees the fully transcoded markup
//! and the audience the text is being rendered for.

use std::collections::HashMap;
use std::fmt;

use styled::markup::{ESCAPE_CHAR, Lexer, MarkupDialect, Token};
use styled::StyledText;

use crate::error::EngineError;
use crate::sanitize::escape;

/// Whoever a piece of text is rendered for.
pub trait Audience: Send + Sync {
    fn name(&self) -> &str;
}

/// The audience used when none is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Audience for Console {
    fn name(&self) -> &str {
        "CONSOLE"
    }
}

impl Audience for String {
    fn name(&self) -> &str {
        self
    }
}

/// Parses markup on behalf of an audience.
pub trait PlaceholderHook: Send + Sync {
    fn format(&self, markup: &str, audience: &dyn Audience) -> Result<StyledText, EngineError>;
}

/// Per-call context: the audience and an optional placeholder hook.
#[derive(Clone, Copy)]
pub struct FormatContext<'a> {
    audience: &'a dyn Audience,
    hook: Option<&'a dyn PlaceholderHook>,
}

impl<'a> FormatContext<'a> {
    pub fn new(audience: &'a dyn Audience) -> Self {
        Self {
            audience,
            hook: None,
        }
    }

    pub fn with_hook(mut self, hook: &'a dyn PlaceholderHook) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn audience(&self) -> &'a dyn Audience {
        self.audience
    }

    pub fn hook(&self) -> Option<&'a dyn PlaceholderHook> {
        self.hook
    }
}

impl Default for FormatContext<'static> {
    fn default() -> Self {
        Self::new(&Console)
    }
}

impl fmt::Debug for FormatContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatContext")
            .field("audience", &self.audience.name())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

type Resolver = Box<dyn Fn(&dyn Audience) -> String + Send + Sync>;

/// A hook that replaces argument-less tags such as `<player>` with a value
/// resolved for the audience, then parses the result as markup.
///
/// Resolved values are escaped, so a value can never inject tags.
///
/// ```
/// use formatter::hook::{Console, Placeholders, PlaceholderHook};
///
/// let placeholders = Placeholders::new().with("viewer", |audience| audience.name().to_string());
/// let styled = placeholders.format("<red>Hi <viewer></red>", &Console).unwrap();
/// assert_eq!(styled.text(), "Hi CONSOLE");
/// ```
#[derive(Default)]
pub struct Placeholders {
    resolvers: HashMap<String, Resolver>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a placeholder. Names are matched case-insensitively.
    pub fn with<F>(mut self, name: &str, resolver: F) -> Self
    where
        F: Fn(&dyn Audience) -> String + Send + Sync + 'static,
    {
        self.resolvers
            .insert(name.to_ascii_lowercase(), Box::new(resolver));
        self
    }

    /// Substitute every registered placeholder tag in `markup`.
    ///
    /// Escaped sequences such as `\<player>` are not tags and are copied
    /// through unchanged.
    pub fn expand(&self, markup: &str, audience: &dyn Audience) -> String {
        let mut out = String::with_capacity(markup.len());

        for token in Lexer::new(markup) {
            match token {
                Token::OpenTag { raw, content } => {
                    match self.resolvers.get(&content.to_ascii_lowercase()) {
                        Some(resolver) => out.push_str(&escape(&resolver(audience))),
                        None => out.push_str(raw),
                    }
                }
                Token::CloseTag { raw, .. } => out.push_str(raw),
                Token::Escaped(c) => {
                    out.push(ESCAPE_CHAR);
                    out.push(c);
                }
                Token::Text(text) => out.push_str(text),
            }
        }

        out
    }
}

impl PlaceholderHook for Placeholders {
    fn format(&self, markup: &str, audience: &dyn Audience) -> Result<StyledText, EngineError> {
        let expanded = self.expand(markup, audience);
        log::trace!("expanded placeholders for {}: {expanded:?}", audience.name());
        Ok(MarkupDialect.deserialize(&expanded))
    }
}

impl fmt::Debug for Placeholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.resolvers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styled::{Color, NamedColor};

    fn placeholders() -> Placeholders {
        Placeholders::new()
            .with("player", |audience| audience.name().to_string())
            .with("server", |_| "<lobby>".to_string())
    }

    #[test]
    fn default_context_targets_console() {
        let ctx = FormatContext::default();
        assert_eq!(ctx.audience().name(), "CONSOLE");
        assert!(ctx.hook().is_none());
    }

    #[test]
    fn expands_for_audience() {
        let audience = String::from("Steve");
        assert_eq!(
            placeholders().expand("<gold>Hello <player>!", &audience),
            "<gold>Hello Steve!"
        );
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(placeholders().expand("<PLAYER>", &Console), "CONSOLE");
    }

    #[test]
    fn closing_and_unknown_tags_are_kept() {
        assert_eq!(
            placeholders().expand("<red>x</red></player><other>", &Console),
            "<red>x</red></player><other>"
        );
    }

    #[test]
    fn escaped_tags_are_not_expanded() {
        assert_eq!(placeholders().expand(r"\<player>", &Console), r"\<player>");

        let styled = placeholders().format(r"\<player> is <player>", &Console).unwrap();
        assert_eq!(styled.text(), "<player> is CONSOLE");
    }

    #[test]
    fn unrelated_escapes_survive_expansion() {
        let markup = r"a \& b \\ c \> <player>";
        assert_eq!(
            placeholders().expand(markup, &Console),
            r"a \& b \\ c \> CONSOLE"
        );
    }

    #[test]
    fn values_cannot_inject_tags() {
        let styled = placeholders()
            .format("<red><server></red>", &Console)
            .unwrap();
        assert_eq!(styled.text(), "<lobby>");
        assert_eq!(styled.style_at(0).color, Some(Color::Named(NamedColor::Red)));
    }
}
