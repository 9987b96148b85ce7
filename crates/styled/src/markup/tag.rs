//! Tag content resolution for tag markup.
//!
//! Resolves the content inside `<...>` against the tag catalog.

use phf::phf_set;

use crate::color::{Color, NamedColor};
use crate::error::TagParseError;
use crate::style::Decorations;

/// Tag names that take arguments or have no color/decoration of their own.
static KEYWORD_TAGS: phf::Set<&'static str> = phf_set! {
    "color",
    "colour",
    "c",
    "gradient",
    "reset",
    "r",
};

/// The result of resolving tag content.
#[derive(Clone, Debug, PartialEq)]
pub enum TagContent {
    /// A color: `<red>`, `<#ff0000>`, `<color:red>`
    Color(Color),
    /// A single decoration: `<bold>`, `<i>`
    Decoration(Decorations),
    /// A color gradient across the enclosed text: `<gradient:red:blue>`
    Gradient(Vec<Color>),
    /// Close everything opened so far: `<reset>`
    Reset,
}

impl TagContent {
    /// Resolve tag content (the text inside `<...>`).
    ///
    /// # Examples
    ///
    /// ```
    /// use styled::markup::TagContent;
    /// use styled::{Color, NamedColor};
    ///
    /// let tag = TagContent::parse("color:red").unwrap();
    /// assert_eq!(tag, TagContent::Color(Color::Named(NamedColor::Red)));
    ///
    /// assert!(TagContent::parse("unknown").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, TagParseError> {
        if content.is_empty() {
            return Err(TagParseError::Empty);
        }

        let mut parts = content.split(':');
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        if name.starts_with('#') {
            no_arguments(&name, &args)?;
            return Ok(TagContent::Color(Color::parse(&name)?));
        }

        if let Some(named) = NamedColor::from_name(&name) {
            no_arguments(&name, &args)?;
            return Ok(TagContent::Color(Color::Named(named)));
        }

        if let Some(decoration) = Decorations::from_tag_name(&name) {
            no_arguments(&name, &args)?;
            return Ok(TagContent::Decoration(decoration));
        }

        match name.as_str() {
            "color" | "colour" | "c" => match args.as_slice() {
                [color] => Ok(TagContent::Color(Color::parse(color)?)),
                _ => Err(TagParseError::InvalidArgument {
                    tag: name,
                    argument: args.join(":"),
                }),
            },
            "gradient" => Self::parse_gradient(&args),
            "reset" | "r" => {
                no_arguments(&name, &args)?;
                Ok(TagContent::Reset)
            }
            _ => Err(TagParseError::UnknownTag(name)),
        }
    }

    /// Resolve gradient stops. No stops means white to black.
    fn parse_gradient(args: &[&str]) -> Result<Self, TagParseError> {
        match args {
            [] => Ok(TagContent::Gradient(vec![
                Color::Named(NamedColor::White),
                Color::Named(NamedColor::Black),
            ])),
            [single] => Err(TagParseError::InvalidArgument {
                tag: "gradient".to_string(),
                argument: (*single).to_string(),
            }),
            stops => {
                let colors = stops
                    .iter()
                    .map(|stop| Color::parse(stop))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TagContent::Gradient(colors))
            }
        }
    }
}

fn no_arguments(name: &str, args: &[&str]) -> Result<(), TagParseError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(TagParseError::InvalidArgument {
            tag: name.to_string(),
            argument: args.join(":"),
        })
    }
}

/// Returns true if `name` (the part before any `:`) names a catalog tag.
///
/// Used for closing tags, which carry a name but no resolvable arguments.
pub fn is_known_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.starts_with('#')
        || KEYWORD_TAGS.contains(name.as_str())
        || NamedColor::from_name(&name).is_some()
        || Decorations::from_tag_name(&name).is_some()
}

/// Key used to pair closing tags with the opening tag they close.
///
/// Aliases share a key, so `</b>` closes `<bold>` and `</c>` closes `<color:red>`.
pub fn tag_key(content: &str) -> String {
    let name = content
        .split(':')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if let Some(named) = NamedColor::from_name(&name) {
        return named.name().to_string();
    }

    if let Some(name) = Decorations::from_tag_name(&name).and_then(Decorations::tag_name) {
        return name.to_string();
    }

    match name.as_str() {
        "colour" | "c" => "color".to_string(),
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_color_tag() {
        assert_eq!(
            TagContent::parse("RED").unwrap(),
            TagContent::Color(Color::Named(NamedColor::Red))
        );
    }

    #[test]
    fn parse_hex_tag() {
        assert_eq!(
            TagContent::parse("#fcfcfc").unwrap(),
            TagContent::Color(Color::Rgb(252, 252, 252))
        );
        assert!(TagContent::parse("#fcfc").is_err());
    }

    #[test]
    fn parse_color_keyword() {
        assert_eq!(
            TagContent::parse("c:#00ff00").unwrap(),
            TagContent::Color(Color::Rgb(0, 255, 0))
        );
        assert!(TagContent::parse("color").is_err());
        assert!(TagContent::parse("color:nope").is_err());
    }

    #[test]
    fn parse_decoration_tags() {
        assert_eq!(
            TagContent::parse("b").unwrap(),
            TagContent::Decoration(Decorations::BOLD)
        );
        assert_eq!(
            TagContent::parse("underlined").unwrap(),
            TagContent::Decoration(Decorations::UNDERLINED)
        );
        assert!(TagContent::parse("bold:false").is_err());
    }

    #[test]
    fn parse_gradient_tag() {
        assert_eq!(
            TagContent::parse("gradient:red:#0000ff").unwrap(),
            TagContent::Gradient(vec![Color::Named(NamedColor::Red), Color::Rgb(0, 0, 255)])
        );
        assert!(matches!(
            TagContent::parse("gradient").unwrap(),
            TagContent::Gradient(stops) if stops.len() == 2
        ));
        assert!(TagContent::parse("gradient:red").is_err());
    }

    #[test]
    fn parse_reset() {
        assert_eq!(TagContent::parse("reset").unwrap(), TagContent::Reset);
        assert_eq!(TagContent::parse("r").unwrap(), TagContent::Reset);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            TagContent::parse("player_name"),
            Err(TagParseError::UnknownTag("player_name".to_string()))
        );
        assert_eq!(TagContent::parse(""), Err(TagParseError::Empty));
    }

    #[test]
    fn keys_unify_aliases() {
        assert_eq!(tag_key("b"), tag_key("bold"));
        assert_eq!(tag_key("c:red"), tag_key("color"));
        assert_eq!(tag_key("grey"), "gray");
        assert_eq!(tag_key("#FCFCFC"), "#fcfcfc");
        assert_eq!(tag_key("gradient:red:blue"), "gradient");
    }

    #[test]
    fn known_names() {
        assert!(is_known_name("gradient"));
        assert!(is_known_name("Bold"));
        assert!(is_known_name("#123"));
        assert!(!is_known_name("player_name"));
    }
}
