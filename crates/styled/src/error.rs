//! Error types for styled text parsing.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Errors that can occur when resolving the content of a markup tag.
///
/// The markup parser never surfaces these to callers: a tag that fails to
/// resolve is kept as literal text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagParseError {
    /// Tag name is not part of the catalog.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// Tag is known but an argument is invalid or missing.
    #[error("invalid argument for <{tag}>: {argument}")]
    InvalidArgument { tag: String, argument: String },

    /// Invalid color in a tag argument.
    #[error("invalid color in tag: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// Empty tag content.
    #[error("empty tag")]
    Empty,
}
