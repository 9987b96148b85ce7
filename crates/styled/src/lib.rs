//! Styled text model with two interchangeable source dialects.
//!
//! This crate provides the value both dialects parse into, [`StyledText`],
//! and an engine for each dialect:
//!
//! - [`markup`]: angle-bracket tags such as `<red>Hello</red>`,
//!   `<#fcfcfc>`, `<bold>` and `<gradient:red:blue>`
//! - [`legacy`]: inline color codes such as `&cHello`, `&l`, `&#fcfcfc`
//!   and `&x&f&c&f&c&f&c`
//!
//! # Usage
//!
//! ```
//! use styled::legacy::LegacyDialect;
//! use styled::markup::MarkupDialect;
//!
//! let styled = LegacyDialect::compact().deserialize("&cHello");
//! assert_eq!(MarkupDialect.serialize(&styled), "<red>Hello</red>");
//!
//! let parsed = MarkupDialect.deserialize("<red>Hello</red>");
//! assert_eq!(parsed, styled);
//! ```

pub mod color;
pub mod error;
pub mod legacy;
pub mod markup;
pub mod span;
pub mod style;
pub mod text;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use error::{ColorParseError, TagParseError};
pub use legacy::{ColorFormat, LegacyDialect};
pub use markup::MarkupDialect;
pub use span::Span;
pub use style::{Decorations, Style};
pub use text::{StyledText, StyledTextBuilder};
