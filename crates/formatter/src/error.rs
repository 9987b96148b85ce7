//! Error types for the formatting pipeline.
//!
//! Scanning, splitting and sanitizing are total. Only calls into a dialect
//! engine or a placeholder hook can fail, and such a failure aborts the
//! whole formatting call.

use thiserror::Error;

/// A dialect engine or placeholder hook failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{engine} engine failed to {operation}: {message}")]
pub struct EngineError {
    /// Which collaborator failed (e.g. `"markup"`, `"legacy"`, `"placeholder"`).
    pub engine: String,
    /// What it was doing (`"deserialize"`, `"serialize"`, `"format"`).
    pub operation: String,
    /// Collaborator-supplied detail.
    pub message: String,
}

impl EngineError {
    pub fn new(
        engine: impl Into<String>,
        operation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            engine: engine.into(),
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by a formatting call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// An engine failed; no partial output is produced.
    #[error("formatting aborted: {0}")]
    Engine(#[from] EngineError),
}

/// A formatter name in configuration did not match any variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown formatter: {0}")]
pub struct ParseFormatterError(pub String);

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, FormatError>;
