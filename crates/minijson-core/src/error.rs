//! Error types for value access and JSON parsing.

use thiserror::Error;

/// Errors surfaced by the value model and the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A typed accessor was invoked on a `Value` holding a different variant.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A read-only object lookup for a key that is not present.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    /// The input violates the JSON grammar.
    /// Includes the byte offset where the error was detected.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

/// Convenience alias used throughout minijson-core.
pub type Result<T> = std::result::Result<T, JsonError>;
