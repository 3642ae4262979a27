//! Error types for import-core.

use thiserror::Error;

use crate::types::QuestionType;

/// Result type alias for whole-batch operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that abort an entire parse call.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import content: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("import content is {size} bytes, limit is {limit}")]
    TooManyBytes { size: usize, limit: usize },

    #[error("import content has {count} lines, limit is {limit}")]
    TooManyLines { count: usize, limit: usize },
}

/// Errors confined to a single line. The `Display` output is what gets
/// reported back to the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("Invalid format: expected at least {expected} parts")]
    TooFewParts { expected: usize },

    #[error("Invalid part format: {part}")]
    InvalidPart { part: String },

    #[error("Missing required fields: {0}")]
    MissingFields(&'static str),

    #[error("Invalid {field}: {value}. Must be one of: {allowed}")]
    InvalidEnum {
        field: &'static str,
        value: String,
        allowed: &'static str,
    },

    #[error("{} questions require at least one option", .0.label())]
    MissingOptions(QuestionType),

    #[error("Correct option '{value}' matches {matches} options, expected exactly one")]
    AmbiguousAnswer { value: String, matches: usize },
}

impl LineError {
    pub(crate) fn invalid_enum(field: &'static str, value: &str, allowed: &'static str) -> Self {
        Self::InvalidEnum {
            field,
            value: value.to_string(),
            allowed,
        }
    }
}
