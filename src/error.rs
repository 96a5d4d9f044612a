//! Error types for building and archiving model objects.

use thiserror::Error;

/// Errors raised while turning property bags or archive records into model objects.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required field was missing, null or blank while decoding in strict mode.
    #[error("{kind}: required field `{field}` is missing")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    /// The input had the wrong overall shape (e.g. an array where an object was expected).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// JSON could not be parsed, or an archive record did not match its schema.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML could not be parsed.
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An archive record was written for a different model type.
    #[error("archive holds a {found} record, expected {expected}")]
    ArchiveKindMismatch {
        expected: &'static str,
        found: String,
    },

    /// An archive record uses a format revision this build cannot read.
    #[error("unsupported archive format {0}")]
    UnsupportedArchiveFormat(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;
