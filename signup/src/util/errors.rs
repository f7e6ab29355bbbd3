use std::path::PathBuf;

use thiserror::Error;

use crate::wizard::Field;

/// A single field failing its schema. Always recoverable: the user edits the
/// field and tries again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown validation mode: {0}")]
    UnknownMode(String),

    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("schema declares more than one rule for `{0}`")]
    DuplicateRule(Field),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid schema: {0}")]
    Schema(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
