//! Error types for filter construction and classification.

use thiserror::Error;

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building or classifying adhoc filters.
#[derive(Error, Debug)]
pub enum FilterError {
    /// A saved-metric reference names a metric the datasource does not know.
    #[error("unresolved saved metric reference: '{name}'")]
    UnresolvedReference {
        /// Name of the saved metric that could not be found.
        name: String,
    },

    /// A closed enum field carried a value outside its vocabulary.
    #[error("invalid {field}: '{value}'")]
    InvalidEnum {
        /// Field being parsed (`clause`, `expressionType`, `operator`, ...).
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A selected option matched none of the recognized shapes.
    #[error("unrecognized option shape: {0}")]
    ShapeMismatch(String),

    /// JSON payload could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    pub fn invalid_enum(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnum {
            field,
            value: value.into(),
        }
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedReference { name: name.into() }
    }

    /// Check if this error is an unresolved saved-metric reference.
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(self, Self::UnresolvedReference { .. })
    }
}
