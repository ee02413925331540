use thiserror::Error;

/// Errors that can occur during line computation or document processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BijakError {
    /// A value is outside an allowed discrete set (e.g. a rate not in the table).
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// A value violates a numeric precondition.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputError),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Document number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// Operation not permitted on a finalized document.
    #[error("document is finalized: {0}")]
    Finalized(String),

    /// Snapshot serialization or parsing error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<ValidationError> for BijakError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<InvalidInputError> for BijakError {
    fn from(err: InvalidInputError) -> Self {
        Self::InvalidInput(err)
    }
}

/// A value outside an allowed discrete set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the offending field (e.g. "lines[2].rates").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// The permitted values, rendered for display (e.g. "0, 3, 5, 12, 18, 28").
    pub allowed: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.allowed {
            Some(allowed) => write!(f, "{}: {} (allowed: {})", self.field, self.message, allowed),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            allowed: None,
        }
    }

    /// Create a validation error listing the permitted values.
    pub fn with_allowed(
        field: impl Into<String>,
        message: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            allowed: Some(allowed.into()),
        }
    }
}

/// A value that violates a numeric precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    /// Name of the offending input (e.g. "discount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidInputError {}

impl InvalidInputError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn overflow(field: impl Into<String>) -> Self {
        Self::new(field, "amount exceeds the representable decimal range")
    }
}
