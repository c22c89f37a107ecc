/// Convenience result type used across seedcard.
pub type SeedcardResult<T> = Result<T, SeedcardError>;

/// Top-level error taxonomy for the document and batch APIs.
///
/// The generators themselves are total; errors only surface where plans are parsed, validated,
/// or scheduled.
#[derive(thiserror::Error, Debug)]
pub enum SeedcardError {
    /// Invalid user-provided plan data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing plan and layout documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeedcardError {
    /// Build a [`SeedcardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeedcardError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
