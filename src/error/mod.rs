//! Error handling for the statistics engine.

/// Errors raised while classifying records or resolving reporting periods
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A clinical value lies outside the declared domain of a classifier,
    /// or a record is malformed in a way that would corrupt a report
    #[error("Validation error: {0}")]
    Validation(String),

    /// A reporting window could not be resolved (inverted range, invalid
    /// month, malformed parameters)
    #[error("Period error: {0}")]
    Period(String),
}

impl EngineError {
    /// Create a validation error with a formatted message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a period error with a formatted message
    pub fn period(message: impl Into<String>) -> Self {
        Self::Period(message.into())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
