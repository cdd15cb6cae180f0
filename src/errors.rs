//! Error types for HealthBuddy
//!
//! Provides domain error handling with context propagation. Every failure
//! path in the application resolves to a visible fallback state; nothing
//! here is fatal.

use thiserror::Error;

/// Main error type for the HealthBuddy assistant
#[derive(Error, Debug)]
pub enum HealthError {
    /// Checker flow state machine transition errors
    #[error("Invalid state transition from {from:?} to {to:?}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Classifier called with an empty selection set
    #[error("No symptoms selected: at least one symptom is required for analysis")]
    EmptySelection,

    /// Unknown symptom identifier passed to the checker
    #[error("Unknown symptom identifier: {0}")]
    UnknownSymptom(String),

    /// Gemini API errors (non-2xx status, malformed response shape)
    #[error("Gemini API error: {0}")]
    GeminiApiError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Speech synthesis errors
    #[error("Speech synthesis error: {0}")]
    SpeechError(String),

    /// Generic errors with context
    #[error("Assistant error: {0}")]
    Generic(String),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, HealthError>;

/// Convert anyhow errors to HealthError
impl From<anyhow::Error> for HealthError {
    fn from(err: anyhow::Error) -> Self {
        HealthError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HealthError::EmptySelection;
        assert!(err.to_string().contains("No symptoms selected"));
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = HealthError::InvalidTransition {
            from: "Analyzed".to_string(),
            to: "Reviewing".to_string(),
            reason: "Only reset leaves the analyzed state".to_string(),
        };
        assert!(err.to_string().contains("Analyzed"));
        assert!(err.to_string().contains("Reviewing"));
    }

    #[test]
    fn test_unknown_symptom_error() {
        let err = HealthError::UnknownSymptom("toothache".to_string());
        assert!(err.to_string().contains("toothache"));
    }
}
