//! Error types for attune operations.

use thiserror::Error;

/// Result type alias for attune operations.
pub type AttuneResult<T> = Result<T, AttuneError>;

/// Main error type for all attune operations.
#[derive(Error, Debug)]
pub enum AttuneError {
    /// Relational store lookup failed.
    ///
    /// The acquisition engine downgrades this to an unknown relational
    /// context; it never aborts a decision.
    #[error("Relational error: {message}")]
    Relational {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Utterance merger failed.
    ///
    /// Propagates out of `consider` untouched: a failed learning step is a
    /// caller-visible event.
    #[error("Merger error: {message}")]
    Merger {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AttuneError {
    /// Create a relational error.
    pub fn relational(message: impl Into<String>) -> Self {
        Self::Relational {
            message: message.into(),
            source: None,
        }
    }

    /// Create a relational error with an underlying cause.
    pub fn relational_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Relational {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a merger error.
    pub fn merger(message: impl Into<String>) -> Self {
        Self::Merger {
            message: message.into(),
            source: None,
        }
    }

    /// Create a merger error with an underlying cause.
    pub fn merger_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Merger {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
