//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::{GeneratorError, SenderError};

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (invalid or unsafe input)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required secret or credential is missing
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A call to the draft generator or the sender failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable by the user
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

impl From<GeneratorError> for ApplicationError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::NotConfigured => {
                Self::Configuration("Draft generator API key is not configured".to_string())
            },
            GeneratorError::GenerationFailed(_) | GeneratorError::MalformedResponse(_) => {
                Self::Upstream(err.to_string())
            },
        }
    }
}

impl From<SenderError> for ApplicationError {
    fn from(err: SenderError) -> Self {
        match err {
            SenderError::NotConfigured => {
                Self::Configuration("Mail sender credentials are not configured".to_string())
            },
            SenderError::AuthenticationFailed(_) | SenderError::SendFailed(_) => {
                Self::Upstream(err.to_string())
            },
        }
    }
}
