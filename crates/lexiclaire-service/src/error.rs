//! Error types for the Lexiclaire services

use doc_extract::ExtractError;
use thiserror::Error;

/// Service error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Invalid findings: {0}")]
    Findings(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ServiceError {
    /// True when the caller's input caused the failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Extract(_))
    }

    /// Short machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Extract(e) => e.code(),
            ServiceError::Findings(_) => "INVALID_FINDINGS",
            ServiceError::Generation(_) => "GENERATION_FAILED",
            ServiceError::Config(_) => "INVALID_CONFIG",
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Findings(err.to_string())
    }
}
