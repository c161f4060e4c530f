//! Error types for document extraction

use shared_types::DocumentFormat;
use thiserror::Error;

/// Failure reported by a format decoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing part: {0}")]
    MissingPart(String),

    #[error("Read error: {0}")]
    Read(String),
}

/// Failure reported by the extraction adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported file '{0}'. Upload PDF/DOCX/TXT.")]
    UnsupportedFormat(String),

    #[error("Could not process {}: {detail}", .format.label())]
    Extraction {
        format: DocumentFormat,
        detail: String,
    },

    #[error("Could not extract any text from the document.")]
    EmptyExtraction,
}

impl ExtractError {
    /// Short machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ExtractError::Extraction { .. } => "EXTRACTION_FAILED",
            ExtractError::EmptyExtraction => "EMPTY_EXTRACTION",
        }
    }

    pub(crate) fn wrap(format: DocumentFormat, err: DecodeError) -> Self {
        ExtractError::Extraction {
            format,
            detail: err.to_string(),
        }
    }
}
