//! Unified error handling for Blueprint Core.
//!
//! `BlueprintError` wraps the four error families so callers match one type
//! and still get a category and user-actionable suggestions.

use thiserror::Error;

use crate::application::error::{ConfigurationError, GenerationError, IoError};
use crate::domain::{self, DomainError};

/// Root error type for Blueprint Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlueprintError {
    /// Caller input violates a business rule.
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Generator registry and profiles disagree; a wiring defect.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

impl BlueprintError {
    /// Stable code for validation errors; family name otherwise.
    pub fn code(&self) -> String {
        match self {
            Self::Validation(e) => e.code(),
            Self::Configuration(_) => "configuration".into(),
            Self::Generation(_) => "generation".into(),
            Self::Io(_) => "io".into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => {
                let mut out = vec![format!("Error code: {}", e.code())];
                out.extend(e.suggestions());
                out
            }
            Self::Configuration(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
            Self::Io(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(e) => match e.category() {
                domain::ErrorCategory::Validation => ErrorCategory::Validation,
                domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Configuration(e) => e.category(),
            Self::Generation(e) => e.category(),
            Self::Io(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BlueprintResult<T> = Result<T, BlueprintError>;
