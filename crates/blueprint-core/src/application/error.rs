//! Application layer errors.
//!
//! These errors represent failures in wiring, generation and I/O, not
//! business rules. Business rule violations are `DomainError`s from
//! `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::generation::ArtifactKind;
use crate::error::ErrorCategory;

/// Startup wiring defects between profiles and the generator registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no generator registered for artifact kind '{kind}'")]
    MissingGenerator { kind: ArtifactKind },

    #[error("generator registered under '{key}' reports kind '{reported}'")]
    KindMismatch {
        key: ArtifactKind,
        reported: ArtifactKind,
    },

    #[error("no generation profile for tech stack {stack}")]
    MissingProfile { stack: String },
}

impl ConfigurationError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingGenerator { kind } => vec![
                format!("Register a generator for '{kind}' before building the pipeline"),
            ],
            Self::KindMismatch { key, reported } => vec![format!(
                "The generator for '{key}' returns '{reported}' from kind(); fix the registration"
            )],
            Self::MissingProfile { .. } => {
                vec!["Run `blueprint targets` to list supported combinations".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Failures while turning a blueprint into resources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{kind}: templates not found under '{root}'")]
    TemplatesNotFound { kind: ArtifactKind, root: String },

    #[error("{kind}: failed to scan templates under '{root}': {reason}")]
    Scan {
        kind: ArtifactKind,
        root: String,
        reason: String,
    },

    #[error("{kind}: failed to render '{template}': {reason}")]
    Render {
        kind: ArtifactKind,
        template: String,
        reason: String,
    },

    #[error("{kind}: invalid output path '{path}': {reason}")]
    InvalidOutputPath {
        kind: ArtifactKind,
        path: String,
        reason: String,
    },
}

impl GenerationError {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::TemplatesNotFound { kind, .. }
            | Self::Scan { kind, .. }
            | Self::Render { kind, .. }
            | Self::InvalidOutputPath { kind, .. } => *kind,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplatesNotFound { root, .. } | Self::Scan { root, .. } => vec![
                format!("Check that the template tree contains '{root}'"),
                "Unset templates.local_path to use the built-in templates".into(),
            ],
            Self::Render { template, .. } => {
                vec![format!("Check the syntax and variables used in '{template}'")]
            }
            Self::InvalidOutputPath { .. } => {
                vec!["Template file names must resolve inside the project".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplatesNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

/// Filesystem and archive failures; always carries the offending path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("project directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("output location is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    #[error("cannot archive {path}: {reason}")]
    InvalidArchiveRoot { path: PathBuf, reason: String },

    #[error("failed to write archive {path}: {reason}")]
    Archive { path: PathBuf, reason: String },
}

impl IoError {
    pub fn filesystem(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Filesystem {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::AlreadyExists { path }
            | Self::NotADirectory { path }
            | Self::Filesystem { path, .. }
            | Self::InvalidArchiveRoot { path, .. }
            | Self::Archive { path, .. } => path,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different artifactId or output directory".into(),
            ],
            Self::NotADirectory { path } => {
                vec![format!("Point --output at a directory, not {}", path.display())]
            }
            Self::Filesystem { path, .. } | Self::Archive { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InvalidArchiveRoot { .. } => {
                vec!["The project root must be an existing directory".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } | Self::NotADirectory { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}
