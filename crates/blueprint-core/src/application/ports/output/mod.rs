//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `blueprint-adapters` crate provides implementations.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::application::error::IoError;
use crate::domain::{GeneratedResource, RelativePath};

// ── Template references ──────────────────────────────────────────────────────

/// Slash-separated template location inside a template source, e.g.
/// `java/Application.java.j2` or the scan root `sample/hexagonal/basic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateRef(String);

impl TemplateRef {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into().replace('\\', "/");
        Self(path.trim_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of this template below `root`, or `None` if it lies elsewhere.
    pub fn relative_to(&self, root: &TemplateRef) -> Option<&str> {
        if root.0.is_empty() {
            return Some(&self.0);
        }
        self.0
            .strip_prefix(root.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn join(&self, child: &str) -> Self {
        if self.0.is_empty() {
            Self::new(child)
        } else {
            Self::new(format!("{}/{child}", self.0))
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variables exposed to templates. Keys are snake_case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateModel(BTreeMap<String, serde_json::Value>);

impl TemplateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.0
    }
}

// ── Port errors ──────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("template '{template}' not found")]
    NotFound { template: String },

    #[error("template '{template}' failed to render: {reason}")]
    Failed { template: String, reason: String },
}

impl RenderError {
    pub fn reason(&self) -> String {
        match self {
            Self::NotFound { .. } => "template not found".into(),
            Self::Failed { reason, .. } => reason.clone(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("template root '{root}' does not exist")]
    RootNotFound { root: String },

    #[error("failed to read template root '{root}': {reason}")]
    Io { root: String, reason: String },
}

// ── Ports ────────────────────────────────────────────────────────────────────

/// Port for template rendering.
///
/// Implemented by:
/// - `blueprint_adapters::templates::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `model` into a resource at `output`.
    fn render(
        &self,
        output: &RelativePath,
        template: &TemplateRef,
        model: &TemplateModel,
    ) -> Result<GeneratedResource, RenderError>;
}

/// Port for template discovery.
///
/// Implemented by:
/// - `blueprint_adapters::templates::SourceScanner`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateScanner: Send + Sync {
    /// Every file below `root`, recursively, sorted by path.
    fn scan(&self, root: &TemplateRef) -> Result<Vec<TemplateRef>, ScanError>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `blueprint_adapters::filesystem::LocalFilesystem` (production)
/// - `blueprint_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), IoError>;

    /// Create exactly one directory; fails with [`IoError::AlreadyExists`]
    /// if anything is already there. Must be atomic.
    fn create_dir(&self, path: &Path) -> Result<(), IoError>;

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), IoError>;
}

/// Port for packaging a project tree.
///
/// Implemented by:
/// - `blueprint_adapters::archive::ZipArchiver`
#[cfg_attr(test, mockall::automock)]
pub trait Archiver: Send + Sync {
    /// Package `root` into `<parent(root)>/<base_name>.zip`.
    fn archive(&self, root: &Path, base_name: &str) -> Result<PathBuf, IoError>;
}
