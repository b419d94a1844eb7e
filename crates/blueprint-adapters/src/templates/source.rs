//! Where template files come from.
//!
//! Three sources share one trait: the tree embedded in the binary at build
//! time, a directory on disk (`templates.local_path`), and an in-memory map
//! used by tests. Paths are always slash-separated and relative to the
//! source root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use include_dir::{Dir, DirEntry, include_dir};
use tracing::debug;
use walkdir::WalkDir;

use blueprint_core::application::ports::ScanError;

static EMBEDDED_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub trait TemplateSource: Send + Sync {
    /// Raw bytes of one template, or `None` if it does not exist.
    fn read(&self, path: &str) -> Option<Vec<u8>>;

    /// Every file below `root`, recursively, sorted by path.
    fn list(&self, root: &str) -> Result<Vec<String>, ScanError>;

    /// Human-readable origin for logs and `blueprint config`.
    fn describe(&self) -> String;
}

// ── Embedded ─────────────────────────────────────────────────────────────────

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        EMBEDDED_DIR
            .get_file(path)
            .map(|file| file.contents().to_vec())
    }

    fn list(&self, root: &str) -> Result<Vec<String>, ScanError> {
        let dir = if root.is_empty() {
            &EMBEDDED_DIR
        } else {
            EMBEDDED_DIR
                .get_dir(root)
                .ok_or_else(|| ScanError::RootNotFound {
                    root: root.to_owned(),
                })?
        };
        let mut files = Vec::new();
        collect_files(dir, &mut files);
        files.sort();
        Ok(files)
    }

    fn describe(&self) -> String {
        "embedded".into()
    }
}

fn collect_files(dir: &'static Dir<'static>, files: &mut Vec<String>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                files.push(normalize_path(&file.path().to_string_lossy()));
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}

// ── Directory ────────────────────────────────────────────────────────────────

/// Templates read from a directory on disk, for local customisation.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        std::fs::read(self.root.join(path)).ok()
    }

    fn list(&self, root: &str) -> Result<Vec<String>, ScanError> {
        let dir = self.root.join(root);
        if !dir.is_dir() {
            return Err(ScanError::RootNotFound {
                root: root.to_owned(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ScanError::Io {
                root: root.to_owned(),
                reason: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| ScanError::Io {
                    root: root.to_owned(),
                    reason: e.to_string(),
                })?;
            files.push(normalize_path(&relative.to_string_lossy()));
        }
        files.sort();
        debug!(root, count = files.len(), "scanned template directory");
        Ok(files)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

// ── Memory ───────────────────────────────────────────────────────────────────

/// In-memory templates keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(normalize_path(path), content.into());
        self
    }
}

impl TemplateSource for MemoryTemplates {
    fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.files.get(path).cloned()
    }

    fn list(&self, root: &str) -> Result<Vec<String>, ScanError> {
        let prefix = format!("{}/", root.trim_end_matches('/'));
        let files: Vec<String> = self
            .files
            .keys()
            .filter(|path| root.is_empty() || path.starts_with(&prefix))
            .cloned()
            .collect();
        if files.is_empty() {
            return Err(ScanError::RootNotFound {
                root: root.to_owned(),
            });
        }
        Ok(files)
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}

/// Normalise a filesystem path to forward slashes so Windows and Unix paths
/// compare identically.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
