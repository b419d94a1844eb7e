//! Deterministic zip packaging of a generated project tree.
//!
//! Entries are written in a pre-order walk with siblings sorted by file
//! name. Every entry carries the same timestamp and fixed permissions, so
//! two identical trees produce byte-identical archives.
//!
//! The root directory itself gets no entry of its own: every entry name
//! already starts with `<base>/`, so a root with one file and one empty
//! directory yields exactly those two entries.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use blueprint_core::application::error::IoError;
use blueprint_core::application::ports::Archiver;

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
enum ArchiveFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("entry outside archive root: {0}")]
    OutsideRoot(#[from] std::path::StripPrefixError),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiver;

impl ZipArchiver {
    pub fn new() -> Self {
        Self
    }

    fn validate<'a>(root: &'a Path, base_name: &str) -> Result<&'a Path, IoError> {
        let invalid = |reason: &str| IoError::InvalidArchiveRoot {
            path: root.to_path_buf(),
            reason: reason.to_owned(),
        };

        if !root.exists() {
            return Err(invalid("root does not exist"));
        }
        if !root.is_dir() {
            return Err(invalid("root is not a directory"));
        }
        // A bare relative root such as `demo-app` lives in the working directory.
        let parent = match root.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => return Err(invalid("root has no parent directory")),
        };

        if base_name.is_empty()
            || base_name.contains('/')
            || base_name.contains('\\')
            || base_name.contains("..")
        {
            return Err(invalid(&format!("invalid archive base name '{base_name}'")));
        }
        Ok(parent)
    }

    fn write_archive(root: &Path, base_name: &str, target: &Path) -> Result<usize, ArchiveFailure> {
        let mut zip = ZipWriter::new(File::create(target)?);
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut entries = 0;
        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let relative = entry.path().strip_prefix(root)?;
            let name = format!(
                "{base_name}/{}",
                relative.to_string_lossy().replace('\\', "/")
            );

            if entry.file_type().is_dir() {
                zip.add_directory(format!("{name}/"), options.unix_permissions(DIR_MODE))?;
            } else {
                zip.start_file(name, options.unix_permissions(FILE_MODE))?;
                zip.write_all(&std::fs::read(entry.path())?)?;
            }
            entries += 1;
        }
        zip.finish()?;
        Ok(entries)
    }
}

impl Archiver for ZipArchiver {
    #[instrument(skip_all, fields(root = %root.display(), base = base_name))]
    fn archive(&self, root: &Path, base_name: &str) -> Result<PathBuf, IoError> {
        let parent = Self::validate(root, base_name)?;
        let target = parent.join(format!("{base_name}.zip"));

        let entries =
            Self::write_archive(root, base_name, &target).map_err(|e| IoError::Archive {
                path: target.clone(),
                reason: e.to_string(),
            })?;
        debug!(archive = %target.display(), entries, "archive written");
        Ok(target)
    }
}
