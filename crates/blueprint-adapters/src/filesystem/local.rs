//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use blueprint_core::application::{IoError, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), IoError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir(&self, path: &Path) -> Result<(), IoError> {
        match std::fs::create_dir(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(IoError::AlreadyExists {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(map_io_error(path, e, "create directory")),
        }
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), IoError> {
        std::fs::write(path, bytes).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> IoError {
    IoError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
}
