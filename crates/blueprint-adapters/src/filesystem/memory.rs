//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use blueprint_core::application::{IoError, ports::Filesystem};

/// In-memory filesystem. Clones share the same tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's bytes (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn write_lock(
        &self,
        path: &Path,
    ) -> Result<std::sync::RwLockWriteGuard<'_, MemoryFilesystemInner>, IoError> {
        self.inner
            .write()
            .map_err(|_| IoError::filesystem(path, "memory filesystem lock poisoned"))
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), IoError> {
        let mut inner = self.write_lock(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(IoError::filesystem(&current, "a file exists at this path"));
            }
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), IoError> {
        let mut inner = self.write_lock(path)?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(IoError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(IoError::filesystem(path, "parent directory does not exist"));
            }
        }
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), IoError> {
        let mut inner = self.write_lock(path)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(IoError::filesystem(path, "parent directory does not exist"));
            }
        }
        inner.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/demo/src")).unwrap();
        assert!(fs.is_dir(Path::new("out")));
        assert!(fs.is_dir(Path::new("out/demo")));
        assert!(fs.is_dir(Path::new("out/demo/src")));
    }

    #[test]
    fn create_dir_reports_existing() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.create_dir(Path::new("out/demo")).unwrap();
        assert!(matches!(
            fs.create_dir(Path::new("out/demo")),
            Err(IoError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/a.txt"), b"a").is_err());
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a.txt"), b"a").unwrap();
        assert_eq!(fs.read_file(Path::new("out/a.txt")), Some(b"a".to_vec()));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("shared")).unwrap();
        assert!(fs.exists(Path::new("shared")));
    }
}
