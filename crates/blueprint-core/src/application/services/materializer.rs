//! Writes generated resources to disk through the [`Filesystem`] port.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::IoError;
use crate::application::ports::Filesystem;
use crate::domain::{ArtifactId, GeneratedResource};

/// What to do when the project root already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistencePolicy {
    #[default]
    FailIfExists,
}

#[derive(Clone)]
pub struct ResourceMaterializer {
    filesystem: Arc<dyn Filesystem>,
}

impl ResourceMaterializer {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create `<target_dir>/<artifact_id>` and return it.
    ///
    /// The final directory is created atomically, so of two concurrent runs
    /// targeting the same root exactly one succeeds.
    #[instrument(skip_all, fields(target = %target_dir.display(), artifact = %artifact_id))]
    pub fn prepare_root(
        &self,
        target_dir: &Path,
        artifact_id: &ArtifactId,
        policy: ExistencePolicy,
    ) -> Result<PathBuf, IoError> {
        let target_dir = if target_dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            target_dir
        };
        if self.filesystem.exists(target_dir) && !self.filesystem.is_dir(target_dir) {
            return Err(IoError::NotADirectory {
                path: target_dir.to_path_buf(),
            });
        }
        self.filesystem.create_dir_all(target_dir)?;

        let root = target_dir.join(artifact_id.as_str());
        match policy {
            ExistencePolicy::FailIfExists => self.filesystem.create_dir(&root)?,
        }
        debug!(root = %root.display(), "project root created");
        Ok(root)
    }

    /// Create every directory first, then write every file. Not
    /// transactional: a failure leaves what was written so far.
    #[instrument(skip_all, fields(root = %root.display(), count = resources.len()))]
    pub fn write(&self, root: &Path, resources: &[GeneratedResource]) -> Result<(), IoError> {
        for resource in resources {
            let path = root.join(resource.path().to_path_buf());
            let dir = if resource.is_directory() {
                Some(path.as_path())
            } else {
                path.parent()
            };
            if let Some(dir) = dir {
                self.filesystem.create_dir_all(dir)?;
            }
        }

        for resource in resources {
            let path = root.join(resource.path().to_path_buf());
            match resource {
                GeneratedResource::TextFile {
                    content, charset, ..
                } => {
                    let bytes = charset.encode(content).map_err(|c| IoError::Filesystem {
                        path: path.clone(),
                        reason: format!(
                            "character {c:?} cannot be encoded as {}",
                            charset.as_str()
                        ),
                    })?;
                    self.filesystem.write_file(&path, &bytes)?;
                }
                GeneratedResource::BinaryFile { bytes, .. } => {
                    self.filesystem.write_file(&path, bytes)?;
                }
                GeneratedResource::Directory { .. } => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{Charset, RelativePath};

    /// In-memory filesystem that records directories and file bytes.
    #[derive(Default)]
    pub(crate) struct RecordingFilesystem {
        pub dirs: Mutex<Vec<PathBuf>>,
        pub files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    }

    impl RecordingFilesystem {
        fn has_dir(&self, path: &Path) -> bool {
            self.dirs.lock().is_ok_and(|d| d.iter().any(|p| p == path))
        }
    }

    impl Filesystem for RecordingFilesystem {
        fn exists(&self, path: &Path) -> bool {
            self.has_dir(path) || self.files.lock().is_ok_and(|f| f.contains_key(path))
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.has_dir(path)
        }

        fn create_dir_all(&self, path: &Path) -> Result<(), IoError> {
            let mut dirs = self.dirs.lock().unwrap();
            for ancestor in path.ancestors() {
                if !ancestor.as_os_str().is_empty() && !dirs.iter().any(|d| d == ancestor) {
                    dirs.push(ancestor.to_path_buf());
                }
            }
            Ok(())
        }

        fn create_dir(&self, path: &Path) -> Result<(), IoError> {
            if self.exists(path) {
                return Err(IoError::AlreadyExists {
                    path: path.to_path_buf(),
                });
            }
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<(), IoError> {
            let parent_ok = path.parent().is_none_or(|p| self.has_dir(p));
            if !parent_ok {
                return Err(IoError::filesystem(path, "parent directory missing"));
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), bytes.to_vec());
            Ok(())
        }
    }

    fn artifact() -> ArtifactId {
        ArtifactId::parse("demo-app").unwrap()
    }

    #[test]
    fn prepare_root_fails_when_root_exists() {
        let fs = Arc::new(RecordingFilesystem::default());
        let materializer = ResourceMaterializer::new(fs.clone());
        let out = Path::new("/work");

        let root = materializer
            .prepare_root(out, &artifact(), ExistencePolicy::FailIfExists)
            .unwrap();
        assert_eq!(root, Path::new("/work/demo-app"));

        assert_eq!(
            materializer
                .prepare_root(out, &artifact(), ExistencePolicy::FailIfExists)
                .unwrap_err(),
            IoError::AlreadyExists { path: root }
        );
    }

    #[test]
    fn empty_target_means_working_directory() {
        let materializer = ResourceMaterializer::new(Arc::new(RecordingFilesystem::default()));
        let root = materializer
            .prepare_root(Path::new(""), &artifact(), ExistencePolicy::FailIfExists)
            .unwrap();
        assert_eq!(root, Path::new("./demo-app"));
        assert_eq!(root.parent(), Some(Path::new(".")));
    }

    #[test]
    fn prepare_root_rejects_file_target() {
        let fs = Arc::new(RecordingFilesystem::default());
        fs.files
            .lock()
            .unwrap()
            .insert(PathBuf::from("/work"), Vec::new());
        let materializer = ResourceMaterializer::new(fs);
        assert!(matches!(
            materializer.prepare_root(Path::new("/work"), &artifact(), ExistencePolicy::default()),
            Err(IoError::NotADirectory { .. })
        ));
    }

    #[test]
    fn write_creates_parents_before_files() {
        let fs = Arc::new(RecordingFilesystem::default());
        let materializer = ResourceMaterializer::new(fs.clone());
        let root = Path::new("/work/demo-app");
        let resources = vec![
            GeneratedResource::text(
                RelativePath::new("src/main/java/App.java").unwrap(),
                "class App {}",
            ),
            GeneratedResource::directory(RelativePath::new("src/test/resources").unwrap()),
            GeneratedResource::binary(RelativePath::new("logo.png").unwrap(), vec![0x89, 0x50]),
        ];

        materializer.write(root, &resources).unwrap();

        let files = fs.files.lock().unwrap();
        assert_eq!(
            files.get(Path::new("/work/demo-app/src/main/java/App.java")),
            Some(&b"class App {}".to_vec())
        );
        assert_eq!(
            files.get(Path::new("/work/demo-app/logo.png")),
            Some(&vec![0x89, 0x50])
        );
        assert!(fs.has_dir(Path::new("/work/demo-app/src/test/resources")));
    }

    #[test]
    fn latin1_unmappable_character_is_io_error() {
        let fs = Arc::new(RecordingFilesystem::default());
        let materializer = ResourceMaterializer::new(fs);
        let resource = GeneratedResource::TextFile {
            path: RelativePath::new("notes.txt").unwrap(),
            content: "naïve ☃".into(),
            charset: Charset::Latin1,
        };
        let err = materializer
            .write(Path::new("/work/demo-app"), &[resource])
            .unwrap_err();
        assert!(matches!(err, IoError::Filesystem { .. }));
        assert!(err.to_string().contains("ISO-8859-1"));
    }
}
