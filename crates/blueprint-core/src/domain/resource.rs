//! In-memory output of the generation pipeline.
//!
//! A [`GeneratedResource`] describes one entry of the project tree by its
//! path relative to the project root. Nothing here touches the filesystem;
//! the materializer turns resources into files.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::DomainError;

// ── RelativePath ─────────────────────────────────────────────────────────────

/// Forward-slash path that can never escape the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Normalise separators and reject absolute or parent-escaping paths.
    ///
    /// `.` and empty segments are dropped, so `./src//main` becomes
    /// `src/main`.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let unified = raw.replace('\\', "/");
        let invalid = |reason| DomainError::InvalidPath {
            path: raw.to_owned(),
            reason,
        };

        if unified.trim().is_empty() {
            return Err(invalid("path is empty"));
        }
        if unified.starts_with('/') || has_drive_prefix(&unified) {
            return Err(invalid("path must be relative"));
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => return Err(invalid("path must not contain '..'")),
                other => segments.push(other),
            }
        }
        if segments.is_empty() {
            return Err(invalid("path is empty"));
        }
        Ok(Self(segments.join("/")))
    }

    pub fn join(&self, child: &str) -> Result<Self, DomainError> {
        Self::new(&format!("{}/{child}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Platform path, resolved under `root` by the caller.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments().collect()
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Charset ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Charset {
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "ISO-8859-1")]
    Latin1,
}

impl Charset {
    /// Encode `text`; the error carries the first unrepresentable character.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, char> {
        match self {
            Self::Utf8 => Ok(text.as_bytes().to_vec()),
            Self::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| c))
                .collect(),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
        }
    }
}

// ── GeneratedResource ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedResource {
    TextFile {
        path: RelativePath,
        content: String,
        charset: Charset,
    },
    BinaryFile {
        path: RelativePath,
        #[serde(skip)]
        bytes: Vec<u8>,
    },
    Directory {
        path: RelativePath,
    },
}

impl GeneratedResource {
    /// UTF-8 text file.
    pub fn text(path: RelativePath, content: impl Into<String>) -> Self {
        Self::TextFile {
            path,
            content: content.into(),
            charset: Charset::Utf8,
        }
    }

    pub fn binary(path: RelativePath, bytes: impl Into<Vec<u8>>) -> Self {
        Self::BinaryFile {
            path,
            bytes: bytes.into(),
        }
    }

    pub fn directory(path: RelativePath) -> Self {
        Self::Directory { path }
    }

    pub fn path(&self) -> &RelativePath {
        match self {
            Self::TextFile { path, .. }
            | Self::BinaryFile { path, .. }
            | Self::Directory { path } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TextFile { .. } => "text",
            Self::BinaryFile { .. } => "binary",
            Self::Directory { .. } => "directory",
        }
    }

    /// Size on disk once written; directories report zero.
    pub fn size_bytes(&self) -> usize {
        match self {
            Self::TextFile {
                content,
                charset: Charset::Utf8,
                ..
            } => content.len(),
            Self::TextFile { content, .. } => content.chars().count(),
            Self::BinaryFile { bytes, .. } => bytes.len(),
            Self::Directory { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_and_dot_segments_are_normalized() {
        let path = RelativePath::new(r".\src\\main/./java").unwrap();
        assert_eq!(path.as_str(), "src/main/java");
    }

    #[test]
    fn parent_segments_are_rejected() {
        for raw in ["../etc/passwd", "src/../../x", ".."] {
            assert!(
                matches!(RelativePath::new(raw), Err(DomainError::InvalidPath { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn absolute_paths_are_rejected() {
        assert!(RelativePath::new("/tmp/x").is_err());
        assert!(RelativePath::new(r"C:\temp").is_err());
        assert!(RelativePath::new("").is_err());
        assert!(RelativePath::new("./").is_err());
    }

    #[test]
    fn join_revalidates() {
        let base = RelativePath::new("src/main").unwrap();
        assert_eq!(base.join("java").unwrap().as_str(), "src/main/java");
        assert!(base.join("../../..").is_err());
    }

    #[test]
    fn latin1_reports_unencodable_char() {
        assert_eq!(Charset::Latin1.encode("café").unwrap(), b"caf\xe9".to_vec());
        assert_eq!(Charset::Latin1.encode("日本"), Err('日'));
    }

    #[test]
    fn size_counts_encoded_text_bytes() {
        let path = RelativePath::new("README.md").unwrap();
        assert_eq!(GeneratedResource::text(path.clone(), "é").size_bytes(), 2);
        assert_eq!(GeneratedResource::directory(path).size_bytes(), 0);
    }
}
