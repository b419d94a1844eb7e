//! Library dependencies selected for the generated build.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Field};
use crate::domain::identity::GroupId;
use crate::domain::rules;

/// Artifact id of a third-party library. Looser than a project
/// [`ArtifactId`](crate::domain::ArtifactId): dots and underscores are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DependencyArtifactId(String);

impl DependencyArtifactId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = raw.trim().to_lowercase();
        rules::DEPENDENCY_ARTIFACT_ID.validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DependencyVersion(String);

impl DependencyVersion {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = raw.trim().to_owned();
        rules::DEPENDENCY_VERSION.validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    Compile,
    Runtime,
    Provided,
    Test,
}

impl DependencyScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
            Self::Provided => "provided",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compile" => Ok(Self::Compile),
            "runtime" => Ok(Self::Runtime),
            "provided" => Ok(Self::Provided),
            "test" => Ok(Self::Test),
            other => Err(DomainError::UnknownValue {
                field: Field::DependencyScope,
                value: other.to_owned(),
            }),
        }
    }
}

// ── Coordinates ──────────────────────────────────────────────────────────────

/// `{groupId, artifactId}`; ordering is by group then artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyCoordinates {
    group_id: GroupId,
    artifact_id: DependencyArtifactId,
}

impl DependencyCoordinates {
    pub fn parse(group_id: &str, artifact_id: &str) -> Result<Self, DomainError> {
        Ok(Self {
            group_id: GroupId::parse_with(group_id, &rules::DEPENDENCY_GROUP_ID)?,
            artifact_id: DependencyArtifactId::parse(artifact_id)?,
        })
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &DependencyArtifactId {
        &self.artifact_id
    }

    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        self.group_id.as_str() == group_id && self.artifact_id.as_str() == artifact_id
    }
}

impl fmt::Display for DependencyCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

// ── Dependency ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    coordinates: DependencyCoordinates,
    version: Option<DependencyVersion>,
    scope: Option<DependencyScope>,
}

impl Dependency {
    pub fn new(coordinates: DependencyCoordinates) -> Self {
        Self {
            coordinates,
            version: None,
            scope: None,
        }
    }

    /// Validate raw parts into a dependency.
    pub fn parse(
        group_id: &str,
        artifact_id: &str,
        version: Option<&str>,
        scope: Option<&str>,
    ) -> Result<Self, DomainError> {
        let coordinates = DependencyCoordinates::parse(group_id, artifact_id)?;
        let version = version.map(DependencyVersion::parse).transpose()?;
        let scope = scope.map(str::parse).transpose()?;
        Ok(Self {
            coordinates,
            version,
            scope,
        })
    }

    pub fn with_version(mut self, version: DependencyVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_scope(mut self, scope: DependencyScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn coordinates(&self) -> &DependencyCoordinates {
        &self.coordinates
    }

    pub fn version(&self) -> Option<&DependencyVersion> {
        self.version.as_ref()
    }

    pub fn scope(&self) -> Option<DependencyScope> {
        self.scope
    }
}

// ── Dependencies ─────────────────────────────────────────────────────────────

/// Immutable dependency set keyed by coordinates, iterated in coordinate
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dependencies {
    entries: Vec<Dependency>,
}

impl Dependencies {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the set, rejecting null entries (by index) and repeated
    /// coordinates.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = Option<Dependency>>,
    ) -> Result<Self, DomainError> {
        let mut by_coordinates = BTreeMap::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let dependency = entry.ok_or(DomainError::NullDependency { index })?;
            let key = dependency.coordinates().clone();
            if by_coordinates.contains_key(&key) {
                return Err(DomainError::DuplicateDependency {
                    coordinates: key.to_string(),
                });
            }
            by_coordinates.insert(key, dependency);
        }
        Ok(Self {
            entries: by_coordinates.into_values().collect(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, group_id: &str, artifact_id: &str) -> bool {
        self.entries
            .iter()
            .any(|d| d.coordinates().matches(group_id, artifact_id))
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a Dependency;
    type IntoIter = std::slice::Iter<'a, Dependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
