//! Human-facing project naming and the Java base package.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::identity::{ArtifactId, GroupId};
use crate::domain::rules;

/// Display name, e.g. `Order Service`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = raw.trim().to_owned();
        rules::NAME.validate(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-paragraph description; whitespace runs are collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectDescription(String);

impl ProjectDescription {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = Self::normalize(raw);
        rules::DESCRIPTION.validate(&value)?;
        Ok(Self(value))
    }

    pub fn normalize(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    pub name: ProjectName,
    pub description: ProjectDescription,
}

// ── PackageName ──────────────────────────────────────────────────────────────

/// Base Java package, e.g. `com.example.orderservice`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageName(String);

impl PackageName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = raw.trim().to_lowercase();
        rules::PACKAGE_NAME.validate(&value)?;
        Ok(Self(value))
    }

    /// `<groupId>.<artifactId without dashes>`, validated like any other
    /// package name.
    pub fn derive(group_id: &GroupId, artifact_id: &ArtifactId) -> Result<Self, DomainError> {
        Self::parse(&format!("{group_id}.{}", artifact_id.as_str().replace('-', "")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Slash-separated directory form: `com/example/orderservice`.
    pub fn to_path(&self) -> String {
        self.0.replace('.', "/")
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
