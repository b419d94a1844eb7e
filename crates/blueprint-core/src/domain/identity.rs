//! Project coordinates: `groupId` and `artifactId`.
//!
//! Both are smart-constructed: `parse` normalises the raw input and runs the
//! field's rule chain, so an instance that exists is always valid.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::rules::{self, RuleChain};

// ── GroupId ──────────────────────────────────────────────────────────────────

/// Reverse-domain group, e.g. `com.example.orders`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        Self::parse_with(raw, &rules::GROUP_ID)
    }

    /// Parse with an alternative chain; dependency coordinates report their
    /// own field in error codes.
    pub(crate) fn parse_with(raw: &str, chain: &RuleChain) -> Result<Self, DomainError> {
        let value = Self::normalize(raw);
        chain.validate(&value)?;
        Ok(Self(value))
    }

    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ArtifactId ───────────────────────────────────────────────────────────────

/// Dash-separated artifact name, e.g. `order-service`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value = Self::normalize(raw);
        rules::ARTIFACT_ID.validate(&value)?;
        Ok(Self(value))
    }

    /// Trim, lower-case, turn whitespace and underscores into dashes and
    /// collapse dash runs.
    pub fn normalize(raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for c in raw.trim().chars() {
            let c = if c.is_whitespace() || c == '_' { '-' } else { c };
            if c == '-' && out.ends_with('-') {
                continue;
            }
            out.extend(c.to_lowercase());
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `order-service` → `OrderService`.
    pub fn to_pascal_case(&self) -> String {
        self.0
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── ProjectIdentity ──────────────────────────────────────────────────────────

/// The `{groupId, artifactId}` pair that names the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdentity {
    group_id: GroupId,
    artifact_id: ArtifactId,
}

impl ProjectIdentity {
    pub fn new(group_id: GroupId, artifact_id: ArtifactId) -> Self {
        Self {
            group_id,
            artifact_id,
        }
    }

    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &ArtifactId {
        &self.artifact_id
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Field;

    #[test]
    fn artifact_id_is_normalized_to_dash_case() {
        let id = ArtifactId::parse("  My Cool__App ").unwrap();
        assert_eq!(id.as_str(), "my-cool-app");
    }

    #[test]
    fn artifact_id_collapses_mixed_separators() {
        assert_eq!(ArtifactId::normalize("a - _ b"), "a-b");
    }

    #[test]
    fn artifact_id_too_short() {
        assert!(matches!(
            ArtifactId::parse("ab"),
            Err(DomainError::Length {
                field: Field::ArtifactId,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn artifact_id_must_start_with_letter() {
        assert_eq!(
            ArtifactId::parse("1abc").unwrap_err(),
            DomainError::MustStartWithLetter {
                field: Field::ArtifactId
            }
        );
    }

    #[test]
    fn artifact_id_must_not_end_with_dash() {
        assert_eq!(
            ArtifactId::parse("abc-").unwrap_err(),
            DomainError::EdgeCharacter {
                field: Field::ArtifactId,
                character: '-'
            }
        );
    }

    #[test]
    fn artifact_id_rejects_dots() {
        assert!(matches!(
            ArtifactId::parse("my.app"),
            Err(DomainError::InvalidCharacter { character: '.', .. })
        ));
    }

    #[test]
    fn pascal_case_for_class_names() {
        let id = ArtifactId::parse("order-service2").unwrap();
        assert_eq!(id.to_pascal_case(), "OrderService2");
    }

    #[test]
    fn group_id_is_lowercased() {
        assert_eq!(GroupId::parse(" Com.Example ").unwrap().as_str(), "com.example");
    }

    #[test]
    fn group_id_length_bounds() {
        assert!(matches!(
            GroupId::parse("ab"),
            Err(DomainError::Length { min: 3, max: 100, .. })
        ));
        let long = format!("a{}", ".b".repeat(50));
        assert!(matches!(
            GroupId::parse(&long),
            Err(DomainError::Length { actual: 101, .. })
        ));
    }

    #[test]
    fn identity_displays_as_coordinates() {
        let identity = ProjectIdentity::new(
            GroupId::parse("org.acme").unwrap(),
            ArtifactId::parse("common").unwrap(),
        );
        assert_eq!(identity.to_string(), "org.acme:common");
    }
}
