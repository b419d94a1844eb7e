//! Generator registry and generation profiles.
//!
//! The registry maps each [`ArtifactKind`] to the generator that produces it;
//! a profile lists, in output order, the kinds a tech stack needs. Both are
//! built once at startup and shared read-only behind `Arc`.
//!
//! # Adding an Artifact
//!
//! 1. Add the variant to `ArtifactKind`
//! 2. Add it to the profile slice below at its output position
//! 3. Register its generator in `generators::standard_registry`
//!
//! `ArtifactRegistry::verify` fails at startup if step 3 is forgotten.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::error::{ConfigurationError, GenerationError};
use crate::application::generation::ArtifactKind;
use crate::domain::capabilities::SUPPORTED_STACK;
use crate::domain::{GeneratedResource, ProjectBlueprint, TechStack};

/// Produces the resources of one artifact kind from a blueprint.
///
/// Generators are pure with respect to the blueprint: the same blueprint
/// always yields the same ordered list.
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactGenerator: Send + Sync {
    fn kind(&self) -> ArtifactKind;

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError>;
}

// ── Registry ─────────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct ArtifactRegistry {
    generators: BTreeMap<ArtifactKind, Arc<dyn ArtifactGenerator>>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `generator` under the kind it reports.
    pub fn with(mut self, generator: Arc<dyn ArtifactGenerator>) -> Self {
        let kind = generator.kind();
        self.register(kind, generator);
        self
    }

    /// Register under an explicit key, replacing any previous entry.
    pub fn register(&mut self, key: ArtifactKind, generator: Arc<dyn ArtifactGenerator>) {
        self.generators.insert(key, generator);
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Arc<dyn ArtifactGenerator>> {
        self.generators.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.generators.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Startup consistency pass: every kind named by any profile has a
    /// generator, and that generator reports the kind it is keyed under.
    pub fn verify(&self, profiles: &ProfileCatalog) -> Result<(), ConfigurationError> {
        for profile in profiles.iter() {
            for &kind in profile.kinds() {
                let generator = self
                    .get(kind)
                    .ok_or(ConfigurationError::MissingGenerator { kind })?;
                let reported = generator.kind();
                if reported != kind {
                    return Err(ConfigurationError::KindMismatch {
                        key: kind,
                        reported,
                    });
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ArtifactRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.generators.keys()).finish()
    }
}

// ── Profiles ─────────────────────────────────────────────────────────────────

static SPRING_BOOT_MAVEN_JAVA: &[ArtifactKind] = &[
    ArtifactKind::BuildConfig,
    ArtifactKind::BuildToolFiles,
    ArtifactKind::IgnoreRules,
    ArtifactKind::SourceLayout,
    ArtifactKind::AppConfig,
    ArtifactKind::MainEntryPoint,
    ArtifactKind::TestEntryPoint,
    ArtifactKind::SampleCode,
    ArtifactKind::ArchitectureGovernance,
    ArtifactKind::ProjectDocumentation,
];

/// Ordered artifact kinds for one tech stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationProfile {
    stack: TechStack,
    kinds: Vec<ArtifactKind>,
}

impl GenerationProfile {
    pub fn new(stack: TechStack, kinds: impl Into<Vec<ArtifactKind>>) -> Self {
        Self {
            stack,
            kinds: kinds.into(),
        }
    }

    pub fn stack(&self) -> TechStack {
        self.stack
    }

    pub fn kinds(&self) -> &[ArtifactKind] {
        &self.kinds
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: Vec<GenerationProfile>,
}

impl ProfileCatalog {
    pub fn new(profiles: Vec<GenerationProfile>) -> Self {
        Self { profiles }
    }

    /// The single supported profile: Spring Boot, Maven, Java.
    pub fn standard() -> Self {
        Self::new(vec![GenerationProfile::new(
            SUPPORTED_STACK,
            SPRING_BOOT_MAVEN_JAVA,
        )])
    }

    pub fn resolve(&self, stack: TechStack) -> Result<&GenerationProfile, ConfigurationError> {
        self.profiles
            .iter()
            .find(|p| p.stack == stack)
            .ok_or_else(|| ConfigurationError::MissingProfile {
                stack: stack.to_string(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenerationProfile> {
        self.profiles.iter()
    }
}
