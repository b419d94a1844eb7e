//! Runs a profile's generators in order over one blueprint.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::ConfigurationError;
use crate::application::generation::{ArtifactKind, ArtifactRegistry, ProfileCatalog};
use crate::domain::{GeneratedResource, ProjectBlueprint, TechStack};
use crate::error::BlueprintResult;

#[derive(Debug, Clone)]
pub struct PipelineExecutor {
    registry: Arc<ArtifactRegistry>,
    profiles: Arc<ProfileCatalog>,
}

impl PipelineExecutor {
    /// Fails if any profile names a kind the registry cannot serve.
    pub fn new(
        registry: Arc<ArtifactRegistry>,
        profiles: Arc<ProfileCatalog>,
    ) -> Result<Self, ConfigurationError> {
        registry.verify(&profiles)?;
        Ok(Self { registry, profiles })
    }

    /// Artifact kinds produced for `stack`, in output order.
    pub fn kinds_for(&self, stack: TechStack) -> Result<&[ArtifactKind], ConfigurationError> {
        Ok(self.profiles.resolve(stack)?.kinds())
    }

    /// Concatenate every generator's output, preserving profile order and
    /// each generator's internal order.
    #[instrument(skip_all, fields(project = %blueprint.identity()))]
    pub fn execute(&self, blueprint: &ProjectBlueprint) -> BlueprintResult<Vec<GeneratedResource>> {
        let profile = self.profiles.resolve(blueprint.tech_stack())?;
        let mut resources = Vec::new();

        for &kind in profile.kinds() {
            let generator = self
                .registry
                .get(kind)
                .ok_or(ConfigurationError::MissingGenerator { kind })?;
            let produced = generator.generate(blueprint)?;
            debug!(kind = %kind, count = produced.len(), "generator finished");
            resources.extend(produced);
        }

        debug!(total = resources.len(), "pipeline finished");
        Ok(resources)
    }
}
