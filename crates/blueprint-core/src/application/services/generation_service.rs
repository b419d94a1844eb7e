//! Generation Service - main application orchestrator.
//!
//! One run is strictly sequential:
//! 1. Build the blueprint (the only validation gate)
//! 2. Execute the pipeline into in-memory resources
//! 3. Prepare the project root and write the resources
//! 4. Archive the tree next to the root
//!
//! A failure in any stage stops the run; nothing already written is removed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{Span, info, instrument};
use uuid::Uuid;

use crate::application::generation::PipelineExecutor;
use crate::application::ports::Archiver;
use crate::application::services::materializer::{ExistencePolicy, ResourceMaterializer};
use crate::domain::{GeneratedResource, ProjectBlueprint, ProjectRequest};
use crate::error::BlueprintResult;

/// One entry of the generated tree, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFileSummary {
    pub path: String,
    pub kind: &'static str,
    pub size_bytes: usize,
}

impl From<&GeneratedResource> for GeneratedFileSummary {
    fn from(resource: &GeneratedResource) -> Self {
        Self {
            path: resource.path().to_string(),
            kind: resource.kind(),
            size_bytes: resource.size_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub run_id: Uuid,
    pub project_root: PathBuf,
    pub archive_path: PathBuf,
    pub files: Vec<GeneratedFileSummary>,
}

/// Blueprint and resources of a dry run.
#[derive(Debug, Clone)]
pub struct Preview {
    pub blueprint: ProjectBlueprint,
    pub resources: Vec<GeneratedResource>,
}

pub struct GenerationService {
    executor: Arc<PipelineExecutor>,
    materializer: ResourceMaterializer,
    archiver: Arc<dyn Archiver>,
}

impl GenerationService {
    pub fn new(
        executor: Arc<PipelineExecutor>,
        materializer: ResourceMaterializer,
        archiver: Arc<dyn Archiver>,
    ) -> Self {
        Self {
            executor,
            materializer,
            archiver,
        }
    }

    pub fn executor(&self) -> &PipelineExecutor {
        &self.executor
    }

    /// Generate the project under `target_dir` and archive it.
    #[instrument(
        skip_all,
        fields(
            run_id = tracing::field::Empty,
            artifact = request.artifact_id.as_deref().unwrap_or_default(),
            target = %target_dir.display()
        )
    )]
    pub fn generate(
        &self,
        request: &ProjectRequest,
        target_dir: &Path,
    ) -> BlueprintResult<GenerationResult> {
        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));

        let blueprint = ProjectBlueprint::create(request)?;
        info!(project = %blueprint, "blueprint validated");

        let resources = self.executor.execute(&blueprint)?;
        info!(count = resources.len(), "resources generated");

        let root = self.materializer.prepare_root(
            target_dir,
            blueprint.artifact_id(),
            ExistencePolicy::FailIfExists,
        )?;
        self.materializer.write(&root, &resources)?;
        info!(root = %root.display(), "project written");

        let archive_path = self
            .archiver
            .archive(&root, blueprint.artifact_id().as_str())?;
        info!(archive = %archive_path.display(), "project archived");

        Ok(GenerationResult {
            run_id,
            project_root: root,
            archive_path,
            files: resources.iter().map(GeneratedFileSummary::from).collect(),
        })
    }

    /// Validate and run the pipeline without touching the filesystem.
    #[instrument(skip_all)]
    pub fn preview(&self, request: &ProjectRequest) -> BlueprintResult<Preview> {
        let blueprint = ProjectBlueprint::create(request)?;
        let resources = self.executor.execute(&blueprint)?;
        info!(count = resources.len(), "preview generated");
        Ok(Preview {
            blueprint,
            resources,
        })
    }
}
