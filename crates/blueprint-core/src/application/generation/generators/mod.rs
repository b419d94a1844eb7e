//! Concrete artifact generators for the Spring Boot / Maven / Java profile.
//!
//! Generators never touch the filesystem: they render templates through the
//! [`TemplateRenderer`] port and discover template trees through the
//! [`TemplateScanner`] port.

mod build_config;
mod fixed;
mod governance;
mod sample_code;
mod source_layout;

use std::sync::Arc;

pub use build_config::{BuildConfigGenerator, BuildDependency};
pub use fixed::FixedTemplateGenerator;
pub use governance::{ArchitectureGovernanceGenerator, REST_BOUNDARY_TEMPLATES};
pub use sample_code::SampleCodeGenerator;
pub use source_layout::SourceLayoutGenerator;

use crate::application::error::GenerationError;
use crate::application::generation::{ArtifactKind, ArtifactRegistry};
use crate::application::ports::{
    TemplateModel, TemplateRef, TemplateRenderer, TemplateScanner,
};
use crate::domain::{GeneratedResource, RelativePath};

/// Suffix marking a file as a MiniJinja template.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Registry with one generator for every [`ArtifactKind`].
pub fn standard_registry(
    renderer: Arc<dyn TemplateRenderer>,
    scanner: Arc<dyn TemplateScanner>,
) -> ArtifactRegistry {
    ArtifactRegistry::new()
        .with(Arc::new(BuildConfigGenerator::new(renderer.clone())))
        .with(Arc::new(FixedTemplateGenerator::build_tool_files(renderer.clone())))
        .with(Arc::new(FixedTemplateGenerator::ignore_rules(renderer.clone())))
        .with(Arc::new(SourceLayoutGenerator))
        .with(Arc::new(FixedTemplateGenerator::app_config(renderer.clone())))
        .with(Arc::new(FixedTemplateGenerator::main_entry_point(renderer.clone())))
        .with(Arc::new(FixedTemplateGenerator::test_entry_point(renderer.clone())))
        .with(Arc::new(SampleCodeGenerator::new(
            renderer.clone(),
            scanner.clone(),
        )))
        .with(Arc::new(ArchitectureGovernanceGenerator::new(
            renderer.clone(),
            scanner,
        )))
        .with(Arc::new(FixedTemplateGenerator::project_documentation(
            renderer,
        )))
}

pub(crate) fn output_path(kind: ArtifactKind, raw: &str) -> Result<RelativePath, GenerationError> {
    RelativePath::new(raw).map_err(|e| GenerationError::InvalidOutputPath {
        kind,
        path: raw.to_owned(),
        reason: e.to_string(),
    })
}

pub(crate) fn render(
    renderer: &dyn TemplateRenderer,
    kind: ArtifactKind,
    output: &RelativePath,
    template: &TemplateRef,
    model: &TemplateModel,
) -> Result<GeneratedResource, GenerationError> {
    renderer
        .render(output, template, model)
        .map_err(|e| GenerationError::Render {
            kind,
            template: template.to_string(),
            reason: e.reason(),
        })
}

/// Scan `root` and return each template with its path below the root.
/// An empty result is reported as [`GenerationError::TemplatesNotFound`].
pub(crate) fn scan_tree(
    scanner: &dyn TemplateScanner,
    kind: ArtifactKind,
    root: &TemplateRef,
) -> Result<Vec<(TemplateRef, String)>, GenerationError> {
    let found = scanner.scan(root).map_err(|e| GenerationError::Scan {
        kind,
        root: root.to_string(),
        reason: e.to_string(),
    })?;

    let entries: Vec<(TemplateRef, String)> = found
        .into_iter()
        .filter_map(|template| {
            let relative = template.relative_to(root)?.to_owned();
            Some((template, relative))
        })
        .collect();

    if entries.is_empty() {
        return Err(GenerationError::TemplatesNotFound {
            kind,
            root: root.to_string(),
        });
    }
    Ok(entries)
}

pub(crate) fn strip_template_suffix(path: &str) -> &str {
    path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path)
}
