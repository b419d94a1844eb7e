//! Illustrative sample code for hexagonal projects.
//!
//! Templates under the sample root are partitioned by their first segment:
//! `main/...` lands in the main source tree, `test/...` in the test tree.
//! Anything else in the tree is ignored.

use std::sync::Arc;

use tracing::debug;

use crate::application::error::GenerationError;
use crate::application::generation::generators::{
    output_path, render, scan_tree, strip_template_suffix,
};
use crate::application::generation::{ArtifactGenerator, ArtifactKind, model};
use crate::application::ports::{TemplateRef, TemplateRenderer, TemplateScanner};
use crate::domain::{GeneratedResource, Layout, ProjectBlueprint, SampleCodeLevel};

const SAMPLE_ROOT: &str = "sample/hexagonal/basic";

pub struct SampleCodeGenerator {
    renderer: Arc<dyn TemplateRenderer>,
    scanner: Arc<dyn TemplateScanner>,
}

impl SampleCodeGenerator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>, scanner: Arc<dyn TemplateScanner>) -> Self {
        Self { renderer, scanner }
    }

    fn applies_to(blueprint: &ProjectBlueprint) -> bool {
        let architecture = blueprint.architecture();
        architecture.sample_code.level == SampleCodeLevel::Basic
            && architecture.layout == Layout::Hexagonal
    }
}

impl ArtifactGenerator for SampleCodeGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SampleCode
    }

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError> {
        if !Self::applies_to(blueprint) {
            return Ok(Vec::new());
        }

        let kind = self.kind();
        let root = TemplateRef::new(SAMPLE_ROOT);
        let package = blueprint.package_name().to_path();
        let model = model::base_model(blueprint);

        let mut resources = Vec::new();
        for (template, relative) in scan_tree(self.scanner.as_ref(), kind, &root)? {
            let target = if let Some(rest) = relative.strip_prefix("main/") {
                format!("src/main/java/{package}/{}", strip_template_suffix(rest))
            } else if let Some(rest) = relative.strip_prefix("test/") {
                format!("src/test/java/{package}/{}", strip_template_suffix(rest))
            } else {
                debug!(template = %template, "skipping sample template outside main/ and test/");
                continue;
            };
            let output = output_path(kind, &target)?;
            resources.push(render(
                self.renderer.as_ref(),
                kind,
                &output,
                &template,
                &model,
            )?);
        }
        Ok(resources)
    }
}
