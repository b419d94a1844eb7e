//! ArchUnit architecture tests keyed by layout and enforcement mode.

use std::sync::Arc;

use tracing::debug;

use crate::application::error::GenerationError;
use crate::application::generation::generators::{
    output_path, render, scan_tree, strip_template_suffix,
};
use crate::application::generation::{ArtifactGenerator, ArtifactKind, model};
use crate::application::ports::{TemplateRef, TemplateRenderer, TemplateScanner};
use crate::domain::{GeneratedResource, ProjectBlueprint};

/// Rules that only make sense for projects exposing a REST layer.
pub const REST_BOUNDARY_TEMPLATES: &[&str] = &[
    "ControllerNamingArchitectureTest.java.j2",
    "RestBoundaryArchitectureTest.java.j2",
    "RestAdapterArchitectureTest.java.j2",
];

pub struct ArchitectureGovernanceGenerator {
    renderer: Arc<dyn TemplateRenderer>,
    scanner: Arc<dyn TemplateScanner>,
}

impl ArchitectureGovernanceGenerator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>, scanner: Arc<dyn TemplateScanner>) -> Self {
        Self { renderer, scanner }
    }
}

impl ArtifactGenerator for ArchitectureGovernanceGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ArchitectureGovernance
    }

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError> {
        let architecture = blueprint.architecture();
        let mode = architecture.governance.enforcement_mode;
        if !mode.is_enabled() {
            return Ok(Vec::new());
        }

        let kind = self.kind();
        let root = TemplateRef::new(format!("governance/{}/{mode}", architecture.layout));
        let web_facing = model::has_starter(blueprint, model::WEB_STARTER);
        let base = format!(
            "src/test/java/{}/architecture",
            blueprint.package_name().to_path()
        );
        let model = model::base_model(blueprint);

        let mut resources = Vec::new();
        for (template, relative) in scan_tree(self.scanner.as_ref(), kind, &root)? {
            let rest_only = REST_BOUNDARY_TEMPLATES
                .iter()
                .any(|name| *name == template.file_name());
            if rest_only && !web_facing {
                debug!(template = %template, "skipping REST rule without a web starter");
                continue;
            }
            let target = format!("{base}/{}", strip_template_suffix(&relative));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generation::generators::testing::*;
    use crate::application::ports::MockTemplateScanner;
    use crate::domain::DependencyRequest;

    const TREE: &[&str] = &[
        "ControllerNamingArchitectureTest.java.j2",
        "LayerDependencyArchitectureTest.java.j2",
        "RestBoundaryArchitectureTest.java.j2",
    ];

    fn file_names(resources: &[GeneratedResource]) -> Vec<String> {
        paths(resources)
            .iter()
            .filter_map(|p| p.rsplit('/').next().map(str::to_owned))
            .collect()
    }

    #[test]
    fn none_mode_emits_nothing() {
        let generator = ArchitectureGovernanceGenerator::new(echo_renderer(), unused_scanner());
        assert!(generator.generate(&blueprint(request())).unwrap().is_empty());
    }

    #[test]
    fn strict_without_web_excludes_rest_rules() {
        let bp = blueprint(request().with_enforcement_mode("strict"));
        let generator =
            ArchitectureGovernanceGenerator::new(echo_renderer(), listing_scanner(TREE.to_vec()));
        let resources = generator.generate(&bp).unwrap();
        assert_eq!(
            file_names(&resources),
            vec!["LayerDependencyArchitectureTest.java"]
        );
        assert_eq!(
            paths(&resources)[0],
            "src/test/java/com/example/orderservice/architecture/LayerDependencyArchitectureTest.java"
        );
    }

    #[test]
    fn strict_with_web_keeps_rest_rules() {
        let bp = blueprint(
            request()
                .with_enforcement_mode("strict")
                .with_dependency(DependencyRequest::starter("web")),
        );
        let generator =
            ArchitectureGovernanceGenerator::new(echo_renderer(), listing_scanner(TREE.to_vec()));
        assert_eq!(
            file_names(&generator.generate(&bp).unwrap()),
            vec![
                "ControllerNamingArchitectureTest.java",
                "LayerDependencyArchitectureTest.java",
                "RestBoundaryArchitectureTest.java",
            ]
        );
    }

    #[test]
    fn tree_is_keyed_by_layout_and_mode() {
        let mut scanner = MockTemplateScanner::new();
        scanner
            .expect_scan()
            .withf(|root| root.as_str() == "governance/hexagonal/basic")
            .times(1)
            .returning(|root| Ok(vec![root.join("HexagonalLayersTest.java.j2")]));
        let bp = blueprint(
            request()
                .with_layout("hexagonal")
                .with_enforcement_mode("basic"),
        );
        let generator = ArchitectureGovernanceGenerator::new(echo_renderer(), Arc::new(scanner));
        assert_eq!(generator.generate(&bp).unwrap().len(), 1);
    }

    #[test]
    fn empty_tree_fails() {
        let bp = blueprint(request().with_enforcement_mode("basic"));
        let generator =
            ArchitectureGovernanceGenerator::new(echo_renderer(), listing_scanner(vec![]));
        assert!(matches!(
            generator.generate(&bp),
            Err(GenerationError::TemplatesNotFound { .. })
        ));
    }
}
