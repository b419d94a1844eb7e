//! Generators that render exactly one template to one file.

use std::sync::Arc;

use crate::application::error::GenerationError;
use crate::application::generation::generators::{output_path, render};
use crate::application::generation::{ArtifactGenerator, ArtifactKind, model};
use crate::application::ports::{TemplateRef, TemplateRenderer};
use crate::domain::{GeneratedResource, ProjectBlueprint};

type OutputFn = fn(&ProjectBlueprint) -> String;

pub struct FixedTemplateGenerator {
    kind: ArtifactKind,
    template: &'static str,
    output: OutputFn,
    renderer: Arc<dyn TemplateRenderer>,
}

impl FixedTemplateGenerator {
    pub fn new(
        kind: ArtifactKind,
        template: &'static str,
        output: OutputFn,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            kind,
            template,
            output,
            renderer,
        }
    }

    pub fn build_tool_files(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::BuildToolFiles,
            "build/maven-wrapper.properties.j2",
            |_| ".mvn/wrapper/maven-wrapper.properties".into(),
            renderer,
        )
    }

    pub fn ignore_rules(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::IgnoreRules,
            "project/gitignore.j2",
            |_| ".gitignore".into(),
            renderer,
        )
    }

    pub fn app_config(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::AppConfig,
            "config/application.yml.j2",
            |_| "src/main/resources/application.yml".into(),
            renderer,
        )
    }

    pub fn main_entry_point(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::MainEntryPoint,
            "java/Application.java.j2",
            |bp| {
                format!(
                    "src/main/java/{}/{}.java",
                    bp.package_name().to_path(),
                    bp.application_class_name()
                )
            },
            renderer,
        )
    }

    pub fn test_entry_point(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::TestEntryPoint,
            "java/ApplicationTests.java.j2",
            |bp| {
                format!(
                    "src/test/java/{}/{}Tests.java",
                    bp.package_name().to_path(),
                    bp.application_class_name()
                )
            },
            renderer,
        )
    }

    pub fn project_documentation(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self::new(
            ArtifactKind::ProjectDocumentation,
            "project/README.md.j2",
            |_| "README.md".into(),
            renderer,
        )
    }
}

impl ArtifactGenerator for FixedTemplateGenerator {
    fn kind(&self) -> ArtifactKind {
        self.kind
    }

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError> {
        let output = output_path(self.kind, &(self.output)(blueprint))?;
        let resource = render(
            self.renderer.as_ref(),
            self.kind,
            &output,
            &TemplateRef::new(self.template),
            &model::base_model(blueprint),
        )?;
        Ok(vec![resource])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generation::generators::testing::*;
    use crate::application::ports::{MockTemplateRenderer, RenderError};

    #[test]
    fn entry_points_live_under_the_package() {
        let bp = blueprint(request());
        let main = FixedTemplateGenerator::main_entry_point(echo_renderer())
            .generate(&bp)
            .unwrap();
        let test = FixedTemplateGenerator::test_entry_point(echo_renderer())
            .generate(&bp)
            .unwrap();
        assert_eq!(
            paths(&main),
            vec!["src/main/java/com/example/orderservice/OrderServiceApplication.java"]
        );
        assert_eq!(
            paths(&test),
            vec!["src/test/java/com/example/orderservice/OrderServiceApplicationTests.java"]
        );
    }

    #[test]
    fn fixed_outputs() {
        let bp = blueprint(request());
        let cases = [
            (
                FixedTemplateGenerator::build_tool_files(echo_renderer()),
                ".mvn/wrapper/maven-wrapper.properties",
            ),
            (FixedTemplateGenerator::ignore_rules(echo_renderer()), ".gitignore"),
            (
                FixedTemplateGenerator::app_config(echo_renderer()),
                "src/main/resources/application.yml",
            ),
            (
                FixedTemplateGenerator::project_documentation(echo_renderer()),
                "README.md",
            ),
        ];
        for (generator, expected) in cases {
            assert_eq!(paths(&generator.generate(&bp).unwrap()), vec![expected]);
        }
    }

    #[test]
    fn render_failure_is_wrapped_with_kind() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|_, template, _| {
            Err(RenderError::Failed {
                template: template.to_string(),
                reason: "undefined value".into(),
            })
        });
        let err = FixedTemplateGenerator::app_config(Arc::new(renderer))
            .generate(&blueprint(request()))
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Render {
                kind: ArtifactKind::AppConfig,
                template: "config/application.yml.j2".into(),
                reason: "undefined value".into(),
            }
        );
    }
}
