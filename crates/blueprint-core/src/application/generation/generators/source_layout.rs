//! Directory skeleton for the chosen layout. Emits no files.

use crate::application::error::GenerationError;
use crate::application::generation::generators::output_path;
use crate::application::generation::{ArtifactGenerator, ArtifactKind};
use crate::domain::{GeneratedResource, Layout, ProjectBlueprint};

const SOURCE_ROOTS: [&str; 4] = [
    "src/main/java",
    "src/main/resources",
    "src/test/java",
    "src/test/resources",
];

const STANDARD_PACKAGES: &[&str] = &["controller", "service", "repository", "domain", "config"];

const HEXAGONAL_PACKAGES: &[&str] = &[
    "domain/model",
    "domain/service",
    "application/port/in",
    "application/port/out",
    "application/usecase",
    "adapter/in/rest",
    "adapter/out/persistence",
    "bootstrap",
];

pub struct SourceLayoutGenerator;

impl SourceLayoutGenerator {
    fn packages(layout: Layout) -> &'static [&'static str] {
        match layout {
            Layout::Standard => STANDARD_PACKAGES,
            Layout::Hexagonal => HEXAGONAL_PACKAGES,
        }
    }
}

impl ArtifactGenerator for SourceLayoutGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SourceLayout
    }

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError> {
        let kind = self.kind();
        let package = blueprint.package_name().to_path();
        let main_base = format!("src/main/java/{package}");
        let test_base = format!("src/test/java/{package}");

        let packages = Self::packages(blueprint.architecture().layout)
            .iter()
            .map(|sub| format!("{main_base}/{sub}"));

        SOURCE_ROOTS
            .iter()
            .map(|root| (*root).to_owned())
            .chain([main_base.clone(), test_base])
            .chain(packages)
            .map(|raw| output_path(kind, &raw).map(GeneratedResource::directory))
            .collect()
    }
}
