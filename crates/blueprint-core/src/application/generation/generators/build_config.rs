//! `pom.xml` generation.
//!
//! The dependency list is assembled here, not in the template: the base
//! starter, the user's selections, then entries derived from other choices.
//! A derived entry is skipped when the user already selected the same
//! coordinates.

use std::sync::Arc;

use serde::Serialize;

use crate::application::error::GenerationError;
use crate::application::generation::generators::{output_path, render};
use crate::application::generation::{ArtifactGenerator, ArtifactKind, model};
use crate::application::ports::{TemplateRef, TemplateRenderer};
use crate::domain::{GeneratedResource, ProjectBlueprint, SPRING_BOOT_GROUP};

const TEMPLATE: &str = "build/pom.xml.j2";

const ARCHUNIT_VERSION: &str = "1.3.0";

/// One `<dependency>` element of the generated build file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
}

impl BuildDependency {
    fn new(group_id: &str, artifact_id: &str) -> Self {
        Self {
            group_id: group_id.to_owned(),
            artifact_id: artifact_id.to_owned(),
            version: None,
            scope: None,
        }
    }

    fn scoped(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_owned());
        self
    }

    fn versioned(mut self, version: &str) -> Self {
        self.version = Some(version.to_owned());
        self
    }
}

pub struct BuildConfigGenerator {
    renderer: Arc<dyn TemplateRenderer>,
}

impl BuildConfigGenerator {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Every dependency written to the build file, in output order.
    pub fn dependencies(blueprint: &ProjectBlueprint) -> Vec<BuildDependency> {
        let selected = |group: &str, artifact: &str| blueprint.has_dependency(group, artifact);
        let mut out = Vec::new();

        if !selected(SPRING_BOOT_GROUP, "spring-boot-starter") {
            out.push(BuildDependency::new(SPRING_BOOT_GROUP, "spring-boot-starter"));
        }

        out.extend(blueprint.dependencies().iter().map(|d| BuildDependency {
            group_id: d.coordinates().group_id().to_string(),
            artifact_id: d.coordinates().artifact_id().to_string(),
            version: d.version().map(ToString::to_string),
            scope: d.scope().map(|s| s.to_string()),
        }));

        let mut derived = Vec::new();
        if model::has_starter(blueprint, model::JPA_STARTER) {
            derived.push(BuildDependency::new("com.h2database", "h2").scoped("runtime"));
        }
        derived.push(
            BuildDependency::new(SPRING_BOOT_GROUP, "spring-boot-starter-test").scoped("test"),
        );
        if blueprint.architecture().governance.enforcement_mode.is_enabled() {
            derived.push(
                BuildDependency::new("com.tngtech.archunit", "archunit-junit5")
                    .versioned("${archunit.version}")
                    .scoped("test"),
            );
        }
        out.extend(
            derived
                .into_iter()
                .filter(|d| !selected(&d.group_id, &d.artifact_id)),
        );
        out
    }

    /// `<properties>` entries, in output order.
    pub fn properties(blueprint: &ProjectBlueprint) -> Vec<(&'static str, String)> {
        let mut props = vec![("java.version", blueprint.jvm().java.to_string())];
        if blueprint.architecture().governance.enforcement_mode.is_enabled() {
            props.push(("archunit.version", ARCHUNIT_VERSION.to_owned()));
        }
        props
    }
}

impl ArtifactGenerator for BuildConfigGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::BuildConfig
    }

    fn generate(
        &self,
        blueprint: &ProjectBlueprint,
    ) -> Result<Vec<GeneratedResource>, GenerationError> {
        let kind = self.kind();
        let dependencies = serde_json::to_value(Self::dependencies(blueprint)).map_err(|e| {
            GenerationError::Render {
                kind,
                template: TEMPLATE.into(),
                reason: e.to_string(),
            }
        })?;
        let properties: Vec<serde_json::Value> = Self::properties(blueprint)
            .into_iter()
            .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
            .collect();

        let model = model::base_model(blueprint)
            .with("build_dependencies", dependencies)
            .with("properties", properties);

        let resource = render(
            self.renderer.as_ref(),
            kind,
            &output_path(kind, "pom.xml")?,
            &TemplateRef::new(TEMPLATE),
            &model,
        )?;
        Ok(vec![resource])
    }
}
