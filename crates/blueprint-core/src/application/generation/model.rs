//! Template variables derived from a blueprint.

use serde_json::json;

use crate::application::ports::TemplateModel;
use crate::domain::{ProjectBlueprint, SPRING_BOOT_GROUP};

pub(crate) const WEB_STARTER: &str = "spring-boot-starter-web";
pub(crate) const JPA_STARTER: &str = "spring-boot-starter-data-jpa";

/// Variables shared by every template.
pub fn base_model(blueprint: &ProjectBlueprint) -> TemplateModel {
    let jvm = blueprint.jvm();
    let architecture = blueprint.architecture();
    let package = blueprint.package_name();

    TemplateModel::new()
        .with("group_id", blueprint.group_id().as_str())
        .with("artifact_id", blueprint.artifact_id().as_str())
        .with("name", blueprint.metadata().name.as_str())
        .with("description", blueprint.metadata().description.as_str())
        .with("package_name", package.as_str())
        .with("package_path", package.to_path())
        .with("application_class", blueprint.application_class_name())
        .with("java_version", jvm.java.as_str())
        .with("spring_boot_line", jvm.spring_boot.as_str())
        .with("spring_boot_version", jvm.spring_boot.release())
        .with("layout", architecture.layout.as_str())
        .with(
            "enforcement_mode",
            architecture.governance.enforcement_mode.as_str(),
        )
        .with("sample_code_level", architecture.sample_code.level.as_str())
        .with("has_web", has_starter(blueprint, WEB_STARTER))
        .with("has_jpa", has_starter(blueprint, JPA_STARTER))
        .with(
            "dependencies",
            blueprint
                .dependencies()
                .iter()
                .map(|d| {
                    json!({
                        "group_id": d.coordinates().group_id().as_str(),
                        "artifact_id": d.coordinates().artifact_id().as_str(),
                        "version": d.version().map(|v| v.as_str()),
                        "scope": d.scope().map(|s| s.as_str()),
                    })
                })
                .collect::<Vec<_>>(),
        )
}

pub(crate) fn has_starter(blueprint: &ProjectBlueprint, artifact_id: &str) -> bool {
    blueprint.has_dependency(SPRING_BOOT_GROUP, artifact_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyRequest, ProjectRequest};

    #[test]
    fn model_exposes_naming_and_versions() {
        let bp = ProjectBlueprint::create(
            &ProjectRequest::new("com.example", "order-service", "Orders", "Order handling service")
                .with_dependency(DependencyRequest::starter("web")),
        )
        .unwrap();
        let model = base_model(&bp);

        assert_eq!(model.get("package_path"), Some(&json!("com/example/orderservice")));
        assert_eq!(
            model.get("application_class"),
            Some(&json!("OrderServiceApplication"))
        );
        assert_eq!(model.get("spring_boot_version"), Some(&json!("3.5.3")));
        assert_eq!(model.get("has_web"), Some(&json!(true)));
        assert_eq!(model.get("has_jpa"), Some(&json!(false)));
    }
}
