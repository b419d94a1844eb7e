//! End-to-end generation over the embedded templates, the local filesystem
//! and the zip archiver.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use blueprint_adapters::{EmbeddedTemplates, generation_service};
use blueprint_core::application::IoError;
use blueprint_core::domain::{DependencyRequest, DomainError, ProjectRequest};
use blueprint_core::error::BlueprintError;
use zip::ZipArchive;

fn request() -> ProjectRequest {
    ProjectRequest::new(
        "com.example",
        "order-service",
        "Order Service",
        "Handles orders and billing",
    )
}

fn archive_entries(path: &Path) -> Vec<(String, Vec<u8>)> {
    let mut zip = ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..zip.len())
        .map(|i| {
            let mut entry = zip.by_index(i).unwrap();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).unwrap();
            (entry.name().to_owned(), bytes)
        })
        .collect()
}

#[test]
fn default_project_is_written_and_archived() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();

    let result = service.generate(&request(), temp.path()).unwrap();

    let root = temp.path().join("order-service");
    assert_eq!(result.project_root, root);
    assert_eq!(result.archive_path, temp.path().join("order-service.zip"));

    for file in [
        "pom.xml",
        ".mvn/wrapper/maven-wrapper.properties",
        ".gitignore",
        "src/main/resources/application.yml",
        "src/main/java/com/example/orderservice/OrderServiceApplication.java",
        "src/test/java/com/example/orderservice/OrderServiceApplicationTests.java",
        "README.md",
    ] {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    assert!(root.join("src/test/resources").is_dir());
    assert!(root.join("src/main/java/com/example/orderservice/controller").is_dir());
    assert!(!root.join("src/test/java/com/example/orderservice/architecture").exists());

    let pom = std::fs::read_to_string(root.join("pom.xml")).unwrap();
    assert!(pom.contains("<version>3.5.3</version>"));
    assert!(pom.contains("<java.version>21</java.version>"));
    assert!(pom.contains("<artifactId>spring-boot-starter-test</artifactId>"));
    assert!(!pom.contains("archunit"));

    let main = std::fs::read_to_string(
        root.join("src/main/java/com/example/orderservice/OrderServiceApplication.java"),
    )
    .unwrap();
    assert!(main.starts_with("package com.example.orderservice;"));
    assert!(main.contains("SpringApplication.run(OrderServiceApplication.class, args);"));
}

#[test]
fn archive_mirrors_the_tree_under_the_artifact_prefix() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let result = service.generate(&request(), temp.path()).unwrap();

    let entries = archive_entries(&result.archive_path);
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();

    assert!(names.iter().all(|n| n.starts_with("order-service/")));
    assert!(!names.contains(&"order-service/"));
    assert!(names.contains(&"order-service/src/"));
    assert!(names.contains(&"order-service/src/test/resources/"));

    let (_, pom) = entries
        .iter()
        .find(|(n, _)| n == "order-service/pom.xml")
        .unwrap();
    assert_eq!(pom, &std::fs::read(result.project_root.join("pom.xml")).unwrap());
}

#[test]
fn strict_hexagonal_web_project_gets_samples_and_rules() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let req = request()
        .with_layout("hexagonal")
        .with_enforcement_mode("strict")
        .with_sample_code_level("basic")
        .with_dependency(DependencyRequest::starter("web"))
        .with_dependency(DependencyRequest::starter("data-jpa"));

    let result = service.generate(&req, temp.path()).unwrap();
    let base = result.project_root.join("src");

    assert!(
        base.join("main/java/com/example/orderservice/domain/model/Greeting.java")
            .is_file()
    );
    assert!(
        base.join("test/java/com/example/orderservice/application/usecase/GreetServiceTest.java")
            .is_file()
    );
    let rules = base.join("test/java/com/example/orderservice/architecture");
    assert!(rules.join("HexagonalLayersArchitectureTest.java").is_file());
    assert!(rules.join("RestAdapterArchitectureTest.java").is_file());

    let pom = std::fs::read_to_string(result.project_root.join("pom.xml")).unwrap();
    assert!(pom.contains("<archunit.version>1.3.0</archunit.version>"));
    assert!(pom.contains("<artifactId>h2</artifactId>"));
    assert!(pom.contains("<version>${archunit.version}</version>"));

    let config =
        std::fs::read_to_string(result.project_root.join("src/main/resources/application.yml"))
            .unwrap();
    assert!(config.contains("jdbc:h2:mem:order-service"));
    assert!(config.contains("port: 8080"));
}

#[test]
fn strict_without_web_drops_rest_rules() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let result = service
        .generate(&request().with_enforcement_mode("strict"), temp.path())
        .unwrap();

    let rules = result
        .project_root
        .join("src/test/java/com/example/orderservice/architecture");
    assert!(rules.join("LayerDependencyArchitectureTest.java").is_file());
    assert!(rules.join("NoCyclesArchitectureTest.java").is_file());
    assert!(!rules.join("ControllerNamingArchitectureTest.java").exists());
    assert!(!rules.join("RestBoundaryArchitectureTest.java").exists());
}

#[test]
fn identical_requests_give_identical_archives() {
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let req = request()
        .with_layout("hexagonal")
        .with_enforcement_mode("basic")
        .with_sample_code_level("basic");

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = service.generate(&req, first.path()).unwrap();
    let b = service.generate(&req, second.path()).unwrap();

    assert_ne!(a.run_id, b.run_id);
    assert_eq!(a.files, b.files);
    assert_eq!(archive_entries(&a.archive_path), archive_entries(&b.archive_path));
    assert_eq!(
        std::fs::read(&a.archive_path).unwrap(),
        std::fs::read(&b.archive_path).unwrap()
    );
}

#[test]
fn second_run_into_the_same_root_fails() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    service.generate(&request(), temp.path()).unwrap();

    let err = service.generate(&request(), temp.path()).unwrap_err();
    assert!(matches!(err, BlueprintError::Io(IoError::AlreadyExists { .. })));
}

#[test]
fn incompatible_platform_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let req = request()
        .with_java_version("25")
        .with_spring_boot_version("3.4");

    let err = service.generate(&req, temp.path()).unwrap_err();
    assert!(matches!(
        err,
        BlueprintError::Validation(DomainError::Incompatible { .. })
    ));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn preview_materializes_into_memory() {
    use blueprint_adapters::MemoryFilesystem;
    use blueprint_core::application::{ExistencePolicy, ResourceMaterializer};

    let service = generation_service(Arc::new(EmbeddedTemplates::new())).unwrap();
    let preview = service.preview(&request()).unwrap();

    let fs = MemoryFilesystem::new();
    let materializer = ResourceMaterializer::new(Arc::new(fs.clone()));
    let root = materializer
        .prepare_root(
            Path::new("/out"),
            preview.blueprint.artifact_id(),
            ExistencePolicy::FailIfExists,
        )
        .unwrap();
    materializer.write(&root, &preview.resources).unwrap();

    let pom = fs.read_file(Path::new("/out/order-service/pom.xml")).unwrap();
    assert!(String::from_utf8(pom).unwrap().contains("<artifactId>order-service</artifactId>"));
    assert!(
        fs.list_directories()
            .contains(&Path::new("/out/order-service/src/test/resources").to_path_buf())
    );
}
