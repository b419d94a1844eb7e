//! The `ProjectBlueprint` aggregate root and the raw request it is built from.
//!
//! A `ProjectBlueprint` is the fully-validated description of one project.
//! [`ProjectBlueprint::create`] is the only constructor and the only place
//! business rules are enforced; once a blueprint exists, every generator can
//! trust it without re-checking.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::capabilities;
use crate::domain::dependency::{Dependencies, Dependency};
use crate::domain::error::{DomainError, Field};
use crate::domain::identity::{ArtifactId, GroupId, ProjectIdentity};
use crate::domain::naming::{PackageName, ProjectDescription, ProjectMetadata, ProjectName};
use crate::domain::value_objects::{
    ArchitectureSpec, BuildTool, EnforcementMode, Framework, JavaVersion, JvmTarget, Language,
    Layout, PlatformTarget, SampleCodeLevel, SpringBootVersion, TechStack,
};

/// Group of the Spring Boot starters; bare dependency names resolve here.
pub const SPRING_BOOT_GROUP: &str = "org.springframework.boot";

const STARTER_PREFIX: &str = "spring-boot-starter";
const JVM_PLATFORM: &str = "spring-boot-jvm";

// ── Raw request ──────────────────────────────────────────────────────────────

/// One requested library before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRequest {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl DependencyRequest {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
        }
    }

    /// A Spring Boot starter by short name: `web` → `spring-boot-starter-web`.
    pub fn starter(name: &str) -> Self {
        let name = name.trim();
        let artifact = if name.starts_with(STARTER_PREFIX) {
            name.to_owned()
        } else {
            format!("{STARTER_PREFIX}-{name}")
        };
        Self::new(SPRING_BOOT_GROUP, artifact)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

impl FromStr for DependencyRequest {
    type Err = DomainError;

    /// `group:artifact[:version][@scope]`, or a bare starter name such as
    /// `data-jpa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coords, scope) = match s.trim().split_once('@') {
            Some((coords, scope)) => (coords, Some(scope)),
            None => (s.trim(), None),
        };
        let parts: Vec<&str> = coords.split(':').collect();
        let request = match parts.as_slice() {
            [name] if !name.is_empty() => Self::starter(name),
            [group, artifact] => Self::new(*group, *artifact),
            [group, artifact, version] => Self::new(*group, *artifact).with_version(*version),
            _ => {
                return Err(DomainError::UnknownValue {
                    field: Field::Dependency,
                    value: s.trim().to_owned(),
                });
            }
        };
        Ok(match scope {
            Some(scope) => request.with_scope(scope),
            None => request,
        })
    }
}

/// Unvalidated caller input. Every field is optional so that absence can be
/// reported as a typed error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRequest {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub package_name: Option<String>,
    pub framework: Option<String>,
    pub build_tool: Option<String>,
    pub language: Option<String>,
    pub java_version: Option<String>,
    pub spring_boot_version: Option<String>,
    /// `None` or `spring-boot-jvm` selects the JVM platform; anything else is
    /// a custom platform label.
    pub platform: Option<String>,
    pub layout: Option<String>,
    pub enforcement_mode: Option<String>,
    pub sample_code_level: Option<String>,
    pub dependencies: Vec<Option<DependencyRequest>>,
}

impl ProjectRequest {
    /// Request pre-filled with the supported stack and the newest Spring Boot
    /// line on Java 21.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            name: Some(name.into()),
            description: Some(description.into()),
            framework: Some(Framework::SpringBoot.to_string()),
            build_tool: Some(BuildTool::Maven.to_string()),
            language: Some(Language::Java.to_string()),
            java_version: Some(JavaVersion::Java21.to_string()),
            spring_boot_version: Some(SpringBootVersion::V3_5.to_string()),
            ..Self::default()
        }
    }

    pub fn with_package_name(mut self, package: impl Into<String>) -> Self {
        self.package_name = Some(package.into());
        self
    }

    pub fn with_java_version(mut self, java: impl Into<String>) -> Self {
        self.java_version = Some(java.into());
        self
    }

    pub fn with_spring_boot_version(mut self, boot: impl Into<String>) -> Self {
        self.spring_boot_version = Some(boot.into());
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_enforcement_mode(mut self, mode: impl Into<String>) -> Self {
        self.enforcement_mode = Some(mode.into());
        self
    }

    pub fn with_sample_code_level(mut self, level: impl Into<String>) -> Self {
        self.sample_code_level = Some(level.into());
        self
    }

    pub fn with_dependency(mut self, dependency: DependencyRequest) -> Self {
        self.dependencies.push(Some(dependency));
        self
    }
}

// ── Aggregate root ───────────────────────────────────────────────────────────

/// A fully-validated project specification.
///
/// Guarantees on construction:
/// - every identifier passed its rule chain
/// - the tech stack and platform target are compatible
/// - dependency coordinates are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBlueprint {
    identity: ProjectIdentity,
    metadata: ProjectMetadata,
    package_name: PackageName,
    tech_stack: TechStack,
    jvm: JvmTarget,
    architecture: ArchitectureSpec,
    dependencies: Dependencies,
}

impl ProjectBlueprint {
    /// Validate `request` field by field and stop at the first violation.
    pub fn create(request: &ProjectRequest) -> Result<Self, DomainError> {
        let group_id = GroupId::parse(text(&request.group_id))?;
        let artifact_id = ArtifactId::parse(text(&request.artifact_id))?;
        let name = ProjectName::parse(text(&request.name))?;
        let description = ProjectDescription::parse(text(&request.description))?;

        let package_name = match request.package_name.as_deref() {
            Some(raw) if !raw.trim().is_empty() => PackageName::parse(raw)?,
            _ => PackageName::derive(&group_id, &artifact_id)?,
        };

        let tech_stack = TechStack::try_from_parts(
            parse_opt(&request.framework)?,
            parse_opt(&request.build_tool)?,
            parse_opt(&request.language)?,
        )?;
        let platform = resolve_platform(request)?;
        let jvm = capabilities::ensure_compatible(Some(&tech_stack), platform.as_ref())?;

        let architecture = ArchitectureSpec::new(
            parse_opt::<Layout>(&request.layout)?.unwrap_or_default(),
            parse_opt::<EnforcementMode>(&request.enforcement_mode)?.unwrap_or_default(),
            parse_opt::<SampleCodeLevel>(&request.sample_code_level)?.unwrap_or_default(),
        );

        let entries = request
            .dependencies
            .iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .map(|d| {
                        Dependency::parse(
                            &d.group_id,
                            &d.artifact_id,
                            d.version.as_deref(),
                            d.scope.as_deref(),
                        )
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let dependencies = Dependencies::try_from_entries(entries)?;

        Ok(Self {
            identity: ProjectIdentity::new(group_id, artifact_id),
            metadata: ProjectMetadata { name, description },
            package_name,
            tech_stack,
            jvm,
            architecture,
            dependencies,
        })
    }

    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    pub fn group_id(&self) -> &GroupId {
        self.identity.group_id()
    }

    pub fn artifact_id(&self) -> &ArtifactId {
        self.identity.artifact_id()
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn package_name(&self) -> &PackageName {
        &self.package_name
    }

    pub fn tech_stack(&self) -> TechStack {
        self.tech_stack
    }

    pub fn jvm(&self) -> JvmTarget {
        self.jvm
    }

    pub fn platform_target(&self) -> PlatformTarget {
        PlatformTarget::SpringBootJvm(self.jvm)
    }

    pub fn architecture(&self) -> &ArchitectureSpec {
        &self.architecture
    }

    pub fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    pub fn has_dependency(&self, group_id: &str, artifact_id: &str) -> bool {
        self.dependencies.contains(group_id, artifact_id)
    }

    /// `order-service` → `OrderServiceApplication`.
    pub fn application_class_name(&self) -> String {
        format!("{}Application", self.artifact_id().to_pascal_case())
    }
}

impl fmt::Display for ProjectBlueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.identity, self.tech_stack, self.jvm
        )
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Absent text is validated as empty so it reports `Blank`.
fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn parse_opt<T>(value: &Option<String>) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::parse)
        .transpose()
}

fn resolve_platform(request: &ProjectRequest) -> Result<Option<PlatformTarget>, DomainError> {
    let platform = request
        .platform
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    if let Some(label) = platform.filter(|p| !p.eq_ignore_ascii_case(JVM_PLATFORM)) {
        return Ok(Some(PlatformTarget::Custom {
            label: label.to_owned(),
        }));
    }

    let java = parse_opt::<JavaVersion>(&request.java_version)?;
    let boot = parse_opt::<SpringBootVersion>(&request.spring_boot_version)?;
    match (java, boot) {
        (None, None) if platform.is_none() => Ok(None),
        (Some(java), Some(boot)) => Ok(Some(PlatformTarget::jvm(java, boot))),
        (None, _) => Err(DomainError::Missing {
            field: Field::JavaVersion,
        }),
        (Some(_), None) => Err(DomainError::Missing {
            field: Field::SpringBootVersion,
        }),
    }
}
