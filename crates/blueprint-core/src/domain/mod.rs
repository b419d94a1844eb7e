//! Core domain layer for Blueprint.
//!
//! Pure, synchronous business rules: identifier validation, the
//! compatibility matrix and the `ProjectBlueprint` aggregate. No I/O and no
//! `tracing`; templates, files and archives are reached only through the
//! application layer's ports.

pub mod blueprint;
pub mod capabilities;
pub mod dependency;
pub mod error;
pub mod identity;
pub mod naming;
pub mod resource;
pub mod rules;
pub mod value_objects;

pub use blueprint::{DependencyRequest, ProjectBlueprint, ProjectRequest, SPRING_BOOT_GROUP};
pub use dependency::{
    Dependencies, Dependency, DependencyArtifactId, DependencyCoordinates, DependencyScope,
    DependencyVersion,
};
pub use error::{DomainError, ErrorCategory, Field};
pub use identity::{ArtifactId, GroupId, ProjectIdentity};
pub use naming::{PackageName, ProjectDescription, ProjectMetadata, ProjectName};
pub use resource::{Charset, GeneratedResource, RelativePath};
pub use value_objects::{
    ArchitectureSpec, BuildTool, EnforcementMode, Framework, GovernanceSpec, JavaVersion,
    JvmTarget, Language, Layout, PlatformTarget, SampleCodeLevel, SampleCodeSpec,
    SpringBootVersion, TechStack,
};
