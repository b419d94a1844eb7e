// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::fmt;

use thiserror::Error;

/// The input field a validation error refers to.
///
/// `key()` is the stable prefix of every error code raised for the field;
/// `Display` is the caller-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GroupId,
    ArtifactId,
    Name,
    Description,
    PackageName,
    Framework,
    BuildTool,
    Language,
    TechStack,
    PlatformTarget,
    JavaVersion,
    SpringBootVersion,
    Layout,
    EnforcementMode,
    SampleCodeLevel,
    DependencyGroupId,
    DependencyArtifactId,
    DependencyVersion,
    DependencyScope,
    Dependency,
}

impl Field {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::GroupId => "group_id",
            Self::ArtifactId => "artifact_id",
            Self::Name => "name",
            Self::Description => "description",
            Self::PackageName => "package_name",
            Self::Framework => "framework",
            Self::BuildTool => "build_tool",
            Self::Language => "language",
            Self::TechStack => "tech_stack",
            Self::PlatformTarget => "platform_target",
            Self::JavaVersion => "java_version",
            Self::SpringBootVersion => "spring_boot_version",
            Self::Layout => "layout",
            Self::EnforcementMode => "enforcement_mode",
            Self::SampleCodeLevel => "sample_code_level",
            Self::DependencyGroupId => "dependency.group_id",
            Self::DependencyArtifactId => "dependency.artifact_id",
            Self::DependencyVersion => "dependency.version",
            Self::DependencyScope => "dependency.scope",
            Self::Dependency => "dependency",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::GroupId => "groupId",
            Self::ArtifactId => "artifactId",
            Self::Name => "name",
            Self::Description => "description",
            Self::PackageName => "packageName",
            Self::Framework => "framework",
            Self::BuildTool => "build tool",
            Self::Language => "language",
            Self::TechStack => "tech stack",
            Self::PlatformTarget => "platform target",
            Self::JavaVersion => "Java version",
            Self::SpringBootVersion => "Spring Boot version",
            Self::Layout => "layout",
            Self::EnforcementMode => "enforcement mode",
            Self::SampleCodeLevel => "sample code level",
            Self::DependencyGroupId => "dependency groupId",
            Self::DependencyArtifactId => "dependency artifactId",
            Self::DependencyVersion => "dependency version",
            Self::DependencyScope => "dependency scope",
            Self::Dependency => "dependency",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable and comparable (tests match on exact variants)
/// - Coded (`code()` + `args()` for a caller-supplied localiser)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Field rule violations
    // ========================================================================
    #[error("{field} must not be blank")]
    Blank { field: Field },

    #[error("{field} must be between {min} and {max} characters (got {actual})")]
    Length {
        field: Field,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains invalid character {character:?}")]
    InvalidCharacter { field: Field, character: char },

    #[error("{field} must start with a letter")]
    MustStartWithLetter { field: Field },

    #[error("{field} must not start or end with {character:?}")]
    EdgeCharacter { field: Field, character: char },

    #[error("{field} segment {segment:?} must match [a-z][a-z0-9]*")]
    InvalidSegment { field: Field, segment: String },

    #[error("{field} '{value}' uses the reserved namespace '{prefix}'")]
    ReservedPrefix {
        field: Field,
        value: String,
        prefix: &'static str,
    },

    #[error("{field} must not contain control characters")]
    ControlCharacter { field: Field },

    #[error("{field} is required")]
    Missing { field: Field },

    #[error("unknown {field} '{value}'")]
    UnknownValue { field: Field, value: String },

    #[error("invalid resource path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    // ========================================================================
    // Dependency set violations
    // ========================================================================
    #[error("duplicate dependency coordinates: {coordinates}")]
    DuplicateDependency { coordinates: String },

    #[error("dependency entry at index {index} is null")]
    NullDependency { index: usize },

    // ========================================================================
    // Compatibility
    // ========================================================================
    #[error("tech stack {stack} is not supported (only spring-boot/maven/java)")]
    UnsupportedStack { stack: String },

    #[error("platform target '{target}' is not supported")]
    UnsupportedPlatform { target: String },

    #[error("Java {runtime} is not compatible with Spring Boot {framework}")]
    Incompatible { runtime: String, framework: String },
}

impl DomainError {
    /// Stable, machine-readable error code such as `artifact_id.length`.
    pub fn code(&self) -> String {
        let (field, rule) = match self {
            Self::Blank { field } => (field.key(), "blank"),
            Self::Length { field, .. } => (field.key(), "length"),
            Self::InvalidCharacter { field, .. } => (field.key(), "charset"),
            Self::MustStartWithLetter { field } => (field.key(), "start_letter"),
            Self::EdgeCharacter { field, .. } => (field.key(), "edge_char"),
            Self::InvalidSegment { field, .. } => (field.key(), "segment"),
            Self::ReservedPrefix { field, .. } => (field.key(), "reserved"),
            Self::ControlCharacter { field } => (field.key(), "control_char"),
            Self::Missing { field } => (field.key(), "missing"),
            Self::UnknownValue { field, .. } => (field.key(), "unknown"),
            Self::InvalidPath { .. } => ("resource", "path"),
            Self::DuplicateDependency { .. } => ("dependencies", "duplicate"),
            Self::NullDependency { .. } => ("dependencies", "null"),
            Self::UnsupportedStack { .. } => ("compatibility", "unsupported_stack"),
            Self::UnsupportedPlatform { .. } => ("compatibility", "unsupported_platform"),
            Self::Incompatible { .. } => ("compatibility", "incompatible"),
        };
        format!("{field}.{rule}")
    }

    /// Positional arguments for localising [`Self::code`].
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::Blank { .. }
            | Self::MustStartWithLetter { .. }
            | Self::ControlCharacter { .. }
            | Self::Missing { .. } => vec![],
            Self::Length {
                min, max, actual, ..
            } => vec![min.to_string(), max.to_string(), actual.to_string()],
            Self::InvalidCharacter { character, .. } | Self::EdgeCharacter { character, .. } => {
                vec![character.to_string()]
            }
            Self::InvalidSegment { segment, .. } => vec![segment.clone()],
            Self::ReservedPrefix { value, prefix, .. } => vec![value.clone(), (*prefix).into()],
            Self::UnknownValue { value, .. } => vec![value.clone()],
            Self::InvalidPath { path, reason } => vec![path.clone(), (*reason).into()],
            Self::DuplicateDependency { coordinates } => vec![coordinates.clone()],
            Self::NullDependency { index } => vec![index.to_string()],
            Self::UnsupportedStack { stack } => vec![stack.clone()],
            Self::UnsupportedPlatform { target } => vec![target.clone()],
            Self::Incompatible { runtime, framework } => vec![runtime.clone(), framework.clone()],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Length { field, min, max, .. } => {
                vec![format!("Use a {field} between {min} and {max} characters")]
            }
            Self::InvalidCharacter {
                field: Field::ArtifactId,
                ..
            } => vec![
                "artifactId may contain lower-case letters, digits and dashes".into(),
                "Example: order-service".into(),
            ],
            Self::InvalidSegment { field, .. } => vec![
                format!("Each dot-separated {field} segment starts with a letter"),
                "Example: com.example.orders".into(),
            ],
            Self::ReservedPrefix { prefix, .. } => vec![
                format!("'{prefix}' is reserved by the Java platform"),
                "Use your organisation's reverse domain, e.g. com.example".into(),
            ],
            Self::DuplicateDependency { coordinates } => {
                vec![format!("Remove the repeated '{coordinates}' entry")]
            }
            Self::UnsupportedStack { .. } => {
                vec!["Use --build-tool maven --language java".into()]
            }
            Self::Incompatible { runtime, .. } => vec![
                format!("Java {runtime} needs a newer Spring Boot line"),
                "Run `blueprint targets` to list supported combinations".into(),
            ],
            Self::UnknownValue { field, .. } => {
                vec![format!("Check the accepted values for {field} with --help")]
            }
            _ => vec!["See `blueprint new --help` for accepted values".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedStack { .. }
            | Self::UnsupportedPlatform { .. }
            | Self::Incompatible { .. } => ErrorCategory::Compatibility,
            Self::InvalidPath { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
