use std::fmt;

use serde::Serialize;

/// Stable identifier for a category of generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    BuildConfig,
    BuildToolFiles,
    IgnoreRules,
    SourceLayout,
    AppConfig,
    MainEntryPoint,
    TestEntryPoint,
    SampleCode,
    ArchitectureGovernance,
    ProjectDocumentation,
}

impl ArtifactKind {
    pub const ALL: [Self; 10] = [
        Self::BuildConfig,
        Self::BuildToolFiles,
        Self::IgnoreRules,
        Self::SourceLayout,
        Self::AppConfig,
        Self::MainEntryPoint,
        Self::TestEntryPoint,
        Self::SampleCode,
        Self::ArchitectureGovernance,
        Self::ProjectDocumentation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuildConfig => "build-config",
            Self::BuildToolFiles => "build-tool-files",
            Self::IgnoreRules => "ignore-rules",
            Self::SourceLayout => "source-layout",
            Self::AppConfig => "app-config",
            Self::MainEntryPoint => "main-entry-point",
            Self::TestEntryPoint => "test-entry-point",
            Self::SampleCode => "sample-code",
            Self::ArchitectureGovernance => "architecture-governance",
            Self::ProjectDocumentation => "project-documentation",
        }
    }

    /// One-line summary for `blueprint artifacts`.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BuildConfig => "Maven pom.xml with starters and derived dependencies",
            Self::BuildToolFiles => "Maven wrapper properties",
            Self::IgnoreRules => ".gitignore",
            Self::SourceLayout => "Source and package directories for the layout",
            Self::AppConfig => "application.yml",
            Self::MainEntryPoint => "Spring Boot application class",
            Self::TestEntryPoint => "Context-loads test",
            Self::SampleCode => "Illustrative hexagonal sample code",
            Self::ArchitectureGovernance => "ArchUnit architecture tests",
            Self::ProjectDocumentation => "README.md",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
