//! Domain value objects: tech stack, platform versions, architecture options.
//!
//! # Design
//!
//! These are pure value types — `Copy` where possible, equality-by-value,
//! no identity. They hold NO compatibility logic; the version matrix lives in
//! `capabilities.rs`. This file defines the types, their string forms, and
//! their case-insensitive `FromStr` parsers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, Field};

fn unknown(field: Field, value: &str) -> DomainError {
    DomainError::UnknownValue {
        field,
        value: value.to_owned(),
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    SpringBoot,
}

impl Framework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SpringBoot => "spring-boot",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring-boot" | "springboot" | "spring" => Ok(Self::SpringBoot),
            other => Err(unknown(Field::Framework, other)),
        }
    }
}

// ── BuildTool ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTool {
    Maven,
    Gradle,
}

impl BuildTool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
        }
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maven" | "mvn" => Ok(Self::Maven),
            "gradle" => Ok(Self::Gradle),
            other => Err(unknown(Field::BuildTool, other)),
        }
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Kotlin,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            other => Err(unknown(Field::Language, other)),
        }
    }
}

// ── TechStack ────────────────────────────────────────────────────────────────

/// `{framework, buildTool, language}`; all three are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    framework: Framework,
    build_tool: BuildTool,
    language: Language,
}

impl TechStack {
    pub const fn new(framework: Framework, build_tool: BuildTool, language: Language) -> Self {
        Self {
            framework,
            build_tool,
            language,
        }
    }

    pub const fn spring_boot_maven_java() -> Self {
        Self::new(Framework::SpringBoot, BuildTool::Maven, Language::Java)
    }

    /// Build from optional parts; the first absent part is reported.
    pub fn try_from_parts(
        framework: Option<Framework>,
        build_tool: Option<BuildTool>,
        language: Option<Language>,
    ) -> Result<Self, DomainError> {
        let framework = framework.ok_or(DomainError::Missing {
            field: Field::Framework,
        })?;
        let build_tool = build_tool.ok_or(DomainError::Missing {
            field: Field::BuildTool,
        })?;
        let language = language.ok_or(DomainError::Missing {
            field: Field::Language,
        })?;
        Ok(Self::new(framework, build_tool, language))
    }

    pub const fn framework(&self) -> Framework {
        self.framework
    }

    pub const fn build_tool(&self) -> BuildTool {
        self.build_tool
    }

    pub const fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.framework, self.build_tool, self.language)
    }
}

// ── Platform versions ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum JavaVersion {
    #[serde(rename = "21")]
    Java21,
    #[serde(rename = "25")]
    Java25,
}

impl JavaVersion {
    pub const ALL: [Self; 2] = [Self::Java21, Self::Java25];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java21 => "21",
            Self::Java25 => "25",
        }
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JavaVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("java")
            .or_else(|| lowered.strip_prefix("jdk"))
            .unwrap_or(lowered.as_str())
            .trim_start_matches(['-', ' ']);
        match digits {
            "21" => Ok(Self::Java21),
            "25" => Ok(Self::Java25),
            _ => Err(unknown(Field::JavaVersion, s.trim())),
        }
    }
}

/// A Spring Boot release line. The patch release written into build files
/// is fixed per line so generated output is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SpringBootVersion {
    #[serde(rename = "3.4")]
    V3_4,
    #[serde(rename = "3.5")]
    V3_5,
}

impl SpringBootVersion {
    pub const ALL: [Self; 2] = [Self::V3_4, Self::V3_5];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V3_4 => "3.4",
            Self::V3_5 => "3.5",
        }
    }

    pub const fn release(&self) -> &'static str {
        match self {
            Self::V3_4 => "3.4.5",
            Self::V3_5 => "3.5.3",
        }
    }
}

impl fmt::Display for SpringBootVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpringBootVersion {
    type Err = DomainError;

    /// Accepts a release line (`3.5`) or a full release (`3.5.0`, `3.5.x`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(3, '.');
        let line = (parts.next(), parts.next());
        match line {
            (Some("3"), Some("4")) => Ok(Self::V3_4),
            (Some("3"), Some("5")) => Ok(Self::V3_5),
            _ => Err(unknown(Field::SpringBootVersion, trimmed)),
        }
    }
}

// ── PlatformTarget ───────────────────────────────────────────────────────────

/// Runtime + framework versions for the JVM platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JvmTarget {
    pub spring_boot: SpringBootVersion,
    pub java: JavaVersion,
}

impl JvmTarget {
    pub const fn new(java: JavaVersion, spring_boot: SpringBootVersion) -> Self {
        Self { spring_boot, java }
    }
}

impl fmt::Display for JvmTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Java {} / Spring Boot {}", self.java, self.spring_boot)
    }
}

/// Closed set of deployment platforms. Only [`PlatformTarget::SpringBootJvm`]
/// passes the compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "platform", rename_all = "kebab-case")]
pub enum PlatformTarget {
    SpringBootJvm(JvmTarget),
    Custom { label: String },
}

impl PlatformTarget {
    pub const fn jvm(java: JavaVersion, spring_boot: SpringBootVersion) -> Self {
        Self::SpringBootJvm(JvmTarget::new(java, spring_boot))
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpringBootJvm(jvm) => write!(f, "{jvm}"),
            Self::Custom { label } => write!(f, "custom:{label}"),
        }
    }
}

// ── Architecture ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Standard,
    Hexagonal,
}

impl Layout {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hexagonal => "hexagonal",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "layered" => Ok(Self::Standard),
            "hexagonal" | "hex" | "ports-and-adapters" => Ok(Self::Hexagonal),
            other => Err(unknown(Field::Layout, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnforcementMode {
    #[default]
    None,
    Basic,
    Strict,
}

impl EnforcementMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Strict => "strict",
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for EnforcementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnforcementMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "strict" => Ok(Self::Strict),
            other => Err(unknown(Field::EnforcementMode, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleCodeLevel {
    #[default]
    None,
    Basic,
    Rich,
}

impl SampleCodeLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic => "basic",
            Self::Rich => "rich",
        }
    }
}

impl fmt::Display for SampleCodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleCodeLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "rich" => Ok(Self::Rich),
            other => Err(unknown(Field::SampleCodeLevel, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceSpec {
    pub enforcement_mode: EnforcementMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SampleCodeSpec {
    pub level: SampleCodeLevel,
}

/// Layout style plus the governance and sample-code options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureSpec {
    pub layout: Layout,
    pub governance: GovernanceSpec,
    pub sample_code: SampleCodeSpec,
}

impl ArchitectureSpec {
    pub const fn new(
        layout: Layout,
        enforcement: EnforcementMode,
        sample: SampleCodeLevel,
    ) -> Self {
        Self {
            layout,
            governance: GovernanceSpec {
                enforcement_mode: enforcement,
            },
            sample_code: SampleCodeSpec { level: sample },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_stack_reports_first_missing_part() {
        assert_eq!(
            TechStack::try_from_parts(Some(Framework::SpringBoot), None, None).unwrap_err(),
            DomainError::Missing {
                field: Field::BuildTool
            }
        );
        assert_eq!(
            TechStack::try_from_parts(None, Some(BuildTool::Maven), Some(Language::Java))
                .unwrap_err(),
            DomainError::Missing {
                field: Field::Framework
            }
        );
    }

    #[test]
    fn tech_stack_display() {
        assert_eq!(
            TechStack::spring_boot_maven_java().to_string(),
            "spring-boot/maven/java"
        );
    }

    #[test]
    fn java_version_aliases() {
        assert_eq!("21".parse::<JavaVersion>().unwrap(), JavaVersion::Java21);
        assert_eq!("JDK25".parse::<JavaVersion>().unwrap(), JavaVersion::Java25);
        assert_eq!("java-21".parse::<JavaVersion>().unwrap(), JavaVersion::Java21);
        assert!(matches!(
            "17".parse::<JavaVersion>(),
            Err(DomainError::UnknownValue {
                field: Field::JavaVersion,
                ..
            })
        ));
    }

    #[test]
    fn spring_boot_accepts_line_or_release() {
        assert_eq!("3.4".parse::<SpringBootVersion>().unwrap(), SpringBootVersion::V3_4);
        assert_eq!("3.5.0".parse::<SpringBootVersion>().unwrap(), SpringBootVersion::V3_5);
        assert!("3.45".parse::<SpringBootVersion>().is_err());
        assert!("2.7".parse::<SpringBootVersion>().is_err());
    }

    #[test]
    fn architecture_defaults() {
        let spec = ArchitectureSpec::default();
        assert_eq!(spec.layout, Layout::Standard);
        assert_eq!(spec.governance.enforcement_mode, EnforcementMode::None);
        assert_eq!(spec.sample_code.level, SampleCodeLevel::None);
    }

    #[test]
    fn enum_parsing_is_case_insensitive() {
        assert_eq!("HEXAGONAL".parse::<Layout>().unwrap(), Layout::Hexagonal);
        assert_eq!("Strict".parse::<EnforcementMode>().unwrap(), EnforcementMode::Strict);
        assert_eq!("Basic".parse::<SampleCodeLevel>().unwrap(), SampleCodeLevel::Basic);
        assert_eq!("MVN".parse::<BuildTool>().unwrap(), BuildTool::Maven);
    }

    #[test]
    fn platform_target_display() {
        let target = PlatformTarget::jvm(JavaVersion::Java25, SpringBootVersion::V3_5);
        assert_eq!(target.to_string(), "Java 25 / Spring Boot 3.5");
        let custom = PlatformTarget::Custom {
            label: "graalvm".into(),
        };
        assert_eq!(custom.to_string(), "custom:graalvm");
    }
}
