//! Platform compatibility registry.
//!
//! Each Spring Boot release line is described exactly once by a
//! [`CompatibilityDef`] listing the Java runtimes it supports. Both
//! [`ensure_compatible`] and [`all_supported_targets`] derive from
//! [`COMPATIBILITY_MATRIX`], so the two cannot drift apart.
//!
//! # Adding a Release Line
//!
//! 1. Add the variant to `SpringBootVersion` (and `JavaVersion` if needed)
//! 2. Add one [`CompatibilityDef`] entry to [`COMPATIBILITY_MATRIX`]
//! 3. That's it — enumeration and checks pick it up

use crate::domain::error::{DomainError, Field};
use crate::domain::value_objects::{
    JavaVersion, JvmTarget, PlatformTarget, SpringBootVersion, TechStack,
};

/// The only tech stack with a generation profile.
pub const SUPPORTED_STACK: TechStack = TechStack::spring_boot_maven_java();

/// Java runtimes supported by one Spring Boot release line.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityDef {
    pub spring_boot: SpringBootVersion,

    /// Ascending; the `assert_registry_integrity` test enforces it.
    pub java_versions: &'static [JavaVersion],
}

/// Single source of truth for `(runtime, framework)` compatibility.
pub static COMPATIBILITY_MATRIX: &[CompatibilityDef] = &[
    CompatibilityDef {
        spring_boot: SpringBootVersion::V3_4,
        java_versions: &[JavaVersion::Java21],
    },
    CompatibilityDef {
        spring_boot: SpringBootVersion::V3_5,
        java_versions: &[JavaVersion::Java21, JavaVersion::Java25],
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────

pub fn find_spring_boot(version: SpringBootVersion) -> Option<&'static CompatibilityDef> {
    COMPATIBILITY_MATRIX
        .iter()
        .find(|def| def.spring_boot == version)
}

pub fn is_compatible(java: JavaVersion, spring_boot: SpringBootVersion) -> bool {
    find_spring_boot(spring_boot)
        .map(|def| def.java_versions.contains(&java))
        .unwrap_or(false)
}

/// Decide whether a stack can be generated for a platform target.
///
/// Checks run in order: presence of both arguments, the stack against
/// [`SUPPORTED_STACK`], the platform variant, then the version matrix.
pub fn ensure_compatible(
    stack: Option<&TechStack>,
    target: Option<&PlatformTarget>,
) -> Result<JvmTarget, DomainError> {
    let stack = stack.ok_or(DomainError::Missing {
        field: Field::TechStack,
    })?;
    let target = target.ok_or(DomainError::Missing {
        field: Field::PlatformTarget,
    })?;

    if *stack != SUPPORTED_STACK {
        return Err(DomainError::UnsupportedStack {
            stack: stack.to_string(),
        });
    }

    let jvm = match target {
        PlatformTarget::SpringBootJvm(jvm) => *jvm,
        other => {
            return Err(DomainError::UnsupportedPlatform {
                target: other.to_string(),
            });
        }
    };

    if !is_compatible(jvm.java, jvm.spring_boot) {
        return Err(DomainError::Incompatible {
            runtime: jvm.java.to_string(),
            framework: jvm.spring_boot.to_string(),
        });
    }

    Ok(jvm)
}

/// Every supported pair, ordered by Spring Boot line then Java version.
pub fn all_supported_targets() -> Vec<PlatformTarget> {
    let mut pairs: Vec<JvmTarget> = COMPATIBILITY_MATRIX
        .iter()
        .flat_map(|def| {
            def.java_versions
                .iter()
                .map(move |java| JvmTarget::new(*java, def.spring_boot))
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    pairs.into_iter().map(PlatformTarget::SpringBootJvm).collect()
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the matrix is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for version in SpringBootVersion::ALL {
        let count = COMPATIBILITY_MATRIX
            .iter()
            .filter(|def| def.spring_boot == version)
            .count();
        assert_eq!(count, 1, "Spring Boot {version} must appear exactly once");
    }

    for def in COMPATIBILITY_MATRIX {
        assert!(
            !def.java_versions.is_empty(),
            "Spring Boot {} supports no Java runtime",
            def.spring_boot
        );
        assert!(
            def.java_versions.windows(2).all(|w| w[0] < w[1]),
            "Spring Boot {}: java_versions must be strictly ascending",
            def.spring_boot
        );
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BuildTool, Framework, Language};

    fn check(java: JavaVersion, boot: SpringBootVersion) -> Result<JvmTarget, DomainError> {
        ensure_compatible(
            Some(&SUPPORTED_STACK),
            Some(&PlatformTarget::jvm(java, boot)),
        )
    }

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn java_25_requires_boot_3_5() {
        assert_eq!(
            check(JavaVersion::Java25, SpringBootVersion::V3_4).unwrap_err(),
            DomainError::Incompatible {
                runtime: "25".into(),
                framework: "3.4".into()
            }
        );
        assert!(check(JavaVersion::Java21, SpringBootVersion::V3_4).is_ok());
        assert!(check(JavaVersion::Java21, SpringBootVersion::V3_5).is_ok());
        assert!(check(JavaVersion::Java25, SpringBootVersion::V3_5).is_ok());
    }

    #[test]
    fn all_supported_targets_is_exactly_the_three_pairs() {
        assert_eq!(
            all_supported_targets(),
            vec![
                PlatformTarget::jvm(JavaVersion::Java21, SpringBootVersion::V3_4),
                PlatformTarget::jvm(JavaVersion::Java21, SpringBootVersion::V3_5),
                PlatformTarget::jvm(JavaVersion::Java25, SpringBootVersion::V3_5),
            ]
        );
    }

    #[test]
    fn every_enumerated_target_passes_ensure_compatible() {
        for target in all_supported_targets() {
            assert!(
                ensure_compatible(Some(&SUPPORTED_STACK), Some(&target)).is_ok(),
                "{target} enumerated but rejected"
            );
        }
    }

    #[test]
    fn every_rejected_pair_is_absent_from_enumeration() {
        let supported = all_supported_targets();
        for java in JavaVersion::ALL {
            for boot in SpringBootVersion::ALL {
                let target = PlatformTarget::jvm(java, boot);
                assert_eq!(check(java, boot).is_ok(), supported.contains(&target));
            }
        }
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            ensure_compatible(None, None).unwrap_err(),
            DomainError::Missing {
                field: Field::TechStack
            }
        );
        assert_eq!(
            ensure_compatible(Some(&SUPPORTED_STACK), None).unwrap_err(),
            DomainError::Missing {
                field: Field::PlatformTarget
            }
        );
    }

    #[test]
    fn gradle_or_kotlin_is_unsupported() {
        let gradle = TechStack::new(Framework::SpringBoot, BuildTool::Gradle, Language::Java);
        let kotlin = TechStack::new(Framework::SpringBoot, BuildTool::Maven, Language::Kotlin);
        let target = PlatformTarget::jvm(JavaVersion::Java21, SpringBootVersion::V3_5);
        for stack in [gradle, kotlin] {
            assert!(matches!(
                ensure_compatible(Some(&stack), Some(&target)),
                Err(DomainError::UnsupportedStack { .. })
            ));
        }
    }

    #[test]
    fn custom_platform_is_rejected() {
        let target = PlatformTarget::Custom {
            label: "graalvm-native".into(),
        };
        assert!(matches!(
            ensure_compatible(Some(&SUPPORTED_STACK), Some(&target)),
            Err(DomainError::UnsupportedPlatform { .. })
        ));
    }
}
