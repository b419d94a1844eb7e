//! Shared validation rule vocabulary.
//!
//! Every identifier field is checked by a [`RuleChain`]: an ordered, static
//! list of [`Rule`]s executed until the first failure. Chains are declared
//! once per field in this module so the rule order is visible in one place.

use crate::domain::error::{DomainError, Field};

/// Namespaces owned by the Java platform; no generated package may live there.
pub static RESERVED_PACKAGE_PREFIXES: &[&str] =
    &["java", "javax", "jakarta", "jdk", "sun", "com.sun"];

/// A single validation rule.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    NotBlank,
    LengthBetween { min: usize, max: usize },
    AllowedChars(fn(char) -> bool),
    StartsWithLetter,
    NoEdgeChars(&'static [char]),
    DotSegments,
    ReservedPrefixes(&'static [&'static str]),
    NoControlChars,
}

impl Rule {
    fn check(&self, field: Field, value: &str) -> Result<(), DomainError> {
        match *self {
            Self::NotBlank => {
                if value.trim().is_empty() {
                    return Err(DomainError::Blank { field });
                }
            }
            Self::LengthBetween { min, max } => {
                let actual = value.chars().count();
                if actual < min || actual > max {
                    return Err(DomainError::Length {
                        field,
                        min,
                        max,
                        actual,
                    });
                }
            }
            Self::AllowedChars(allowed) => {
                if let Some(character) = value.chars().find(|c| !allowed(*c)) {
                    return Err(DomainError::InvalidCharacter { field, character });
                }
            }
            Self::StartsWithLetter => {
                if !value.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
                    return Err(DomainError::MustStartWithLetter { field });
                }
            }
            Self::NoEdgeChars(edges) => {
                let first = value.chars().next();
                let last = value.chars().next_back();
                for character in [first, last].into_iter().flatten() {
                    if edges.contains(&character) {
                        return Err(DomainError::EdgeCharacter { field, character });
                    }
                }
            }
            Self::DotSegments => {
                if let Some(segment) = value.split('.').find(|s| !is_identifier_segment(s)) {
                    return Err(DomainError::InvalidSegment {
                        field,
                        segment: segment.to_owned(),
                    });
                }
            }
            Self::ReservedPrefixes(prefixes) => {
                let reserved = prefixes.iter().copied().find(|prefix| {
                    value
                        .strip_prefix(*prefix)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
                });
                if let Some(prefix) = reserved {
                    return Err(DomainError::ReservedPrefix {
                        field,
                        value: value.to_owned(),
                        prefix,
                    });
                }
            }
            Self::NoControlChars => {
                if value.chars().any(char::is_control) {
                    return Err(DomainError::ControlCharacter { field });
                }
            }
        }
        Ok(())
    }
}

/// An ordered, fail-fast list of rules bound to one field.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain {
    field: Field,
    rules: &'static [Rule],
}

impl RuleChain {
    pub const fn new(field: Field, rules: &'static [Rule]) -> Self {
        Self { field, rules }
    }

    pub const fn field(&self) -> Field {
        self.field
    }

    /// Run every rule in order; the first violation is returned.
    pub fn validate(&self, value: &str) -> Result<(), DomainError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.check(self.field, value))
    }
}

// ── Character classes ────────────────────────────────────────────────────────

fn is_lower_alnum_or_dot(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.'
}

fn is_lower_alnum_or_dash(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | ',' | '\'' | '(' | ')' | '&')
}

fn is_dependency_artifact_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-')
}

fn is_version_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn is_identifier_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

// ── Rule lists ───────────────────────────────────────────────────────────────

static GROUP_ID_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 3, max: 100 },
    Rule::AllowedChars(is_lower_alnum_or_dot),
    Rule::DotSegments,
];

static ARTIFACT_ID_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 3, max: 50 },
    Rule::AllowedChars(is_lower_alnum_or_dash),
    Rule::StartsWithLetter,
    Rule::NoEdgeChars(&['-']),
];

static NAME_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 3, max: 60 },
    Rule::AllowedChars(is_name_char),
];

static DESCRIPTION_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::NoControlChars,
    Rule::LengthBetween { min: 10, max: 280 },
];

static PACKAGE_NAME_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 3, max: 255 },
    Rule::AllowedChars(is_lower_alnum_or_dot),
    Rule::DotSegments,
    Rule::ReservedPrefixes(RESERVED_PACKAGE_PREFIXES),
];

static DEPENDENCY_ARTIFACT_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 1, max: 100 },
    Rule::AllowedChars(is_dependency_artifact_char),
    Rule::StartsWithLetter,
];

static VERSION_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::LengthBetween { min: 1, max: 64 },
    Rule::AllowedChars(is_version_char),
    Rule::NoEdgeChars(&['.', '-']),
];

pub const GROUP_ID: RuleChain = RuleChain::new(Field::GroupId, GROUP_ID_RULES);
pub const ARTIFACT_ID: RuleChain = RuleChain::new(Field::ArtifactId, ARTIFACT_ID_RULES);
pub const NAME: RuleChain = RuleChain::new(Field::Name, NAME_RULES);
pub const DESCRIPTION: RuleChain = RuleChain::new(Field::Description, DESCRIPTION_RULES);
pub const PACKAGE_NAME: RuleChain = RuleChain::new(Field::PackageName, PACKAGE_NAME_RULES);
pub const DEPENDENCY_GROUP_ID: RuleChain =
    RuleChain::new(Field::DependencyGroupId, GROUP_ID_RULES);
pub const DEPENDENCY_ARTIFACT_ID: RuleChain =
    RuleChain::new(Field::DependencyArtifactId, DEPENDENCY_ARTIFACT_RULES);
pub const DEPENDENCY_VERSION: RuleChain = RuleChain::new(Field::DependencyVersion, VERSION_RULES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_stops_at_first_violation() {
        // Too short *and* starts with a digit: only the length rule reports.
        let err = ARTIFACT_ID.validate("1a").unwrap_err();
        assert!(matches!(err, DomainError::Length { actual: 2, .. }));
    }

    #[test]
    fn blank_is_reported_before_length() {
        assert_eq!(
            ARTIFACT_ID.validate("").unwrap_err(),
            DomainError::Blank {
                field: Field::ArtifactId
            }
        );
    }

    #[test]
    fn dot_segments_reject_empty_and_digit_leading_segments() {
        assert!(matches!(
            GROUP_ID.validate("com..example"),
            Err(DomainError::InvalidSegment { segment, .. }) if segment.is_empty()
        ));
        assert!(matches!(
            GROUP_ID.validate("com.1example"),
            Err(DomainError::InvalidSegment { segment, .. }) if segment == "1example"
        ));
    }

    #[test]
    fn reserved_prefix_matches_whole_segments_only() {
        assert!(matches!(
            PACKAGE_NAME.validate("java.util.extra"),
            Err(DomainError::ReservedPrefix { prefix: "java", .. })
        ));
        assert!(matches!(
            PACKAGE_NAME.validate("com.sun.tools"),
            Err(DomainError::ReservedPrefix { prefix: "com.sun", .. })
        ));
        assert!(PACKAGE_NAME.validate("javaland.app").is_ok());
        assert!(PACKAGE_NAME.validate("com.sunny.app").is_ok());
    }

    #[test]
    fn version_rejects_edge_separators() {
        assert!(DEPENDENCY_VERSION.validate("1.2.3-RC1").is_ok());
        assert!(matches!(
            DEPENDENCY_VERSION.validate("1.2."),
            Err(DomainError::EdgeCharacter { character: '.', .. })
        ));
        assert!(matches!(
            DEPENDENCY_VERSION.validate("-1"),
            Err(DomainError::EdgeCharacter { character: '-', .. })
        ));
    }

    #[test]
    fn description_rejects_control_characters() {
        assert_eq!(
            DESCRIPTION.validate("a bell \u{7} in the text").unwrap_err(),
            DomainError::ControlCharacter {
                field: Field::Description
            }
        );
    }

    #[test]
    fn name_allows_documented_punctuation() {
        assert!(NAME.validate("Orders & Billing (v2), Acme's.").is_ok());
        assert!(matches!(
            NAME.validate("Orders/Billing"),
            Err(DomainError::InvalidCharacter { character: '/', .. })
        ));
    }

    #[test]
    fn dependency_group_chain_reports_its_own_field() {
        let err = DEPENDENCY_GROUP_ID.validate("Org").unwrap_err();
        assert_eq!(err.code(), "dependency.group_id.charset");
    }
}
