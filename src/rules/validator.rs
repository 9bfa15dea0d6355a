// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header classification against a pattern and an allowed type set.

use crate::commit::HeaderPattern;

use super::allowed::AllowedTypes;

/// Why a header was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The header does not match the configured pattern.
    MalformedHeader,
    /// The type token is not in the allowed set.
    UnknownType,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::MalformedHeader => write!(f, "malformed header"),
            InvalidReason::UnknownType => write!(f, "unknown type"),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Classify a commit header.
///
/// The header must match `pattern`, and its type token (trimmed, breaking
/// marker removed) must be in `allowed_types`.
pub fn validate(
    header: &str,
    allowed_types: &AllowedTypes,
    pattern: &HeaderPattern,
) -> ValidationResult {
    let Some(parsed) = pattern.parse(header) else {
        return ValidationResult::Invalid(InvalidReason::MalformedHeader);
    };

    if allowed_types.contains(&parsed.commit_type) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(InvalidReason::UnknownType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default::WORKSPACE_HEADER_PATTERN;

    fn workspace() -> HeaderPattern {
        HeaderPattern::new(WORKSPACE_HEADER_PATTERN).unwrap()
    }

    fn allowed(types: &[&str]) -> AllowedTypes {
        AllowedTypes::new(types.iter().copied()).unwrap()
    }

    #[test]
    fn test_allowed_type_is_valid() {
        let result = validate("chore: update deps", &allowed(&["chore"]), &workspace());
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn test_scoped_hyphenated_type() {
        let types = allowed(&["chore", "proc-macro"]);
        let pattern = workspace();
        let header = "proc-macro(parser): add support";

        assert_eq!(validate(header, &types, &pattern), ValidationResult::Valid);
        assert_eq!(pattern.parse(header).unwrap().commit_type, "proc-macro");
    }

    #[test]
    fn test_unknown_type() {
        let result = validate("feat: add x", &allowed(&["chore"]), &workspace());
        assert_eq!(
            result,
            ValidationResult::Invalid(InvalidReason::UnknownType)
        );
    }

    #[test]
    fn test_malformed_header() {
        let types = allowed(&["chore"]);
        for header in ["random text no colon", "chore update deps", "chore:no space", ""] {
            assert_eq!(
                validate(header, &types, &workspace()),
                ValidationResult::Invalid(InvalidReason::MalformedHeader),
                "header {:?}",
                header
            );
        }
    }

    #[test]
    fn test_breaking_marker_ignored() {
        let types = allowed(&["chore"]);
        assert!(validate("chore!: breaking change", &types, &workspace()).is_valid());
        assert!(validate("chore(api)!: breaking change", &types, &workspace()).is_valid());
        assert!(validate("chore!: breaking change", &types, &HeaderPattern::default()).is_valid());
    }

    #[test]
    fn test_type_is_trimmed_and_case_sensitive() {
        let types = allowed(&["chore"]);
        assert!(validate(" chore : tidy", &types, &workspace()).is_valid());
        assert_eq!(
            validate("Chore: tidy", &types, &workspace()),
            ValidationResult::Invalid(InvalidReason::UnknownType)
        );
    }

    #[test]
    fn test_default_pattern_rejects_project_types() {
        let types = allowed(&["chore", "proc-macro"]);
        assert_eq!(
            validate("proc-macro: add", &types, &HeaderPattern::default()),
            ValidationResult::Invalid(InvalidReason::MalformedHeader)
        );
    }

    #[test]
    fn test_repeated_calls_agree() {
        let types = allowed(&["chore"]);
        let pattern = workspace();
        let first = validate("feat: add x", &types, &pattern);
        for _ in 0..10 {
            assert_eq!(validate("feat: add x", &types, &pattern), first);
        }
    }
}
