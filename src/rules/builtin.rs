// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The `type-enum` rule.

use crate::commit::HeaderPattern;
use crate::config::{Applicability, Severity, TypeEnumRule};
use crate::error::Result;

use super::allowed::AllowedTypes;
use super::report::ValidationIssue;
use super::validator::{validate, InvalidReason, ValidationResult};

/// Issue code for headers the pattern cannot parse.
pub const HEADER_MALFORMED: &str = "header-malformed";

/// Issue code for type tokens violating `type-enum`.
pub const TYPE_ENUM: &str = "type-enum";

/// Issue code for commits in history whose message is empty.
pub const MESSAGE_EMPTY: &str = "message-empty";

/// `type-enum` with its type list checked and frozen.
#[derive(Debug, Clone)]
pub struct TypeEnum {
    pub severity: Severity,
    pub applicability: Applicability,
    pub types: AllowedTypes,
}

impl TypeEnum {
    pub fn from_rule(rule: &TypeEnumRule) -> Result<Self> {
        Ok(Self {
            severity: rule.severity,
            applicability: rule.applicability,
            types: AllowedTypes::new(rule.types.iter().cloned())?,
        })
    }

    /// Check a header, or `None` when it passes or the rule is disabled.
    pub fn check(&self, header: &str, pattern: &HeaderPattern) -> Option<ValidationIssue> {
        if self.severity == Severity::Disabled {
            return None;
        }

        match self.applicability {
            Applicability::Always => match validate(header, &self.types, pattern) {
                ValidationResult::Valid => None,
                ValidationResult::Invalid(InvalidReason::MalformedHeader) => {
                    Some(self.malformed(pattern))
                }
                ValidationResult::Invalid(InvalidReason::UnknownType) => {
                    let commit_type = pattern
                        .parse(header)
                        .map(|h| h.commit_type)
                        .unwrap_or_default();
                    Some(self.issue(
                        TYPE_ENUM,
                        format!("type '{}' is not allowed", commit_type),
                        format!("Use one of: {}", self.types),
                    ))
                }
            },
            Applicability::Never => {
                let Some(parsed) = pattern.parse(header) else {
                    return Some(self.malformed(pattern));
                };
                if self.types.contains(&parsed.commit_type) {
                    Some(self.issue(
                        TYPE_ENUM,
                        format!("type '{}' is forbidden", parsed.commit_type),
                        format!("Do not use: {}", self.types),
                    ))
                } else {
                    None
                }
            }
        }
    }

    fn malformed(&self, pattern: &HeaderPattern) -> ValidationIssue {
        self.issue(
            HEADER_MALFORMED,
            "header does not match the configured pattern".to_string(),
            format!("Expected 'type(scope): subject' matching {}", pattern.as_str()),
        )
    }

    fn issue(&self, code: &str, message: String, suggestion: String) -> ValidationIssue {
        ValidationIssue {
            code: code.to_string(),
            message,
            suggestion: Some(suggestion),
            is_error: self.severity == Severity::Error,
        }
    }
}
