// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Mirrors the commitlint configuration object: `extends`,
//! `parserPreset.parserOpts` and `rules`. Keys are camelCase as in
//! commitlint; snake_case aliases are accepted for TOML users.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The main configuration structure for headerlint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LintConfig {
    /// Configurations layered beneath this one.
    ///
    /// Local paths are resolved by the loader; anything else names an
    /// external shareable rule set and is kept for reporting only.
    #[serde(
        deserialize_with = "deserialize_extends",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub extends: Vec<String>,

    /// Parser configuration.
    #[serde(alias = "parser_preset")]
    pub parser_preset: ParserPreset,

    /// Rule configuration.
    pub rules: RulesConfig,

    /// Skip merge, revert and autosquash headers (default `true`).
    #[serde(alias = "default_ignores", skip_serializing_if = "Option::is_none")]
    pub default_ignores: Option<bool>,

    /// Extra header regexes that bypass every rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// File this configuration was loaded from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Whether the built-in ignore patterns apply.
    pub fn use_default_ignores(&self) -> bool {
        self.default_ignores.unwrap_or(true)
    }

    /// The configured header pattern override, if any.
    pub fn header_pattern(&self) -> Option<&str> {
        self.parser_preset.parser_opts.header_pattern.as_deref()
    }
}

/// `parserPreset` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserPreset {
    /// Options handed to the header parser.
    #[serde(alias = "parser_opts")]
    pub parser_opts: ParserOpts,
}

/// `parserPreset.parserOpts` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOpts {
    /// Regex overriding the default header pattern.
    #[serde(alias = "header_pattern", skip_serializing_if = "Option::is_none")]
    pub header_pattern: Option<String>,

    /// Field name for each capture group, in group order.
    #[serde(
        alias = "header_correspondence",
        skip_serializing_if = "Option::is_none"
    )]
    pub header_correspondence: Option<Vec<String>>,
}

/// `rules` section.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// The `type-enum` rule.
    #[serde(
        rename = "type-enum",
        alias = "type_enum",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_enum: Option<TypeEnumRule>,

    /// Rules headerlint does not evaluate (e.g. inherited from a commitlint
    /// config). Kept so they can be reported instead of silently dropped.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub unsupported: BTreeMap<String, serde_json::Value>,
}

/// Rule severity, written as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// The rule is not evaluated.
    Disabled,
    /// Violations are reported but do not fail the run.
    Warning,
    /// Violations fail the run.
    Error,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("invalid severity {} (expected 0, 1 or 2)", other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Disabled => write!(f, "disabled"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Whether the rule's values must (`always`) or must not (`never`) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl std::fmt::Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Applicability::Always => write!(f, "always"),
            Applicability::Never => write!(f, "never"),
        }
    }
}

type TypeEnumTuple = (Severity, Applicability, Vec<String>);

/// `type-enum`: `[severity, "always" | "never", [types...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TypeEnumTuple", into = "TypeEnumTuple")]
pub struct TypeEnumRule {
    pub severity: Severity,
    pub applicability: Applicability,
    pub types: Vec<String>,
}

impl TypeEnumRule {
    /// An `always` rule failing hard on violation.
    pub fn error_always<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            severity: Severity::Error,
            applicability: Applicability::Always,
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<TypeEnumTuple> for TypeEnumRule {
    fn from((severity, applicability, types): TypeEnumTuple) -> Self {
        Self {
            severity,
            applicability,
            types,
        }
    }
}

impl From<TypeEnumRule> for TypeEnumTuple {
    fn from(rule: TypeEnumRule) -> Self {
        (rule.severity, rule.applicability, rule.types)
    }
}

/// `extends` accepts a single name or a list of names.
fn deserialize_extends<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = LintConfig::default();
        assert!(config.extends.is_empty());
        assert!(config.header_pattern().is_none());
        assert!(config.rules.type_enum.is_none());
        assert!(config.use_default_ignores());
    }

    #[test]
    fn test_ignores_from_json() {
        let json = r#"{ "defaultIgnores": false, "ignores": ["^WIP"] }"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert!(!config.use_default_ignores());
        assert_eq!(config.ignores, vec!["^WIP"]);
    }

    #[test]
    fn test_severity_from_u8() {
        assert_eq!(Severity::try_from(0u8), Ok(Severity::Disabled));
        assert_eq!(Severity::try_from(2u8), Ok(Severity::Error));
        assert!(Severity::try_from(3u8).is_err());
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_type_enum_from_json() {
        let json = r#"{
            "extends": "@commitlint/config-conventional",
            "parserPreset": { "parserOpts": { "headerPattern": "^(\\w*): (.*)$" } },
            "rules": { "type-enum": [1, "never", ["wip"]] }
        }"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.extends, vec!["@commitlint/config-conventional"]);
        assert_eq!(config.header_pattern(), Some(r"^(\w*): (.*)$"));

        let rule = config.rules.type_enum.unwrap();
        assert_eq!(rule.severity, Severity::Warning);
        assert_eq!(rule.applicability, Applicability::Never);
        assert_eq!(rule.types, vec!["wip"]);
    }

    #[test]
    fn test_unsupported_rules_are_kept() {
        let json = r#"{ "rules": { "header-max-length": [2, "always", 100] } }"#;
        let config: LintConfig = serde_json::from_str(json).unwrap();
        assert!(config.rules.type_enum.is_none());
        assert!(config.rules.unsupported.contains_key("header-max-length"));
    }

    #[test]
    fn test_config_serialization() {
        let config = LintConfig {
            rules: RulesConfig {
                type_enum: Some(TypeEnumRule::error_always(["chore", "proc-macro"])),
                ..Default::default()
            },
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("type-enum"));

        let back: LintConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.rules.type_enum, config.rules.type_enum);
    }
}
