// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values and `init` templates.

use super::schema::{LintConfig, RulesConfig, TypeEnumRule};

/// Header pattern used when the configuration does not override it.
pub const DEFAULT_HEADER_PATTERN: &str = r"^(\w*)(?:\((.*)\))?!?: (.*)$";

/// Header pattern accepting any type token without parentheses or colons,
/// e.g. project names such as `proc-macro` or `nextjs-blog`.
pub const WORKSPACE_HEADER_PATTERN: &str = r"^([^\(\):]*)(?:\((.*)\))?!?: (.*)$";

/// Default capture group to field mapping.
pub const DEFAULT_HEADER_CORRESPONDENCE: &[&str] = &["type", "scope", "subject"];

/// Type tokens of the conventional commits convention.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Configuration applied when no configuration file is found.
pub fn default_config() -> LintConfig {
    LintConfig {
        rules: RulesConfig {
            type_enum: Some(TypeEnumRule::error_always(CONVENTIONAL_TYPES.iter().copied())),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Minimal configuration: only `chore` commits.
pub fn minimal_config() -> &'static str {
    r#"# headerlint configuration (minimal)

[rules]
type-enum = [2, "always", ["chore"]]
"#
}

/// Conventional commit types with the default header pattern.
pub fn conventional_config() -> &'static str {
    r#"# headerlint configuration (conventional)

extends = ["@commitlint/config-conventional"]

[rules]
type-enum = [
  2,
  "always",
  ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"],
]
"#
}

/// Monorepo layout where each project name is a commit type.
pub fn workspace_config() -> &'static str {
    r#"# headerlint configuration (workspace)
#
# Each project in the repository is its own commit type, so the header
# pattern accepts hyphenated tokens such as `proc-macro(parser): ...`.

extends = ["@commitlint/config-conventional"]

[parserPreset.parserOpts]
headerPattern = '^([^\(\):]*)(?:\((.*)\))?!?: (.*)$'

[rules]
type-enum = [
  2,
  "always",
  [
    "chore",

    "datalog",
    "nextjs-blog",
    "proc-macro",
    "type-challenges",
  ],
]
"#
}
