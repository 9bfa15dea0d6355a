// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{CommitMessage, HeaderPattern};
use crate::config::LintConfig;
use crate::error::{CommitError, HlError, Result};
use crate::git;

use super::builtin::{TypeEnum, MESSAGE_EMPTY};
use super::ignore::IgnoreSet;
use super::report::{LintReport, ValidationIssue};

/// Validates commit messages against one configuration.
///
/// The header pattern and type list are compiled once here and never
/// change afterwards.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    pattern: HeaderPattern,
    type_enum: Option<TypeEnum>,
    ignores: IgnoreSet,
}

impl RuleEngine {
    /// Create a rule engine from a resolved configuration.
    pub fn new(config: &LintConfig) -> Result<Self> {
        let opts = &config.parser_preset.parser_opts;
        let pattern = match (&opts.header_pattern, &opts.header_correspondence) {
            (Some(pattern), Some(fields)) => {
                HeaderPattern::with_correspondence(pattern, fields.as_slice())?
            }
            (Some(pattern), None) => HeaderPattern::new(pattern)?,
            (None, _) => HeaderPattern::default(),
        };

        let type_enum = config
            .rules
            .type_enum
            .as_ref()
            .map(TypeEnum::from_rule)
            .transpose()?;

        for name in config.rules.unsupported.keys() {
            tracing::warn!("Rule '{}' is not supported and will be ignored", name);
        }
        if type_enum.is_none() {
            tracing::debug!("No type-enum rule configured, headers are not checked");
        }

        let ignores = IgnoreSet::new(config.use_default_ignores(), &config.ignores)?;

        tracing::debug!("Header pattern: {}", pattern.as_str());

        Ok(Self {
            pattern,
            type_enum,
            ignores,
        })
    }

    pub fn pattern(&self) -> &HeaderPattern {
        &self.pattern
    }

    pub fn type_enum(&self) -> Option<&TypeEnum> {
        self.type_enum.as_ref()
    }

    /// Lint a raw commit message.
    pub fn validate_message(&self, message: &str) -> Result<LintReport> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.validate_header(&parsed.header))
    }

    /// Lint a single header line.
    pub fn validate_header(&self, header: &str) -> LintReport {
        if self.ignores.is_ignored(header) {
            tracing::debug!("Ignoring header: {}", header);
            return LintReport::ignored(header.to_string());
        }

        let mut report = LintReport::new(header.to_string());

        if let Some(issue) = self
            .type_enum
            .as_ref()
            .and_then(|rule| rule.check(header, &self.pattern))
        {
            tracing::debug!("{}: {}", issue.code, issue.message);
            report.push(issue);
        }

        report
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintReport> {
        let repo = git::open_repo()?;
        let (sha, message) = repo.commit_message(reference)?;
        self.lint_commit(sha, &message)
    }

    /// Check every commit in `from..to`.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintReport>> {
        let repo = git::open_repo()?;
        let commits = repo.commits_in_range(range)?;
        let mut reports = Vec::with_capacity(commits.len());

        for (sha, message) in commits {
            reports.push(self.lint_commit(sha, &message)?);
        }

        Ok(reports)
    }

    /// Lint a message read from history. An empty message is reported
    /// against the commit instead of aborting the run.
    fn lint_commit(&self, sha: String, message: &str) -> Result<LintReport> {
        let mut report = match self.validate_message(message) {
            Ok(report) => report,
            Err(HlError::Commit(CommitError::EmptyMessage)) => {
                tracing::warn!("Commit {} has an empty message", sha);
                let mut report = LintReport::new(String::new());
                report.push(ValidationIssue {
                    code: MESSAGE_EMPTY.to_string(),
                    message: "commit message is empty".to_string(),
                    suggestion: Some("Reword the commit with a header".to_string()),
                    is_error: true,
                });
                report
            }
            Err(e) => return Err(e),
        };
        report.commit_sha = Some(sha);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, parse_config, ConfigFormat};
    use crate::rules::{HEADER_MALFORMED, MESSAGE_EMPTY, TYPE_ENUM};

    fn workspace_engine() -> RuleEngine {
        let config = parse_config(
            crate::config::default::workspace_config(),
            ConfigFormat::Toml,
        )
        .unwrap();
        RuleEngine::new(&config).unwrap()
    }

    #[test]
    fn test_default_engine() {
        let engine = RuleEngine::new(&default_config()).unwrap();
        assert!(engine.validate_header("feat(core): add new feature").is_valid());
        assert!(!engine.validate_header("wip: stuff").is_valid());
    }

    #[test]
    fn test_workspace_engine() {
        let engine = workspace_engine();
        assert!(engine.validate_header("chore: update deps").is_valid());
        assert!(engine
            .validate_header("proc-macro(parser): add support")
            .is_valid());
        assert!(engine.validate_header("chore!: breaking change").is_valid());

        let report = engine.validate_header("feat: add x");
        assert_eq!(report.errors[0].code, TYPE_ENUM);

        let report = engine.validate_header("random text no colon");
        assert_eq!(report.errors[0].code, HEADER_MALFORMED);
    }

    #[test]
    fn test_validate_message_uses_first_line() {
        let engine = workspace_engine();
        let report = engine
            .validate_message("# comment\ndatalog: add rules\n\nfeat: not a header\n")
            .unwrap();
        assert!(report.is_valid());
        assert_eq!(report.header, "datalog: add rules");
    }

    #[test]
    fn test_empty_message_is_error() {
        assert!(workspace_engine().validate_message("\n\n").is_err());
    }

    #[test]
    fn test_no_rule_checks_nothing() {
        let engine = RuleEngine::new(&LintConfig::default()).unwrap();
        assert!(engine.type_enum().is_none());
        assert!(engine.validate_header("anything goes").is_valid());
    }

    #[test]
    fn test_git_generated_headers_pass() {
        let engine = workspace_engine();
        for header in [
            "Merge branch 'feature'",
            "fixup! chore: tidy",
            "Revert \"chore: tidy\"",
        ] {
            let report = engine.validate_header(header);
            assert!(report.is_valid(), "header {:?}", header);
            assert!(report.ignored);
        }
        assert!(!engine.validate_header("chore: tidy").ignored);
    }

    #[test]
    fn test_default_ignores_disabled() {
        let mut config = parse_config(
            crate::config::default::workspace_config(),
            ConfigFormat::Toml,
        )
        .unwrap();
        config.default_ignores = Some(false);
        config.ignores = vec![r"^WIP\b".to_string()];
        let engine = RuleEngine::new(&config).unwrap();

        let report = engine.validate_header("Merge branch 'feature'");
        assert_eq!(report.errors[0].code, HEADER_MALFORMED);
        assert!(engine.validate_header("WIP half done").ignored);
    }

    #[test]
    fn test_empty_commit_reported_not_fatal() {
        let engine = workspace_engine();
        let report = engine.lint_commit("a".repeat(40), "").unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].code, MESSAGE_EMPTY);
        assert_eq!(report.commit_sha.as_deref(), Some("a".repeat(40).as_str()));

        let report = engine.lint_commit("b".repeat(40), "datalog: rules\n").unwrap();
        assert!(report.is_valid());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = parse_config(
            r#"
[parserPreset.parserOpts]
headerPattern = '^(unclosed'
"#,
            ConfigFormat::Toml,
        )
        .unwrap();
        assert!(RuleEngine::new(&config).is_err());
    }
}
