// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Headers git writes itself, which are never linted.

use crate::error::{ConfigError, HlError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Merge, revert and autosquash headers produced by git and forges.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"^((Merge pull request)|(Merge (.*?) into (.*?))|(Merge branch (.*?)))\s*$",
        r"^Merge tag (.*?)\s*$",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)! ",
        r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("default ignore pattern compiles"))
    .collect();
}

/// Header patterns that bypass every rule.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    use_defaults: bool,
    custom: Vec<Regex>,
}

impl IgnoreSet {
    /// Build from the `defaultIgnores` switch and the `ignores` patterns.
    pub fn new(use_defaults: bool, patterns: &[String]) -> Result<Self> {
        let custom = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    HlError::Config(ConfigError::InvalidValue {
                        key: "ignores".to_string(),
                        message: format!("invalid regex '{}': {}", pattern, e),
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            use_defaults,
            custom,
        })
    }

    /// Whether `header` is exempt from linting.
    pub fn is_ignored(&self, header: &str) -> bool {
        let defaults = if self.use_defaults {
            DEFAULT_IGNORES.as_slice()
        } else {
            &[]
        };
        defaults
            .iter()
            .chain(&self.custom)
            .any(|regex| regex.is_match(header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_generated_headers_ignored() {
        let ignores = IgnoreSet::new(true, &[]).unwrap();
        for header in [
            "Merge branch 'feature'",
            "Merge branch 'main' into feature",
            "Merge pull request #12 from user/branch",
            "Merge remote-tracking branch 'origin/main'",
            "Merge tag 'v1.0.0'",
            "Revert \"chore: tidy\"",
            "fixup! chore: tidy",
            "squash! datalog: add rules",
            "amend! chore: tidy",
            "Automatic merge from CI",
            "Auto-merged feature into main",
        ] {
            assert!(ignores.is_ignored(header), "header {:?}", header);
        }
    }

    #[test]
    fn test_regular_headers_not_ignored() {
        let ignores = IgnoreSet::new(true, &[]).unwrap();
        assert!(!ignores.is_ignored("chore: update deps"));
        assert!(!ignores.is_ignored("merge: combine modules"));
        assert!(!ignores.is_ignored("fixup: typo"));
    }

    #[test]
    fn test_defaults_can_be_disabled() {
        let ignores = IgnoreSet::new(false, &[]).unwrap();
        assert!(!ignores.is_ignored("Merge branch 'feature'"));
    }

    #[test]
    fn test_custom_patterns() {
        let ignores = IgnoreSet::new(false, &[r"^WIP\b".to_string()]).unwrap();
        assert!(ignores.is_ignored("WIP half done"));
        assert!(!ignores.is_ignored("chore: done"));

        assert!(IgnoreSet::new(true, &["(unclosed".to_string()]).is_err());
    }
}
