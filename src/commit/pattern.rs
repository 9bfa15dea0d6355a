// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Header pattern and parsed header.

use crate::config::default::{DEFAULT_HEADER_CORRESPONDENCE, DEFAULT_HEADER_PATTERN};
use crate::error::{ConfigError, HlError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DEFAULT_REGEX: Regex =
        Regex::new(DEFAULT_HEADER_PATTERN).expect("default header pattern compiles");
}

/// A parsed commit header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Type token, trimmed and without the breaking marker.
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject text after the separator.
    pub subject: String,
    /// Whether a `!` marker preceded the separator.
    pub is_breaking: bool,
}

/// Compiled header regex plus the capture groups holding each field.
///
/// A pattern with named groups is read by the names `type`, `scope` and
/// `subject`; otherwise groups are mapped positionally.
#[derive(Debug, Clone)]
pub struct HeaderPattern {
    regex: Regex,
    type_group: usize,
    scope_group: Option<usize>,
    subject_group: Option<usize>,
}

impl Default for HeaderPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
            type_group: 1,
            scope_group: Some(2),
            subject_group: Some(3),
        }
    }
}

impl HeaderPattern {
    /// Compile a pattern with the default `type, scope, subject` correspondence.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_correspondence(pattern, DEFAULT_HEADER_CORRESPONDENCE)
    }

    /// Compile a pattern whose group N (1-based) holds `correspondence[N - 1]`.
    pub fn with_correspondence<S: AsRef<str>>(pattern: &str, correspondence: &[S]) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| invalid(format!("invalid regex: {}", e)))?;
        let groups = regex.captures_len() - 1;

        let named = regex.capture_names().any(|name| name.is_some());
        if !named && correspondence.len() > groups {
            return Err(invalid(format!(
                "headerCorrespondence names {} fields but the pattern has {} groups",
                correspondence.len(),
                groups
            )));
        }

        let locate = |field: &str| -> Option<usize> {
            if named {
                regex.capture_names().position(|name| name == Some(field))
            } else {
                correspondence
                    .iter()
                    .position(|f| f.as_ref() == field)
                    .map(|i| i + 1)
            }
        };

        let type_group = locate("type")
            .ok_or_else(|| invalid("pattern has no group for the type token".to_string()))?;
        let scope_group = locate("scope");
        let subject_group = locate("subject");

        Ok(Self {
            regex,
            type_group,
            scope_group,
            subject_group,
        })
    }

    /// The underlying regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parse a header, or `None` when it does not match.
    pub fn parse(&self, header: &str) -> Option<Header> {
        let captures = self.regex.captures(header)?;

        let raw_type = captures
            .get(self.type_group)
            .map(|m| m.as_str())
            .unwrap_or("");
        let capture = |group: Option<usize>| group.and_then(|g| captures.get(g));

        let scope = capture(self.scope_group).map(|m| m.as_str().to_string());
        let subject = capture(self.subject_group);

        // The marker may sit inside a permissive type group or between the
        // scope and the separator.
        let is_breaking = raw_type.trim_end().ends_with('!')
            || subject
                .map(|m| {
                    header[..m.start()]
                        .trim_end()
                        .trim_end_matches(':')
                        .ends_with('!')
                })
                .unwrap_or(false);

        Some(Header {
            commit_type: type_token(raw_type).to_string(),
            scope,
            subject: subject.map(|m| m.as_str().to_string()).unwrap_or_default(),
            is_breaking,
        })
    }
}

/// Trim a captured type and drop a trailing breaking marker.
pub fn type_token(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix('!').unwrap_or(trimmed).trim_end()
}

fn invalid(message: String) -> HlError {
    HlError::Config(ConfigError::InvalidValue {
        key: "parserPreset.parserOpts.headerPattern".to_string(),
        message,
    })
}
