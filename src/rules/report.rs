// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint report types and their terminal/JSON rendering.

use crate::cli::args::OutputFormat;
use console::{style, Style};

/// A single rule violation.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            self.message,
            code_style.apply_to(format!("[{}]", self.code))
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "suggestion": self.suggestion,
        })
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The header that was checked.
    pub header: String,
    /// Commit SHA if linting an existing commit.
    pub commit_sha: Option<String>,
    /// Error-severity issues.
    pub errors: Vec<ValidationIssue>,
    /// Warning-severity issues.
    pub warnings: Vec<ValidationIssue>,
    /// The header matched an ignore pattern and was not linted.
    pub ignored: bool,
}

impl LintReport {
    pub fn new(header: String) -> Self {
        Self {
            header,
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            ignored: false,
        }
    }

    /// A report for a header that bypasses linting.
    pub fn ignored(header: String) -> Self {
        Self {
            ignored: true,
            ..Self::new(header)
        }
    }

    /// File an issue under errors or warnings.
    pub fn push(&mut self, issue: ValidationIssue) {
        if issue.is_error {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the lint passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Print the report as styled text.
    pub fn print_text(&self) {
        let status = if self.ignored {
            style("-").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let line = match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                format!("{} {} {}", status, style(short_sha).cyan(), self.header)
            }
            None => format!("{} {}", status, self.header),
        };
        if self.ignored {
            println!("{} {}", line, style("(ignored)").dim());
        } else {
            println!("{}", line);
        }

        for issue in self.errors.iter().chain(&self.warnings) {
            println!("  {}", issue.format());
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "header": self.header,
            "ignored": self.ignored,
            "errors": self.errors.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

/// Print reports to stdout; JSON output is a single array.
pub fn print_reports(reports: &[LintReport], format: Option<OutputFormat>) {
    match format {
        Some(OutputFormat::Json) => {
            let json =
                serde_json::Value::Array(reports.iter().map(LintReport::to_json).collect());
            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        _ => reports.iter().for_each(LintReport::print_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(code: &str, is_error: bool) -> ValidationIssue {
        ValidationIssue {
            code: code.to_string(),
            message: format!("{} message", code),
            suggestion: None,
            is_error,
        }
    }

    #[test]
    fn test_report_valid() {
        let report = LintReport::new("chore: tidy".to_string());
        assert!(report.is_valid());
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_report_ignored() {
        let report = LintReport::ignored("Merge branch 'feature'".to_string());
        assert!(report.is_valid());
        assert_eq!(report.summary(), "Ignored");
        assert_eq!(report.to_json()["ignored"], true);
    }

    #[test]
    fn test_push_sorts_by_severity() {
        let mut report = LintReport::new("feat: x".to_string());
        report.push(issue("type-enum", false));
        assert!(report.is_valid());
        assert!(report.summary().contains("1 warnings"));

        report.push(issue("header-malformed", true));
        assert!(!report.is_valid());
        assert_eq!(report.summary(), "Invalid (1 errors, 1 warnings)");
    }

    #[test]
    fn test_issue_format() {
        let mut issue = issue("type-enum", true);
        issue.suggestion = Some("Use one of: chore".to_string());
        let formatted = issue.format();
        assert!(formatted.contains("type-enum"));
        assert!(formatted.contains("Use one of: chore"));
    }

    #[test]
    fn test_json_shape() {
        let mut report = LintReport::new("feat: x".to_string());
        report.commit_sha = Some("abc1234def".to_string());
        report.push(issue("type-enum", true));

        let json = report.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["commit"], "abc1234def");
        assert_eq!(json["errors"][0]["code"], "type-enum");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
