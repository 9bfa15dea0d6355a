// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message splitting.

use crate::error::{CommitError, HlError, Result};

/// A commit message split into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First meaningful line.
    pub header: String,
    /// Everything after the header, if non-empty.
    pub body: Option<String>,
}

impl CommitMessage {
    /// Parse a raw commit message as git would store it.
    ///
    /// Comment lines (`#...`) are dropped, as in a `COMMIT_EDITMSG` file, and
    /// leading blank lines are skipped.
    pub fn parse(message: &str) -> Result<Self> {
        let mut lines = message
            .lines()
            .filter(|line| !line.starts_with('#'))
            .skip_while(|line| line.trim().is_empty());

        let header = match lines.next() {
            Some(line) => line.trim_end().to_string(),
            None => return Err(HlError::Commit(CommitError::EmptyMessage)),
        };

        let body = lines.collect::<Vec<_>>().join("\n");
        let body = body.trim();
        let body = if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        };

        Ok(Self { header, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("chore: update deps\n").unwrap();
        assert_eq!(msg.header, "chore: update deps");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_with_body() {
        let msg = CommitMessage::parse("fix: fix bug\n\nThis is the body\n").unwrap();
        assert_eq!(msg.header, "fix: fix bug");
        assert_eq!(msg.body.as_deref(), Some("This is the body"));
    }

    #[test]
    fn test_parse_strips_comments() {
        let raw = "\n# Please enter the commit message\nchore: tidy\n\n# On branch main\n";
        let msg = CommitMessage::parse(raw).unwrap();
        assert_eq!(msg.header, "chore: tidy");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CommitMessage::parse("   \n\n# only a comment\n"),
            Err(HlError::Commit(CommitError::EmptyMessage))
        ));
    }
}
