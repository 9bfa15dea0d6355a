// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use crate::error::{HlError, HookError, Result};
use handlebars::Handlebars;
use serde_json::json;

/// Marker line identifying scripts written by headerlint.
pub const HOOK_MARKER: &str = "# headerlint Git Hook";

const COMMIT_MSG_TEMPLATE: &str = r#"#!/bin/sh
{{marker}}
# Generated by headerlint v{{version}}. Remove with `headerlint hooks uninstall`.

exec {{binary}} check --non-interactive --edit "$1"
"#;

/// Hooks headerlint knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    CommitMsg,
}

impl HookTemplate {
    /// File name under `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    fn source(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => COMMIT_MSG_TEMPLATE,
        }
    }

    /// Render the hook script, invoking `binary`.
    pub fn generate(&self, binary: &str) -> Result<String> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        let data = json!({
            "marker": HOOK_MARKER,
            "version": crate::version::VERSION,
            "binary": shell_quote(binary),
        });

        registry
            .render_template(self.source(), &data)
            .map_err(|e| {
                HlError::Hook(HookError::RenderFailed {
                    hook: self.filename().to_string(),
                    message: e.to_string(),
                })
            })
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}

/// Single-quote a path for `/bin/sh` unless it is plainly safe.
fn shell_quote(value: &str) -> String {
    let safe = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "/._-+".contains(c));
    if safe && !value.is_empty() {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
