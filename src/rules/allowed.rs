// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ordered set of permitted type tokens.

use crate::error::{ConfigError, HlError, Result};

/// Permitted type tokens in insertion order.
///
/// Order only matters for display; lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedTypes {
    types: Vec<String>,
}

impl AllowedTypes {
    /// Build the set, rejecting empty and duplicate tokens.
    pub fn new<I, S>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();

        for token in types {
            let token = token.into();
            if token.trim().is_empty() {
                return Err(invalid("empty type token".to_string()));
            }
            if collected.contains(&token) {
                return Err(invalid(format!("duplicate type '{}'", token)));
            }
            collected.push(token);
        }

        Ok(Self { types: collected })
    }

    /// Whether `token` is permitted.
    pub fn contains(&self, token: &str) -> bool {
        self.types.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl std::fmt::Display for AllowedTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.types.join(", "))
    }
}

fn invalid(message: String) -> HlError {
    HlError::Config(ConfigError::InvalidValue {
        key: "rules.type-enum".to_string(),
        message,
    })
}
