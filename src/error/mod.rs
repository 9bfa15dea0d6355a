// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for headerlint.
//!
//! Validation findings (malformed header, unknown type) are not errors: they
//! are reported through [`crate::rules::LintReport`]. The types here cover the
//! operational failures around them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for headerlint operations.
#[derive(Error, Debug)]
pub enum HlError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for HlError {
    fn from(err: dialoguer::Error) -> Self {
        HlError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration merge error: {message}")]
    MergeError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Validation outcome of a lint run that should fail the process.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{errors} error(s), {warnings} warning(s) found")]
    Failed { errors: usize, warnings: usize },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read commit message: {message}")]
    ReadFailed { message: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Failed to render hook '{hook}': {message}")]
    RenderFailed { hook: String, message: String },
}

/// Result type alias for headerlint operations.
pub type Result<T> = std::result::Result<T, HlError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| HlError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/headerlint.toml"),
        };
        assert!(err.to_string().contains("/path/to/headerlint.toml"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Failed {
            errors: 2,
            warnings: 1,
        };
        assert_eq!(err.to_string(), "2 error(s), 1 warning(s) found");
    }

    #[test]
    fn test_hl_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            key: "rules.type-enum".to_string(),
            message: "duplicate type 'chore'".to_string(),
        };
        let err: HlError = config_err.into();
        assert!(err.to_string().contains("rules.type-enum"));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("read message").unwrap_err();
        assert_eq!(err.to_string(), "read message: missing");
    }
}
