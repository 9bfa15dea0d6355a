// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! headerlint - commit header linter
//!
//! Checks the first line of a commit message against a header pattern and a
//! list of allowed type tokens, the way a commitlint `type-enum` rule with a
//! custom `headerPattern` does.
//!
//! # Features
//!
//! - **Header Classifier**: pure [`rules::validate`] over a pattern and a type set
//! - **Configuration**: TOML/JSON files with local `extends` layering
//! - **Rule Engine**: `type-enum` severity and `always`/`never` handling
//! - **Git Integration**: lint single commits or revision ranges
//! - **Git Hooks**: install a `commit-msg` hook without shell glue
//!
//! # Example
//!
//! ```
//! use headerlint::commit::HeaderPattern;
//! use headerlint::rules::{validate, AllowedTypes, InvalidReason, ValidationResult};
//!
//! let pattern = HeaderPattern::new(r"^([^\(\):]*)(?:\((.*)\))?!?: (.*)$").unwrap();
//! let allowed = AllowedTypes::new(["chore", "proc-macro"]).unwrap();
//!
//! assert_eq!(
//!     validate("proc-macro(parser): add support", &allowed, &pattern),
//!     ValidationResult::Valid
//! );
//! assert_eq!(
//!     validate("feat: add x", &allowed, &pattern),
//!     ValidationResult::Invalid(InvalidReason::UnknownType)
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{HlError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of headerlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
