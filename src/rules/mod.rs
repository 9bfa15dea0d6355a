// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! [`validate`] is the pure header classifier; [`RuleEngine`] wraps it with
//! the configured severity and applicability and produces [`LintReport`]s.

mod allowed;
mod builtin;
mod engine;
mod ignore;
mod report;
mod validator;

pub use allowed::AllowedTypes;
pub use builtin::{TypeEnum, HEADER_MALFORMED, MESSAGE_EMPTY, TYPE_ENUM};
pub use engine::RuleEngine;
pub use ignore::IgnoreSet;
pub use report::{print_reports, LintReport, ValidationIssue};
pub use validator::{validate, InvalidReason, ValidationResult};
