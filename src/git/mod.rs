// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from history and locates the hooks directory.

mod repo;

pub use repo::{open_repo, Repository};
