// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for headerlint.
//!
//! This module handles discovering, parsing and layering configuration
//! files (TOML or JSON) into one [`LintConfig`].

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{
    find_config_file, find_config_file_from, load_config, merge_configs, parse_config,
    ConfigFormat,
};
pub use schema::*;
