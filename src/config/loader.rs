// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery, loading and `extends` layering.

use crate::error::{ConfigError, HlError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "headerlint.toml",
    ".headerlint.toml",
    ".headerlintrc.json",
    ".config/headerlint.toml",
];

/// On-disk configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("headerlint").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config())
        }
    }
}

/// Load configuration from a specific path, resolving local `extends`.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(HlError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let mut chain = Vec::new();
    let mut config = load_layered(path, &mut chain)?;
    config.source = Some(path.to_path_buf());

    for name in &config.extends {
        tracing::debug!("External rule set '{}' is not evaluated", name);
    }

    Ok(config)
}

/// Load `path` and everything it extends. `chain` holds the files currently
/// being resolved, so a file reached twice on one path is a cycle while the
/// same file reached through two siblings is not.
fn load_layered(path: &Path, chain: &mut Vec<PathBuf>) -> Result<LintConfig> {
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if chain.contains(&key) {
        return Err(HlError::Config(ConfigError::MergeError {
            message: format!("extends cycle through {}", path.display()),
        }));
    }
    chain.push(key);

    let own = read_config_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut base = LintConfig::default();
    let mut external = Vec::new();
    for entry in &own.extends {
        if is_local_reference(entry) {
            let parent_path = base_dir.join(entry);
            if !parent_path.exists() {
                return Err(HlError::Config(ConfigError::NotFound { path: parent_path }));
            }
            let parent = load_layered(&parent_path, chain)?;
            base = merge_configs(base, parent);
        } else {
            external.push(entry.clone());
        }
    }

    let own = LintConfig {
        extends: external,
        ..own
    };

    chain.pop();
    Ok(merge_configs(base, own))
}

fn read_config_file(path: &Path) -> Result<LintConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        HlError::Config(ConfigError::ParseError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    parse_config(&content, ConfigFormat::from_path(path))
}

/// Whether an `extends` entry names a file rather than an external package.
fn is_local_reference(entry: &str) -> bool {
    entry.starts_with("./")
        || entry.starts_with("../")
        || entry.starts_with('/')
        || entry.ends_with(".toml")
        || entry.ends_with(".json")
}

/// Parse configuration from a string in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<LintConfig> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| {
            HlError::Config(ConfigError::ParseError {
                message: format!("Failed to parse TOML: {}", e),
            })
        }),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            HlError::Config(ConfigError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })
        }),
    }
}

/// Merge two configurations, with the overlay taking precedence.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut extends = base.extends;
    for name in overlay.extends {
        if !extends.contains(&name) {
            extends.push(name);
        }
    }

    let mut parser_opts = overlay.parser_preset.parser_opts;
    let base_opts = base.parser_preset.parser_opts;
    parser_opts.header_pattern = parser_opts.header_pattern.or(base_opts.header_pattern);
    parser_opts.header_correspondence = parser_opts
        .header_correspondence
        .or(base_opts.header_correspondence);

    let mut ignores = base.ignores;
    for pattern in overlay.ignores {
        if !ignores.contains(&pattern) {
            ignores.push(pattern);
        }
    }

    let mut unsupported = base.rules.unsupported;
    unsupported.extend(overlay.rules.unsupported);

    LintConfig {
        extends,
        parser_preset: super::schema::ParserPreset { parser_opts },
        rules: super::schema::RulesConfig {
            type_enum: overlay.rules.type_enum.or(base.rules.type_enum),
            unsupported,
        },
        default_ignores: overlay.default_ignores.or(base.default_ignores),
        ignores,
        source: overlay.source.or(base.source),
    }
}
