// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HlError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
    binary: String,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_hooks_dir(repo.hooks_dir()?)
    }

    /// Create a hook manager writing into `hooks_dir`.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                HlError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self {
            hooks_dir,
            binary: "headerlint".to_string(),
        })
    }

    /// Use `binary` as the command the hook runs.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    fn template(hook_name: &str) -> Result<HookTemplate> {
        hook_name.parse::<HookTemplate>().map_err(|_| {
            HlError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            })
        })
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        self.install_template(Self::template(hook_name)?, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(*template, force)?;
        }
        Ok(())
    }

    fn install_template(&self, template: HookTemplate, force: bool) -> Result<()> {
        let name = template.filename();
        let hook_path = self.hooks_dir.join(name);
        let backup_path = self.hooks_dir.join(format!("{}.backup", name));
        let install_err = |message: String| {
            HlError::Hook(HookError::InstallFailed {
                hook: name.to_string(),
                message,
            })
        };

        if hook_path.exists() && !self.is_own_hook(&hook_path)? {
            if !force {
                return Err(HlError::Hook(HookError::AlreadyExists {
                    hook: name.to_string(),
                }));
            }
            if backup_path.exists() {
                return Err(install_err(format!(
                    "{} already exists; restore or remove it first",
                    backup_path.display()
                )));
            }
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_err(format!("Failed to backup existing hook: {}", e)))?;
            tracing::info!("Backed up existing {} hook to {:?}", name, backup_path);
        }

        let script = template.generate(&self.binary)?;
        fs::write(&hook_path, script)
            .map_err(|e| install_err(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)
            .map_err(|e| install_err(format!("Failed to set permissions: {}", e)))?;

        tracing::debug!("Installed {} hook at {:?}", name, hook_path);
        Ok(())
    }

    /// Uninstall a specific hook, restoring any backup.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = Self::template(hook_name)?;
        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_own_hook(&hook_path)? {
            return Err(HlError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by headerlint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            HlError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                HlError::Hook(HookError::RemoveFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Installation status of every known hook.
    pub fn status(&self) -> Vec<(String, bool)> {
        HookTemplate::all()
            .iter()
            .map(|template| {
                let hook_path = self.hooks_dir.join(template.filename());
                let installed =
                    hook_path.exists() && self.is_own_hook(&hook_path).unwrap_or(false);
                (template.filename().to_string(), installed)
            })
            .collect()
    }

    /// Check if a hook was installed by headerlint.
    fn is_own_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        Ok(content.contains(HOOK_MARKER))
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_hooks_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_status() {
        let (dir, manager) = manager();
        assert_eq!(manager.status(), vec![("commit-msg".to_string(), false)]);

        manager.install_hook("commit-msg", false).unwrap();
        assert_eq!(manager.status(), vec![("commit-msg".to_string(), true)]);

        let script = fs::read_to_string(dir.path().join("hooks/commit-msg")).unwrap();
        assert!(script.contains("check --non-interactive --edit"));

        // Reinstalling our own hook needs no force.
        manager.install_all(false).unwrap();
    }

    #[test]
    fn test_foreign_hook_requires_force() {
        let (dir, manager) = manager();
        let hook = dir.path().join("hooks/commit-msg");
        fs::write(&hook, "#!/bin/sh\necho custom\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", false),
            Err(HlError::Hook(HookError::AlreadyExists { .. }))
        ));

        manager.install_hook("commit-msg", true).unwrap();
        assert!(dir.path().join("hooks/commit-msg.backup").exists());

        manager.uninstall_hook("commit-msg").unwrap();
        let restored = fs::read_to_string(&hook).unwrap();
        assert!(restored.contains("echo custom"));
        assert!(!dir.path().join("hooks/commit-msg.backup").exists());
    }

    #[test]
    fn test_force_keeps_existing_backup() {
        let (dir, manager) = manager();
        let hook = dir.path().join("hooks/commit-msg");
        let backup = dir.path().join("hooks/commit-msg.backup");
        fs::write(&backup, "#!/bin/sh\necho first\n").unwrap();
        fs::write(&hook, "#!/bin/sh\necho second\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", true),
            Err(HlError::Hook(HookError::InstallFailed { .. }))
        ));
        assert!(fs::read_to_string(&backup).unwrap().contains("echo first"));
        assert!(fs::read_to_string(&hook).unwrap().contains("echo second"));
    }

    #[test]
    fn test_uninstall_refuses_foreign_hook() {
        let (dir, manager) = manager();
        fs::write(dir.path().join("hooks/commit-msg"), "#!/bin/sh\n").unwrap();
        assert!(manager.uninstall_all().is_err());
    }

    #[test]
    fn test_unknown_hook() {
        let (_dir, manager) = manager();
        assert!(matches!(
            manager.install_hook("pre-push", false),
            Err(HlError::Hook(HookError::NotFound { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, manager) = manager();
        manager.install_all(false).unwrap();
        let mode = fs::metadata(dir.path().join("hooks/commit-msg"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
