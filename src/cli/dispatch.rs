// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{default, LintConfig};
use crate::error::{CommitError, ConfigError, HlError, Result, ResultExt, ValidationError};
use crate::rules::{print_reports, RuleEngine};
use console::style;
use std::io::Read;
use std::path::Path;

use super::args::{
    CheckArgs, Cli, Commands, ConfigPreset, HooksAction, HooksArgs, InitArgs, OutputFormat,
};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &load_config(&cli)?, args),
        Commands::Types => run_types(&cli, &load_config(&cli)?),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Init(args) => run_init(&cli, args),
        Commands::Version => run_version(),
    }
}

fn load_config(cli: &Cli) -> Result<LintConfig> {
    match &cli.config {
        Some(path) => LintConfig::load_from(path),
        None => LintConfig::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config)?;

    let reports = if let Some(ref path) = args.edit {
        vec![engine.validate_message(&read_message_file(path)?)?]
    } else if let Some(ref message) = args.message {
        vec![engine.validate_message(message)?]
    } else if args.stdin {
        let mut message = String::new();
        std::io::stdin()
            .read_to_string(&mut message)
            .map_err(|e| {
                HlError::Commit(CommitError::ReadFailed {
                    message: format!("stdin: {}", e),
                })
            })?;
        vec![engine.validate_message(&message)?]
    } else if args.range || args.target.contains("..") {
        engine.check_range(&args.target)?
    } else {
        vec![engine.check_commit(&args.target)?]
    };

    print_reports(&reports, cli.format);

    let errors: usize = reports.iter().map(|r| r.errors.len()).sum();
    let warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();

    if cli.format != Some(OutputFormat::Json) {
        match reports.as_slice() {
            [report] => println!("{}", style(report.summary()).dim()),
            _ => {
                let invalid = reports.iter().filter(|r| !r.is_valid()).count();
                println!("\n{} commits checked, {} invalid", reports.len(), invalid);
            }
        }
    }

    if errors > 0 || (args.strict && warnings > 0) {
        Err(HlError::Validation(ValidationError::Failed { errors, warnings }))
    } else {
        Ok(())
    }
}

fn read_message_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        HlError::Commit(CommitError::ReadFailed {
            message: format!("{}: {}", path.display(), e),
        })
    })
}

/// Run the types command.
fn run_types(cli: &Cli, config: &LintConfig) -> Result<()> {
    let engine = RuleEngine::new(config)?;

    if cli.format == Some(OutputFormat::Json) {
        let json = serde_json::json!({
            "source": config.source,
            "extends": config.extends,
            "headerPattern": engine.pattern().as_str(),
            "typeEnum": engine.type_enum().map(|rule| serde_json::json!({
                "severity": u8::from(rule.severity),
                "applicability": rule.applicability.to_string(),
                "types": rule.types.iter().collect::<Vec<_>>(),
            })),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    match config.source {
        Some(ref path) => println!("{} {}", style("config:").dim(), path.display()),
        None => println!("{} built-in defaults", style("config:").dim()),
    }
    for name in &config.extends {
        println!("{} {} (not evaluated)", style("extends:").dim(), name);
    }
    println!("{} {}", style("pattern:").dim(), engine.pattern().as_str());

    match engine.type_enum() {
        Some(rule) => {
            println!(
                "{} {}, {}",
                style("type-enum:").dim(),
                rule.severity,
                rule.applicability
            );
            for token in rule.types.iter() {
                println!("  {}", style(token).cyan());
            }
        }
        None => println!("{} not configured", style("type-enum:").dim()),
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let mut manager = HookManager::new()?;
    if let Ok(exe) = std::env::current_exe() {
        manager = manager.with_binary(exe.display().to_string());
    }

    match args.action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status() {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("headerlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(cli: &Cli, args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("headerlint.toml");

    if config_path.exists() && !args.force {
        if cli.non_interactive {
            return Err(HlError::Config(ConfigError::AlreadyExists {
                path: config_path.to_path_buf(),
            }));
        }

        let overwrite = dialoguer::Confirm::new()
            .with_prompt("headerlint.toml already exists. Overwrite?")
            .default(false)
            .interact()?;
        if !overwrite {
            return Err(HlError::Cancelled);
        }
    }

    let config_content = match args.preset.unwrap_or(ConfigPreset::Conventional) {
        ConfigPreset::Minimal => default::minimal_config(),
        ConfigPreset::Conventional => default::conventional_config(),
        ConfigPreset::Workspace => default::workspace_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write headerlint.toml")?;

    println!("✓ Created headerlint.toml");

    Ok(())
}
