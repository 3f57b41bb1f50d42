//! Implementation of the `wkit config` commands.
//!
//! `show` prints the effective configuration, `set` edits the global file,
//! and `init` writes a local `.wkit.toml` with default values.

use crate::cli::{ConfigAction, ConfigCommand, ConfigSetArgs};
use crate::config::{Config, ConfigPaths};
use crate::error::{Result, WkitError};
use std::path::PathBuf;

/// Execute a `wkit config` subcommand.
pub fn cmd_config(paths: &ConfigPaths, cmd: ConfigCommand) -> Result<()> {
    match cmd.action {
        ConfigAction::Show => {
            let config = Config::load(paths)?;
            println!("Current configuration:");
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Set(args) => {
            let path = set_global(paths, &args)?;
            println!(
                "✓ Configuration updated: {} = {} ({})",
                args.key,
                args.value,
                path.display()
            );
        }
        ConfigAction::Init => {
            Config::init_local(&paths.local)?;
            println!(
                "✓ Created local configuration file: {}",
                paths.local.display()
            );
        }
    }
    Ok(())
}

/// Apply `key = value` to the global config file, returning its path.
///
/// Only the global file is read and written, so values from a local
/// `.wkit.toml` are never copied into it.
pub fn set_global(paths: &ConfigPaths, args: &ConfigSetArgs) -> Result<PathBuf> {
    let path = paths.global.clone().ok_or_else(|| {
        WkitError::ConfigError(
            "cannot locate the global config directory (set XDG_CONFIG_HOME or HOME)".to_string(),
        )
    })?;

    let mut config = Config::load_file(&path)?;
    config.set_value(&args.key, &args.value)?;
    config.save(&path)?;
    Ok(path)
}
