//! Config loading, layering, validation, and editing.

use super::model::Config;
use super::types::SyncStrategy;
use crate::error::{Result, WkitError};
use toml::{Table, Value};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the repository-local config.
pub const LOCAL_CONFIG_FILE: &str = ".wkit.toml";

/// Locations of the config layers.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User-wide config; `None` when no home or XDG directory is known.
    pub global: Option<PathBuf>,
    /// Repository-local config.
    pub local: PathBuf,
}

impl ConfigPaths {
    /// Standard locations: the user config directory and `.wkit.toml` in `cwd`.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            global: global_config_path_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir()),
            local: cwd.join(LOCAL_CONFIG_FILE),
        }
    }
}

/// `$XDG_CONFIG_HOME/wkit/config.toml`, falling back to `~/.config/wkit/config.toml`.
pub fn global_config_path_from(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = match xdg_config_home {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home?.join(".config"),
    };
    Some(base.join("wkit").join("config.toml"))
}

impl Config {
    /// Load the effective config: defaults, then global, then local.
    ///
    /// Missing files are skipped. Keys present in a later layer replace those
    /// of earlier layers; nested tables (such as `copy_files`) merge key by key.
    pub fn load(paths: &ConfigPaths) -> Result<Self> {
        let mut merged = Value::Table(Table::new());

        for path in paths.global.iter().chain(std::iter::once(&paths.local)) {
            if let Some(layer) = read_layer(path)? {
                debug!(path = %path.display(), "applying config layer");
                merge_values(&mut merged, layer);
            }
        }

        let config: Config = merged
            .try_into::<Config>()
            .map_err(|e| WkitError::ConfigError(format!("invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a single config file, using defaults when it does not exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        let layer = read_layer(path)?.unwrap_or_else(|| Value::Table(Table::new()));
        let config: Config = layer.try_into::<Config>().map_err(|e| {
            WkitError::ConfigError(format!("invalid config file '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| WkitError::ConfigError(format!("failed to parse config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| WkitError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.main_branch.trim().is_empty() {
            return Err(WkitError::ConfigError(
                "main_branch must not be empty".to_string(),
            ));
        }
        if self.remote.trim().is_empty() {
            return Err(WkitError::ConfigError("remote must not be empty".to_string()));
        }
        Ok(())
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                WkitError::ConfigError(format!(
                    "failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        std::fs::write(path, self.to_toml()?).map_err(|e| {
            WkitError::ConfigError(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Create a local config file with default values.
    ///
    /// Refuses to overwrite an existing file.
    pub fn init_local(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(WkitError::ConfigError(format!(
                "config file '{}' already exists",
                path.display()
            )));
        }
        Config::default().save(path)
    }

    /// Set a single key from its string form, as used by `wkit config set`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_worktree_path" => self.default_worktree_path = value.to_string(),
            "auto_cleanup" => self.auto_cleanup = parse_bool(key, value)?,
            "default_sync_strategy" => {
                self.default_sync_strategy = SyncStrategy::from_str(value).ok_or_else(|| {
                    WkitError::ConfigError(format!(
                        "invalid sync strategy: {}. Valid values: merge, rebase",
                        value
                    ))
                })?;
            }
            "main_branch" => self.main_branch = value.to_string(),
            "remote" => self.remote = value.to_string(),
            "copy_files.enabled" => self.copy_files.enabled = parse_bool(key, value)?,
            "copy_files.files" => {
                self.copy_files.files = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => {
                return Err(WkitError::ConfigError(format!(
                    "unknown configuration key: {}",
                    key
                )));
            }
        }
        self.validate()
    }

    /// Where a new worktree for `branch` goes.
    ///
    /// An explicitly provided path wins. Otherwise the branch is placed under
    /// `default_worktree_path`, which is taken relative to `repo_root` unless absolute.
    pub fn resolve_worktree_path(
        &self,
        branch: &str,
        provided: Option<&Path>,
        repo_root: &Path,
    ) -> PathBuf {
        if let Some(path) = provided {
            return path.to_path_buf();
        }

        let base = Path::new(&self.default_worktree_path);
        if base.is_absolute() {
            base.join(branch)
        } else {
            repo_root.join(base).join(branch)
        }
    }
}

/// Parse a boolean config value (`true/t/1` or `false/f/0`, any case).
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(WkitError::ConfigError(format!(
            "invalid boolean value for {}: {}",
            key, value
        ))),
    }
}

/// Read one config layer; `None` when the file is missing or empty.
fn read_layer(path: &Path) -> Result<Option<Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(WkitError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            )));
        }
    };

    let table: Table = toml::from_str(&content).map_err(|e| {
        WkitError::ConfigError(format!(
            "failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    if table.is_empty() {
        return Ok(None);
    }
    Ok(Some(Value::Table(table)))
}

/// Merge `overlay` into `base`, recursing into tables present on both sides.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
