//! Configuration loading and discovery for `spritefx.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::SpritefxConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "spritefx.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse spritefx.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub effect: Option<String>,
    pub style: Option<String>,
    pub seed: Option<i64>,
    pub intensity: Option<u8>,
    pub scale: Option<u8>,
    pub out: Option<PathBuf>,
    pub jobs: Option<usize>,
}

/// Find spritefx.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for spritefx.toml
/// 2. Check XDG_CONFIG_HOME/spritefx/spritefx.toml (or ~/.config/spritefx/spritefx.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find spritefx.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("spritefx").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find spritefx.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a spritefx.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// built-in defaults.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("assets/spritefx.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<SpritefxConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            debug!("no spritefx.toml found, using defaults");
            Ok(SpritefxConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<SpritefxConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let config: SpritefxConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut SpritefxConfig, overrides: &CliOverrides) {
    if let Some(ref effect) = overrides.effect {
        config.defaults.effect = effect.clone();
    }
    if let Some(ref style) = overrides.style {
        config.defaults.style = style.clone();
    }
    if let Some(seed) = overrides.seed {
        config.defaults.seed = seed;
    }
    if let Some(intensity) = overrides.intensity {
        config.defaults.intensity = intensity;
    }
    if let Some(scale) = overrides.scale {
        config.defaults.scale = scale;
    }
    if let Some(ref out) = overrides.out {
        config.output.dir = out.clone();
    }
    if let Some(jobs) = overrides.jobs {
        config.batch.jobs = jobs;
    }
}
