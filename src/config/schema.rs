//! Configuration schema types for `spritefx.toml`
//!
//! Defines the structure and validation rules for spritefx defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::effects::{effect_ids, resolve};
use crate::restyle::Style;

/// Highest preview upscale factor accepted anywhere.
pub const MAX_SCALE: u8 = 16;

/// Default settings applied when the CLI does not name them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Effect id used by `transform`
    #[serde(default = "default_effect")]
    pub effect: String,
    /// Style id used by `restyle`
    #[serde(default = "default_style")]
    pub style: String,
    /// RNG seed
    #[serde(default = "default_seed")]
    pub seed: i64,
    /// Restyle strength in percent
    #[serde(default = "default_intensity")]
    pub intensity: u8,
    /// Nearest-neighbour upscale applied on save
    #[serde(default = "default_scale")]
    pub scale: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            effect: default_effect(),
            style: default_style(),
            seed: default_seed(),
            intensity: default_intensity(),
            scale: default_scale(),
        }
    }
}

fn default_effect() -> String {
    "spikes".to_string()
}

fn default_style() -> String {
    "edgy".to_string()
}

fn default_seed() -> i64 {
    42
}

fn default_intensity() -> u8 {
    100
}

fn default_scale() -> u8 {
    1
}

/// Where results are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_out")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_out() }
    }
}

fn default_out() -> PathBuf {
    PathBuf::from("out")
}

/// Batch processing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Worker threads, 0 lets rayon decide
    #[serde(default)]
    pub jobs: usize,
}

/// Complete `spritefx.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpritefxConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// A single config validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "defaults.scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spritefx.toml: '{}' {}", self.field, self.message)
    }
}

impl SpritefxConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = resolve(&self.defaults.effect) {
            errors.push(ConfigValidationError {
                field: "defaults.effect".to_string(),
                message: format!("{} (known: {})", e, effect_ids().join(", ")),
            });
        }

        if let Err(e) = self.defaults.style.parse::<Style>() {
            errors.push(ConfigValidationError {
                field: "defaults.style".to_string(),
                message: e.to_string(),
            });
        }

        if self.defaults.intensity > 100 {
            errors.push(ConfigValidationError {
                field: "defaults.intensity".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }

        if self.defaults.scale == 0 || self.defaults.scale > MAX_SCALE {
            errors.push(ConfigValidationError {
                field: "defaults.scale".to_string(),
                message: format!("must be between 1 and {}", MAX_SCALE),
            });
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SpritefxConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.defaults.effect, "spikes");
        assert_eq!(config.defaults.seed, 42);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.batch.jobs, 0);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SpritefxConfig = toml::from_str("[defaults]\neffect = \"frozen\"\n").unwrap();
        assert_eq!(config.defaults.effect, "frozen");
        assert_eq!(config.defaults.style, "edgy");
        assert_eq!(config.defaults.intensity, 100);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = SpritefxConfig::default();
        config.defaults.effect = "spikez".to_string();
        config.defaults.style = "nope".to_string();
        config.defaults.intensity = 150;
        config.defaults.scale = 0;

        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["defaults.effect", "defaults.style", "defaults.intensity", "defaults.scale"]
        );
        assert!(errors[0].message.contains("did you mean 'spikes'"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigValidationError {
            field: "defaults.scale".to_string(),
            message: "must be between 1 and 16".to_string(),
        };
        assert_eq!(err.to_string(), "spritefx.toml: 'defaults.scale' must be between 1 and 16");
    }
}
