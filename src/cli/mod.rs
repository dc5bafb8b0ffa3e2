//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod batch;
mod list;
mod restyle;
mod transform;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, SpritefxConfig, MAX_SCALE};
use crate::logging;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// spritefx - Deterministic growth effects and recolor styles for sprites
#[derive(Parser)]
#[command(name = "spritefx")]
#[command(about = "spritefx - Grow spikes, vines, flames and more out of pixel art sprites")]
#[command(version)]
pub struct Cli {
    /// Config file (default: nearest spritefx.toml, then $XDG_CONFIG_HOME/spritefx)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a growth effect to sprites, writing {stem}_{effect}.png
    Transform {
        /// Input images or directories of PNGs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Effect id (see `spritefx effects`)
        #[arg(short, long)]
        effect: Option<String>,

        /// RNG seed, same seed gives the same output
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Upscale saved images by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SCALE as i64))]
        scale: Option<u8>,

        /// Worker threads (0 = one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// Recolor sprites with a style, writing {stem}_{style}.png
    Restyle {
        /// Input images or directories of PNGs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Style id (see `spritefx styles`)
        #[arg(short = 'S', long)]
        style: Option<String>,

        /// Strength in percent (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        intensity: Option<u8>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Upscale saved images by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SCALE as i64))]
        scale: Option<u8>,

        /// Worker threads (0 = one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// List available effects
    Effects {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available styles
    Styles {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load the config file and apply command-line overrides on top.
fn load_settings(
    cli_config: Option<&std::path::Path>,
    overrides: &CliOverrides,
) -> Result<SpritefxConfig, ExitCode> {
    match load_config(cli_config) {
        Ok(mut config) => {
            merge_cli_overrides(&mut config, overrides);
            Ok(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Transform { inputs, effect, seed, output, scale, jobs } => {
            let overrides =
                CliOverrides { effect, seed, scale, out: output, jobs, ..Default::default() };
            match load_settings(cli.config.as_deref(), &overrides) {
                Ok(config) => transform::run_transform(&inputs, &config),
                Err(code) => code,
            }
        }
        Commands::Restyle { inputs, style, intensity, output, scale, jobs } => {
            let overrides =
                CliOverrides { style, intensity, scale, out: output, jobs, ..Default::default() };
            match load_settings(cli.config.as_deref(), &overrides) {
                Ok(config) => restyle::run_restyle(&inputs, &config),
                Err(code) => code,
            }
        }
        Commands::Effects { json } => list::run_effects(json),
        Commands::Styles { json } => list::run_styles(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transform_with_negative_seed() {
        let cli = Cli::parse_from(["spritefx", "transform", "a.png", "-e", "frozen", "-s", "-5"]);
        match cli.command {
            Commands::Transform { inputs, effect, seed, .. } => {
                assert_eq!(inputs, vec![PathBuf::from("a.png")]);
                assert_eq!(effect.as_deref(), Some("frozen"));
                assert_eq!(seed, Some(-5));
            }
            _ => panic!("expected transform"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["spritefx", "effects", "--json", "-vv", "--config", "x.toml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::Effects { json: true }));
    }

    #[test]
    fn test_intensity_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["spritefx", "restyle", "a.png", "-i", "101"]).is_err());
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["spritefx", "transform", "a.png", "--scale", "17"]).is_err());
    }
}
