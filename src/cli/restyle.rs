//! Restyle command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::SpritefxConfig;
use crate::restyle::{restyle, style_ids, Style};
use crate::suggest::{format_suggestion, suggest, MAX_SUGGESTION_DISTANCE};

use super::batch::{run_batch, BatchOptions};
use super::EXIT_INVALID_ARGS;

/// Recolor every input sprite with the configured style.
pub fn run_restyle(inputs: &[PathBuf], config: &SpritefxConfig) -> ExitCode {
    let name = config.defaults.style.as_str();
    let style = match name.parse::<Style>() {
        Ok(style) => style,
        Err(_) => {
            eprintln!("Error: Unknown style '{}'", name);
            let ids = style_ids();
            if let Some(hint) = format_suggestion(&suggest(name, &ids, MAX_SUGGESTION_DISTANCE)) {
                eprintln!("{}", hint);
            }
            eprintln!();
            eprintln!("Available styles:");
            for id in ids {
                eprintln!("  {}", id);
            }
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let intensity = config.defaults.intensity;
    let options = BatchOptions {
        tag: style.id(),
        out_dir: &config.output.dir,
        scale: config.defaults.scale,
        jobs: config.batch.jobs,
    };
    run_batch(inputs, &options, |sprite| Ok(restyle(sprite, style, intensity)))
}
