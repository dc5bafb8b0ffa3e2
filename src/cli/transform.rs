//! Transform command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::SpritefxConfig;
use crate::effects::{effect_ids, resolve, transform};
use crate::suggest::{format_suggestion, suggest, MAX_SUGGESTION_DISTANCE};

use super::batch::{run_batch, BatchOptions};
use super::EXIT_INVALID_ARGS;

/// Grow the configured effect out of every input sprite.
pub fn run_transform(inputs: &[PathBuf], config: &SpritefxConfig) -> ExitCode {
    let effect = config.defaults.effect.as_str();
    let def = match resolve(effect) {
        Ok(def) => def,
        Err(_) => {
            eprintln!("Error: Unknown effect '{}'", effect);
            let ids = effect_ids();
            if let Some(hint) = format_suggestion(&suggest(effect, &ids, MAX_SUGGESTION_DISTANCE)) {
                eprintln!("{}", hint);
            }
            eprintln!();
            eprintln!("Available effects:");
            for id in ids {
                eprintln!("  {}", id);
            }
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let seed = config.defaults.seed;
    let options = BatchOptions {
        tag: def.id,
        out_dir: &config.output.dir,
        scale: config.defaults.scale,
        jobs: config.batch.jobs,
    };
    run_batch(inputs, &options, |sprite| transform(sprite, def.id, seed))
}
