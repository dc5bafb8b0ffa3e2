//! Shared load/process/save loop for the image commands

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::TransformError;
use crate::input::{collect_inputs, load_sprite, InputError};
use crate::output::{output_path, save_png, scale_image, OutputError};
use crate::pixels::PixelBuffer;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Failure while processing one input file.
#[derive(Debug, Error)]
pub(crate) enum ProcessError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("failed to write output: {0}")]
    Output(#[from] OutputError),
}

/// Where and how results are written.
pub(crate) struct BatchOptions<'a> {
    /// Effect or style id appended to each file stem
    pub tag: &'a str,
    pub out_dir: &'a Path,
    pub scale: u8,
    pub jobs: usize,
}

/// Run `apply` over every input in parallel and save the results.
///
/// Output paths are printed to stdout in input order. A failed file is
/// reported on stderr and does not stop the others.
pub(crate) fn run_batch<F>(inputs: &[PathBuf], options: &BatchOptions<'_>, apply: F) -> ExitCode
where
    F: Fn(&PixelBuffer) -> Result<PixelBuffer, TransformError> + Sync,
{
    let files = match collect_inputs(inputs) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(options.jobs).build() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Error: failed to start worker threads: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    debug!(files = files.len(), threads = pool.current_num_threads(), "processing batch");

    let results: Vec<Result<PathBuf, ProcessError>> = pool.install(|| {
        files.par_iter().map(|file| process_one(file, options, &apply)).collect()
    });

    let mut failed = 0;
    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                failed += 1;
                eprintln!("Error: {}: {}", file.display(), e);
            }
        }
    }

    if failed > 0 {
        eprintln!("{} of {} file(s) failed", failed, files.len());
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

fn process_one<F>(
    file: &Path,
    options: &BatchOptions<'_>,
    apply: &F,
) -> Result<PathBuf, ProcessError>
where
    F: Fn(&PixelBuffer) -> Result<PixelBuffer, TransformError>,
{
    let sprite = load_sprite(file)?;
    let result = apply(&sprite)?;
    let image = scale_image(result.into_image(), options.scale);
    let path = output_path(file, options.tag, options.out_dir);
    save_png(&image, &path)?;
    info!(input = %file.display(), output = %path.display(), "saved");
    Ok(path)
}
