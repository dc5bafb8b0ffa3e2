//! Sprite loading and input discovery
//!
//! Any format the `image` crate decodes is accepted and converted to RGBA8.
//! Directories given on the command line expand to the PNG files they
//! contain, sorted by path.

use glob::glob;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::pixels::PixelBuffer;

/// Error while locating or decoding input sprites.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid glob pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),
    #[error("no PNG files in {}", .0.display())]
    EmptyDirectory(PathBuf),
}

/// Decode an image file into an RGBA pixel buffer.
pub fn load_sprite(path: &Path) -> Result<PixelBuffer, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }
    let image = image::open(path)
        .map_err(|source| InputError::Decode { path: path.to_path_buf(), source })?;
    Ok(PixelBuffer::from(image.to_rgba8()))
}

/// Expand command-line paths into the list of sprite files to process.
///
/// Files are kept as given. Each directory contributes its `*.png` entries
/// (non-recursive) in sorted order.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, InputError> {
    let mut result = Vec::new();

    for path in paths {
        if path.is_dir() {
            let files = discover_pngs(path)?;
            if files.is_empty() {
                return Err(InputError::EmptyDirectory(path.clone()));
            }
            result.extend(files);
        } else if path.exists() {
            result.push(path.clone());
        } else {
            return Err(InputError::NotFound(path.clone()));
        }
    }

    Ok(result)
}

fn discover_pngs(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let pattern = dir.join("*.png");
    let pattern_str = pattern.to_string_lossy();
    let paths =
        glob(&pattern_str).map_err(|e| InputError::InvalidPattern(pattern_str.to_string(), e))?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("error reading path: {}", e),
        }
    }

    files.sort();
    Ok(files)
}
