//! Error types for the transformation engine

use thiserror::Error;

/// Errors reported by the engine to its caller.
///
/// Only configuration mistakes surface here. Geometric edge cases (writes
/// outside the canvas, sprites without opaque pixels) are handled as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Effect id not present in the catalog
    #[error("unknown effect '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownEffect { id: String, suggestion: Option<String> },
    /// Style id not present in the restyle catalog
    #[error("unknown style '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownStyle { id: String, suggestion: Option<String> },
    /// Padding outside the supported range
    #[error("invalid padding {padding}, expected at most {max}")]
    InvalidPadding { padding: u32, max: u32 },
    /// Source image has a zero dimension
    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    /// Raw pixel data does not match the declared dimensions
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSize { width: u32, height: u32, expected: usize, actual: usize },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
