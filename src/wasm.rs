//! WASM API module for browser/JS interop
//!
//! Exposes the effect and style catalogs to JavaScript over raw RGBA buffers,
//! the same layout as `ImageData.data`.

use wasm_bindgen::prelude::*;

use crate::effects::{catalog, transform};
use crate::pixels::PixelBuffer;
use crate::restyle::{restyle, Style};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Result of processing an RGBA buffer.
#[wasm_bindgen]
pub struct TransformResult {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    error: Option<String>,
}

#[wasm_bindgen]
impl TransformResult {
    /// Width of the output image in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the output image in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data (4 bytes per pixel)
    #[wasm_bindgen(getter)]
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Error message when processing failed
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }
}

impl TransformResult {
    fn from_result(result: Result<PixelBuffer, String>) -> Self {
        match result {
            Ok(buf) => Self {
                width: buf.width(),
                height: buf.height(),
                pixels: buf.into_bytes(),
                error: None,
            },
            Err(error) => Self { width: 0, height: 0, pixels: Vec::new(), error: Some(error) },
        }
    }
}

/// Reduce a JavaScript number to a seed the way `ToInt32` does: truncate,
/// then wrap modulo 2^32. NaN and infinities become 0.
fn seed_from_js(seed: f64) -> i64 {
    if !seed.is_finite() {
        return 0;
    }
    (seed.trunc() % 4_294_967_296.0) as i64
}

/// Apply an effect to an RGBA buffer.
///
/// JavaScript numbers are accepted for `seed`; see [`seed_from_js`].
#[wasm_bindgen]
pub fn transform_rgba(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    effect: &str,
    seed: f64,
) -> TransformResult {
    TransformResult::from_result(
        PixelBuffer::from_rgba(width, height, pixels)
            .and_then(|source| transform(&source, effect, seed_from_js(seed)))
            .map_err(|e| e.to_string()),
    )
}

/// Recolor an RGBA buffer with a style at `intensity` percent.
#[wasm_bindgen]
pub fn restyle_rgba(
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    style: &str,
    intensity: u8,
) -> TransformResult {
    TransformResult::from_result(
        PixelBuffer::from_rgba(width, height, pixels)
            .and_then(|source| {
                let style = style.parse::<Style>()?;
                Ok(restyle(&source, style, intensity))
            })
            .map_err(|e| e.to_string()),
    )
}

/// Effect ids in display order.
#[wasm_bindgen]
pub fn list_effects() -> Vec<String> {
    catalog().iter().map(|def| def.id.to_string()).collect()
}

/// Style ids in display order.
#[wasm_bindgen]
pub fn list_styles() -> Vec<String> {
    Style::ALL.iter().map(|s| s.id().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    #[test]
    fn test_list_effects() {
        let effects = list_effects();
        assert_eq!(effects.len(), 17);
        assert_eq!(effects[0], "spikes");
    }

    #[test]
    fn test_list_styles() {
        let styles = list_styles();
        assert_eq!(styles.len(), 22);
        assert!(styles.iter().any(|s| s == "cyberpunk_v2"));
    }

    #[test]
    fn test_transform_rgba_pads_output() {
        let result = transform_rgba(vec![255, 255, 255, 255], 1, 1, "spikes", 42.0);
        assert_eq!(result.error(), None);
        assert_eq!((result.width(), result.height()), (25, 25));
        assert_eq!(result.pixels().len(), 25 * 25 * 4);
    }

    #[test]
    fn test_seed_from_js_wraps_like_to_int32() {
        assert_eq!(seed_from_js(42.9), 42);
        assert_eq!(seed_from_js(-1.5), -1);
        assert_eq!(seed_from_js(1e20), 1_661_992_960);
        assert_eq!(SeededRng::new(seed_from_js(-1e20)), SeededRng::new(-1_661_992_960));
        assert_eq!(seed_from_js(f64::NAN), 0);
        assert_eq!(seed_from_js(f64::INFINITY), 0);
    }

    #[test]
    fn test_transform_rgba_huge_seed_matches_wrapped_seed() {
        let sprite = vec![200, 80, 40, 255];
        let huge = transform_rgba(sprite.clone(), 1, 1, "electric", 4_294_967_296.0 * 3.0 + 42.0);
        let plain = transform_rgba(sprite, 1, 1, "electric", 42.0);
        assert_eq!(huge.error(), None);
        assert_eq!(huge.pixels(), plain.pixels());
    }

    #[test]
    fn test_transform_rgba_unknown_effect() {
        let result = transform_rgba(vec![0; 4], 1, 1, "spikez", 1.0);
        assert_eq!(result.width(), 0);
        assert!(result.error().unwrap().contains("did you mean 'spikes'"));
    }

    #[test]
    fn test_transform_rgba_wrong_length() {
        let result = transform_rgba(vec![0; 7], 1, 2, "spikes", 1.0);
        assert!(result.error().unwrap().contains("does not match"));
    }

    #[test]
    fn test_restyle_rgba() {
        let result = restyle_rgba(vec![10, 20, 30, 255], 1, 1, "invert", 100);
        assert_eq!(result.pixels(), vec![245, 235, 225, 255]);
    }
}
