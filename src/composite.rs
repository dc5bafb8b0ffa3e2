//! Pixel write primitives shared by all effects
//!
//! Effects pick one of two writes per feature: [`PixelBuffer::blend`] for soft
//! detail (drips, glows, particles) and [`PixelBuffer::set`] for hard-edged
//! detail (lightning cores, crystal faces). Both silently drop writes outside
//! the canvas.
//!
//! Colors arrive as `f64` because effects compute them with fractional
//! factors (`alpha * 0.5`, `brown * 0.55`). Every stored channel goes through
//! [`clamp_channel`].

use crate::pixels::PixelBuffer;

/// Convert a computed channel to a stored byte.
///
/// NaN stores as 0, values clamp to `[0, 255]`, and halves round to even.
#[inline]
pub fn clamp_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// Round with halves going up (`floor(v + 0.5)`), used for effect geometry.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

impl PixelBuffer {
    /// Source-over alpha compositing.
    ///
    /// `outA = srcA + dstA * (1 - srcA)`; each color channel becomes
    /// `(src * srcA + dst * dstA * (1 - srcA)) / outA`. A zero `outA` leaves
    /// the pixel untouched.
    pub fn blend(&mut self, x: i32, y: i32, r: f64, g: f64, b: f64, a: f64) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let data = self.as_bytes_mut();
        let src_a = a / 255.0;
        let dst_a = data[i + 3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a == 0.0 {
            return;
        }
        for (c, src) in [r, g, b].into_iter().enumerate() {
            let dst = data[i + c] as f64;
            data[i + c] = clamp_channel((src * src_a + dst * dst_a * (1.0 - src_a)) / out_a);
        }
        data[i + 3] = clamp_channel(out_a * 255.0);
    }

    /// Overwrite all four channels, ignoring the destination.
    pub fn set(&mut self, x: i32, y: i32, r: f64, g: f64, b: f64, a: f64) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let data = self.as_bytes_mut();
        data[i] = clamp_channel(r);
        data[i + 1] = clamp_channel(g);
        data[i + 2] = clamp_channel(b);
        data[i + 3] = clamp_channel(a);
    }
}
