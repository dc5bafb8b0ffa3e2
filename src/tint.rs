//! Tint pass run over the original sprite region before sampling
//!
//! A tint recomputes the RGB of every opaque pixel inside the sprite's
//! region. Alpha is never touched, so opacity topology is preserved.
//!
//! [`Tint::Color`] and [`Tint::Positional`] are pure per pixel and run over
//! rows in parallel. [`Tint::Noise`] draws one value per opaque pixel from
//! the shared stream and therefore runs sequentially in row-major order.

use rayon::prelude::*;

use crate::canvas::Region;
use crate::composite::clamp_channel;
use crate::pixels::{PixelBuffer, OPACITY_THRESHOLD};
use crate::rng::SeededRng;

/// Rec. 601 luma weights used by every tint.
#[inline]
pub fn luminance([r, g, b]: [u8; 3]) -> f64 {
    r as f64 * 0.299 + g as f64 * 0.587 + b as f64 * 0.114
}

/// Where a pixel sits inside the sprite, for position-dependent tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintSite {
    /// Column relative to the sprite's left edge.
    pub x: u32,
    /// Row relative to the sprite's top edge.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Per-pixel recolor applied to opaque sprite pixels.
#[derive(Debug, Clone, Copy)]
pub enum Tint {
    /// Pure function of the current color.
    Color(fn([u8; 3]) -> [f64; 3]),
    /// Depends on color and position within the sprite.
    Positional(fn([u8; 3], TintSite) -> [f64; 3]),
    /// Receives one fresh draw in `[0, 1)` per opaque pixel.
    Noise(fn([u8; 3], f64) -> [f64; 3]),
}

/// Recolor opaque pixels of `canvas` inside `region`.
pub fn apply_tint(canvas: &mut PixelBuffer, region: Region, tint: &Tint, rng: &mut SeededRng) {
    match *tint {
        Tint::Color(f) => par_rows(canvas, region, |rgb, _| f(rgb)),
        Tint::Positional(f) => par_rows(canvas, region, f),
        Tint::Noise(f) => {
            let width = canvas.width() as usize;
            let data = canvas.as_bytes_mut();
            for (x, y) in region.points() {
                let i = (y as usize * width + x as usize) * 4;
                if data[i + 3] <= OPACITY_THRESHOLD {
                    continue;
                }
                let noise = rng.next_f64();
                let rgb = [data[i], data[i + 1], data[i + 2]];
                store(&mut data[i..i + 3], f(rgb, noise));
            }
        }
    }
}

fn par_rows<F>(canvas: &mut PixelBuffer, region: Region, f: F)
where
    F: Fn([u8; 3], TintSite) -> [f64; 3] + Sync,
{
    let row_bytes = canvas.width() as usize * 4;
    let (x0, y0) = (region.x as usize, region.y as usize);
    let (w, h) = (region.width as usize, region.height as usize);

    canvas
        .as_bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .skip(y0)
        .take(h)
        .for_each(|(row, bytes)| {
            let span = &mut bytes[x0 * 4..(x0 + w) * 4];
            for (col, px) in span.chunks_exact_mut(4).enumerate() {
                if px[3] <= OPACITY_THRESHOLD {
                    continue;
                }
                let site = TintSite {
                    x: col as u32,
                    y: (row - y0) as u32,
                    width: region.width,
                    height: region.height,
                };
                let rgb = [px[0], px[1], px[2]];
                store(&mut px[..3], f(rgb, site));
            }
        });
}

#[inline]
fn store(px: &mut [u8], rgb: [f64; 3]) {
    for (c, v) in px.iter_mut().zip(rgb) {
        *c = clamp_channel(v);
    }
}
