//! Global per-pixel recolor styles
//!
//! A style maps each pixel's RGB to new values and never changes alpha. The
//! result is mixed with the original by an intensity in percent:
//! `round(orig * (1 - t) + styled * t)` with `t = intensity / 100`. Fully
//! transparent pixels are normalized to `[0, 0, 0, 0]`.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use crate::composite::{clamp_channel, round_half_up};
use crate::error::TransformError;
use crate::pixels::PixelBuffer;
use crate::suggest::closest;
use crate::tint::luminance;

/// A recolor style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Edgy,
    Grungy,
    Neon,
    Retro,
    Pastel,
    Frozen,
    Infernal,
    Toxic,
    Vaporwave,
    Noir,
    Glitch,
    Gold,
    PixelArt,
    Outline,
    Silhouette,
    Invert,
    Monochrome,
    Sepia,
    Cyberpunk,
    CyberpunkV2,
    Fire,
    Ice,
}

impl Style {
    pub const ALL: [Style; 22] = [
        Style::Edgy,
        Style::Grungy,
        Style::Neon,
        Style::Retro,
        Style::Pastel,
        Style::Frozen,
        Style::Infernal,
        Style::Toxic,
        Style::Vaporwave,
        Style::Noir,
        Style::Glitch,
        Style::Gold,
        Style::PixelArt,
        Style::Outline,
        Style::Silhouette,
        Style::Invert,
        Style::Monochrome,
        Style::Sepia,
        Style::Cyberpunk,
        Style::CyberpunkV2,
        Style::Fire,
        Style::Ice,
    ];

    pub fn id(self) -> &'static str {
        self.info().0
    }

    pub fn name(self) -> &'static str {
        self.info().1
    }

    pub fn description(self) -> &'static str {
        self.info().2
    }

    fn info(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Style::Edgy => ("edgy", "Edgy", "High contrast, dark & sharp"),
            Style::Grungy => ("grungy", "Grungy", "Dirty, desaturated, worn"),
            Style::Neon => ("neon", "Neon", "Vivid cyberpunk glow"),
            Style::Retro => ("retro", "Retro", "Warm sepia tones"),
            Style::Pastel => ("pastel", "Pastel", "Soft, light, dreamy"),
            Style::Frozen => ("frozen", "Frozen", "Icy blue chill"),
            Style::Infernal => ("infernal", "Infernal", "Hellfire red & orange"),
            Style::Toxic => ("toxic", "Toxic", "Radioactive green haze"),
            Style::Vaporwave => ("vaporwave", "Vaporwave", "Pink & cyan aesthetic"),
            Style::Noir => ("noir", "Noir", "Dark monochrome shadows"),
            Style::Glitch => ("glitch", "Glitch", "Corrupted color channels"),
            Style::Gold => ("gold", "Golden", "Luxurious gold tint"),
            Style::PixelArt => ("pixel_art", "Pixel Art", "Enhanced pixelation"),
            Style::Outline => ("outline", "Outline", "Black border around content"),
            Style::Silhouette => ("silhouette", "Silhouette", "Solid fill"),
            Style::Invert => ("invert", "Invert", "Color inversion"),
            Style::Monochrome => ("monochrome", "Monochrome", "Black & white"),
            Style::Sepia => ("sepia", "Sepia", "Vintage tone"),
            Style::Cyberpunk => ("cyberpunk", "Cyberpunk", "Neon purple & cyan"),
            Style::CyberpunkV2 => ("cyberpunk_v2", "Cyberpunk v2", "Neon purple & cyan shadows"),
            Style::Fire => ("fire", "Fire", "Red/orange/yellow gradient"),
            Style::Ice => ("ice", "Ice", "Cyan/blue/white gradient"),
        }
    }

    /// Styled RGB for one pixel, before clamping.
    pub fn recolor(self, [r, g, b]: [u8; 3]) -> [f64; 3] {
        let lum = luminance([r, g, b]);
        let (r, g, b) = (r as f64, g as f64, b as f64);
        match self {
            Style::Edgy => {
                let c = |v: f64| ((v - 128.0) * 1.8 + 128.0).max(0.0).min(255.0);
                [c(r) * 0.9, c(g) * 0.7, c(b) * 0.7]
            }
            Style::Grungy => {
                let desat = |v: f64| lum + (v - lum) * 0.55;
                let noise = ((r * 12.9898 + g * 78.233 + b * 45.164).sin() * 43758.5453) % 1.0;
                let n = noise * 15.0 - 7.0;
                [
                    (desat(r) * 0.85 + 30.0 + n).max(0.0).min(255.0),
                    (desat(g) * 0.78 + 20.0 + n).max(0.0).min(255.0),
                    (desat(b) * 0.65 + 10.0 + n).max(0.0).min(255.0),
                ]
            }
            Style::Neon => neon(r, g, b),
            Style::Retro => [
                (r * 0.393 + g * 0.769 + b * 0.189).min(255.0),
                (r * 0.349 + g * 0.686 + b * 0.168).min(255.0),
                (r * 0.272 + g * 0.534 + b * 0.131).min(255.0),
            ],
            Style::Pastel => {
                let lift = |v: f64| v + (255.0 - v) * 0.55;
                let (nr, ng, nb) = (lift(r), lift(g), lift(b));
                let l = 0.299 * nr + 0.587 * ng + 0.114 * nb;
                [l + (nr - l) * 0.65, l + (ng - l) * 0.65, l + (nb - l) * 0.65]
            }
            Style::Frozen => [
                (lum * 0.6 + r * 0.15 + 20.0).min(255.0),
                (lum * 0.65 + g * 0.2 + 40.0).min(255.0),
                (lum * 0.5 + b * 0.35 + 80.0).min(255.0),
            ],
            Style::Infernal => [
                (lum * 0.5 + r * 0.6 + 50.0).min(255.0),
                (lum * 0.25 + g * 0.2 + 15.0).min(255.0),
                (lum * 0.05 + b * 0.05).min(255.0),
            ],
            Style::Toxic => [
                (lum * 0.2 + r * 0.15).min(255.0),
                (lum * 0.55 + g * 0.5 + 40.0).min(255.0),
                (lum * 0.1 + b * 0.08).min(255.0),
            ],
            Style::Vaporwave => [
                (r * 0.5 + lum * 0.3 + 80.0).min(255.0),
                (g * 0.25 + lum * 0.15 + 40.0).min(255.0),
                (b * 0.5 + lum * 0.35 + 90.0).min(255.0),
            ],
            Style::Noir => {
                let l = (((lum - 128.0) * 1.6 + 128.0) * 0.85).max(0.0).min(255.0);
                [l, l, l]
            }
            Style::Glitch => {
                let seed = (r as u32 * 17 + g as u32 * 31 + b as u32 * 47) % 255;
                let shift = if seed > 180 {
                    40.0
                } else if seed > 100 {
                    -30.0
                } else {
                    15.0
                };
                [
                    (g + shift).max(0.0).min(255.0),
                    (b - shift * 0.5).max(0.0).min(255.0),
                    (r + shift * 0.7).max(0.0).min(255.0),
                ]
            }
            Style::Gold => [
                (lum * 0.65 + 90.0).min(255.0),
                (lum * 0.55 + 60.0).min(255.0),
                (lum * 0.2 + 10.0).min(255.0),
            ],
            Style::PixelArt => {
                let step = 255.0 / 5.0;
                let q = |v: f64| round_half_up(round_half_up(v / step) * step);
                [q(r), q(g), q(b)]
            }
            Style::Outline => {
                if lum < 180.0 {
                    [0.0, 0.0, 0.0]
                } else {
                    [255.0, 255.0, 255.0]
                }
            }
            Style::Silhouette => [20.0, 20.0, 30.0],
            Style::Invert => [255.0 - r, 255.0 - g, 255.0 - b],
            Style::Monochrome => [lum, lum, lum],
            Style::Sepia => {
                [(lum + 40.0).min(255.0), (lum + 15.0).min(255.0), (lum - 20.0).max(0.0)]
            }
            Style::Cyberpunk => {
                let t = lum / 255.0;
                [
                    (lum * 0.4 + 140.0 * (1.0 - t) + r * 0.15).min(255.0),
                    (lum * 0.15 + 30.0 * t + g * 0.1).min(255.0),
                    (lum * 0.45 + 180.0 * t + b * 0.1).min(255.0),
                ]
            }
            Style::CyberpunkV2 => {
                let l = lum / 255.0;
                [
                    (l * 180.0).min(255.0),
                    (l * 20.0 + (1.0 - l) * 220.0).min(255.0),
                    (l * 255.0 + (1.0 - l) * 240.0).min(255.0),
                ]
            }
            Style::Fire => fire_ramp(lum / 255.0),
            Style::Ice => ice_ramp(lum / 255.0),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Style {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL.iter().copied().find(|style| style.id() == s).ok_or_else(|| {
            TransformError::UnknownStyle { id: s.to_string(), suggestion: closest(s, &style_ids()) }
        })
    }
}

/// All style ids, in catalog order.
pub fn style_ids() -> Vec<&'static str> {
    Style::ALL.iter().map(|s| s.id()).collect()
}

/// Saturation boost in HSL space.
fn neon(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let mut l = (max + min) / 2.0 / 255.0;
    let (mut h, mut s) = (0.0, 0.0);
    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (510.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
    }
    s = (s * 2.2 + 0.3).min(1.0);
    l = (l * 1.15 + 0.08).min(0.85);

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    ]
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn fire_ramp(lum: f64) -> [f64; 3] {
    if lum < 0.33 {
        [(lum * 3.0 * 200.0 + 55.0).min(255.0), (lum * 3.0 * 20.0).min(255.0), 0.0]
    } else if lum < 0.66 {
        let t = (lum - 0.33) * 3.0;
        [255.0, (t * 180.0 + 20.0).min(255.0), 0.0]
    } else {
        let t = (lum - 0.66) * 3.0;
        [255.0, (180.0 + t * 75.0).min(255.0), (t * 120.0).min(255.0)]
    }
}

fn ice_ramp(lum: f64) -> [f64; 3] {
    if lum < 0.33 {
        [
            (lum * 3.0 * 30.0).min(255.0),
            (lum * 3.0 * 60.0 + 20.0).min(255.0),
            (lum * 3.0 * 140.0 + 80.0).min(255.0),
        ]
    } else if lum < 0.66 {
        let t = (lum - 0.33) * 3.0;
        [(30.0 + t * 80.0).min(255.0), (80.0 + t * 140.0).min(255.0), (220.0 + t * 35.0).min(255.0)]
    } else {
        let t = (lum - 0.66) * 3.0;
        [(110.0 + t * 145.0).min(255.0), (220.0 + t * 35.0).min(255.0), 255.0]
    }
}

/// Recolor every pixel of `source` with `style` at `intensity` percent
/// (values above 100 are treated as 100).
pub fn restyle(source: &PixelBuffer, style: Style, intensity: u8) -> PixelBuffer {
    let t = intensity.min(100) as f64 / 100.0;
    let mut out = source.clone();
    out.as_bytes_mut().par_chunks_exact_mut(4).for_each(|px| {
        if px[3] == 0 {
            px[..3].fill(0);
            return;
        }
        let styled = style.recolor([px[0], px[1], px[2]]);
        for (c, s) in px[..3].iter_mut().zip(styled) {
            *c = clamp_channel(round_half_up(*c as f64 * (1.0 - t) + s * t));
        }
    });
    out
}
