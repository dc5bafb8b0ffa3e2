//! Iridescent bubbles floating away from the silhouette
//!
//! Each bubble is a disk stamped with four alpha bands: a bright rim, a
//! specular highlight up and to the left, a faint core fill and an almost
//! clear interior.

use std::f64::consts::PI;

use super::Growth;
use crate::composite::round_half_up;

pub(super) fn tint([r, g, b]: [u8; 3]) -> [f64; 3] {
    [
        (r as f64 * 0.85 + 30.0).min(255.0),
        (g as f64 * 0.9 + 20.0).min(255.0),
        (b as f64 * 0.85 + 45.0).min(255.0),
    ]
}

/// Rim color for a hue angle in degrees.
fn iridescence(hue: f64) -> [f64; 3] {
    [0.0, 120.0, 240.0].map(|offset| (128.0 + 80.0 * ((hue + offset) * PI / 180.0).cos()).floor())
}

pub(super) fn grow(g: &mut Growth) {
    for _ in 0..g.budget(2.0, 500.0) {
        let site = g.pick_site();
        if g.rng.next_f64() > 0.45 {
            continue;
        }
        let radius = g.rng.next_f64() * 3.0 + 1.5;
        let dist = g.rng.next_f64() * 10.0 + radius + 2.0;
        let angle = (site.dy() as f64).atan2(site.dx() as f64) + (g.rng.next_f64() - 0.5) * 1.2;
        let cx = site.x as f64 + angle.cos() * dist;
        let cy = site.y as f64 + angle.sin() * dist;
        let [hr, hg, hb] = iridescence(g.rng.next_f64() * 360.0);

        let reach = radius.ceil() as i32;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let d = ((dx * dx + dy * dy) as f64).sqrt();
                if d > radius {
                    continue;
                }
                let px = round_half_up(cx + dx as f64);
                let py = round_half_up(cy + dy as f64);
                let (x, y) = (px as i32, py as i32);

                let rim = (d - radius).abs();
                if rim < 1.2 {
                    let alpha = (180.0 * (1.0 - rim / 1.2)).floor();
                    g.canvas.blend(x, y, hr, hg, hb, alpha);
                } else if d < radius * 0.4 {
                    let (hx, hy) = (cx - radius * 0.3, cy - radius * 0.3);
                    let glint = ((px - hx).powi(2) + (py - hy).powi(2)).sqrt();
                    if glint < radius * 0.35 {
                        let alpha = (120.0 * (1.0 - glint / (radius * 0.35))).floor();
                        g.canvas.blend(x, y, 240.0, 245.0, 255.0, alpha);
                    } else {
                        g.canvas.blend(x, y, hr, hg, hb, 25.0);
                    }
                } else {
                    g.canvas.blend(x, y, hr, hg, hb, 20.0);
                }
            }
        }
    }
}
