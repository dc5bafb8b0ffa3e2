//! Wood grain with bark flecks and dark knots

use super::Growth;
use crate::composite::clamp_channel;
use crate::tint::{luminance, TintSite};

pub(super) fn tint(rgb: [u8; 3], site: TintSite) -> [f64; 3] {
    let lum = luminance(rgb);
    let (x, y) = (site.x as f64, site.y as f64);
    let grain = (y * 0.7 + (x * 0.3).sin() * 2.0).sin() * 0.5 + 0.5;
    let (rx, ry) = (x - site.width as f64 / 2.0, y - site.height as f64 / 2.0);
    let ring = ((rx * rx + ry * ry).sqrt() * 0.5).sin() * 0.5 + 0.5;
    let wood = grain * 0.6 + ring * 0.4;
    [
        (120.0 + wood * 60.0 + lum * 0.15).min(255.0),
        (70.0 + wood * 35.0 + lum * 0.1).min(255.0),
        (30.0 + wood * 15.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    bark(g);
    knots(g);
}

fn bark(g: &mut Growth) {
    for site in &g.sites {
        if g.rng.next_f64() > 0.07 {
            continue;
        }
        let len = g.rng.int_below(3) + 1;
        for i in 1..=len {
            let brown = 60.0 + g.rng.int_below(40) as f64;
            let alpha = (200.0 * (1.0 - i as f64 / (len + 1) as f64)).floor();
            let (px, py) = site.step(i);
            g.canvas.blend(px, py, brown, brown * 0.55, brown * 0.25, alpha);
        }
    }
}

fn knots(g: &mut Growth) {
    // knots only recolor, so the candidate list is stable across knots
    let pixels = g.sprite_pixels();
    if pixels.is_empty() {
        return;
    }
    for _ in 0..3 {
        let (kx, ky) = pixels[g.rng.below(pixels.len())];
        for dy in -2..=2 {
            for dx in -2..=2 {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                let (x, y) = (kx + dx, ky + dy);
                if dist > 2.0 || !g.canvas.is_opaque(x, y) {
                    continue;
                }
                let ring = (dist * 2.0).sin() * 0.5 + 0.5;
                let [r, gr, b, _] = g.canvas.get(x, y);
                g.canvas.set_rgb(
                    x,
                    y,
                    [
                        clamp_channel(r as f64 * (0.6 + ring * 0.3)),
                        clamp_channel(gr as f64 * (0.5 + ring * 0.2)),
                        clamp_channel(b as f64 * (0.4 + ring * 0.1)),
                    ],
                );
            }
        }
    }
}
