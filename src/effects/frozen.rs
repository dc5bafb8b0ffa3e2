//! Icicles hanging from the underside, frost on every other face

use super::Growth;
use crate::sampler::Direction;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [
        (lum * 0.5 + 60.0).min(255.0),
        (lum * 0.6 + 80.0).min(255.0),
        (lum * 0.5 + 120.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        if site.dir != Direction::Down || g.rng.next_f64() > 0.07 {
            continue;
        }
        let len = g.rng.int_below(10) + 3;
        for i in 1..=len {
            let t = i as f64 / len as f64;
            let width = ((1.0 - t) * 2.0).floor().max(0.0) as i32;
            let alpha = (230.0 * (1.0 - t * 0.4)).floor();
            let blue = 180.0 + ((1.0 - t) * 75.0).floor();
            for dx in -width..=width {
                g.canvas.blend(site.x + dx, site.y + i, 180.0, 210.0, blue, alpha);
            }
        }
        g.canvas.blend(site.x, site.y + len + 1, 200.0, 230.0, 255.0, 120.0);
    }

    // frost
    for site in &g.sites {
        if site.dir == Direction::Down || g.rng.next_f64() > 0.93 {
            continue;
        }
        for i in 1..=2 {
            let (px, py) = site.step(i);
            g.canvas.blend(px, py, 200.0, 225.0, 255.0, (180 - i * 50) as f64);
        }
    }

    // snow
    for _ in 0..20 {
        let site = g.pick_site();
        let sx = site.x + g.rng.int_below(6) - 3;
        let sy = site.y + g.rng.int_below(6) - 3;
        let alpha = g.rng.int_below(100) as f64 + 60.0;
        g.canvas.blend(sx, sy, 230.0, 240.0, 255.0, alpha);
    }
}
