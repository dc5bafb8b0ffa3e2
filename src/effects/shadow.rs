//! Dark smoky tint with rising wisps and drifting particles

use super::Growth;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [(lum * 0.25 + 10.0).max(0.0), (lum * 0.15 + 5.0).max(0.0), (lum * 0.3 + 20.0).min(255.0)]
}

pub(super) fn grow(g: &mut Growth) {
    for _ in 0..12 {
        let site = g.pick_site();
        let (mut vx, mut vy) = site.step(1);
        let len = g.rng.int_below(12) + 4;
        for i in 0..len {
            let t = i as f64 / len as f64;
            let alpha = (120.0 * (1.0 - t)).floor();
            g.canvas.blend(vx, vy, 20.0, 10.0, 30.0, alpha);
            g.canvas.blend(vx + 1, vy, 15.0, 8.0, 25.0, alpha * 0.5);
            g.canvas.blend(vx - 1, vy, 15.0, 8.0, 25.0, alpha * 0.5);
            vx += g.rng.int_below(3) - 1;
            vy -= 1;
        }
    }

    for _ in 0..20 {
        let site = g.pick_site();
        let px = site.x + g.rng.int_below(10) - 5;
        let py = site.y + g.rng.int_below(10) - 5;
        let alpha = g.rng.int_below(80) as f64 + 30.0;
        g.canvas.blend(px, py, 10.0, 5.0, 20.0, alpha);
    }
}
