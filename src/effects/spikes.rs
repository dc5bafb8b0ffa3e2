//! Sharp dark protrusions with a widened base

use super::Growth;

pub(super) fn tint([r, g, b]: [u8; 3]) -> [f64; 3] {
    [
        (r as f64 * 0.8 + 30.0).min(255.0),
        (g as f64 * 0.6).max(0.0),
        (b as f64 * 0.6).max(0.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        if g.rng.next_f64() > 0.035 {
            continue;
        }
        let len = g.rng.int_below(8) + 3;
        for i in 1..=len {
            let (px, py) = site.step(i);
            let t = i as f64 / len as f64;
            let alpha = (255.0 * (1.0 - t * 0.7)).floor();
            let dark = (40.0 + t * 30.0).floor();
            g.canvas.blend(px, py, dark, 10.0, 10.0, alpha);

            if (i as f64) < len as f64 * 0.4 {
                let (ox, oy) = if site.dx() != 0 { (0, 1) } else { (1, 0) };
                g.canvas.blend(px - ox, py - oy, dark, 8.0, 8.0, alpha * 0.5);
                g.canvas.blend(px + ox, py + oy, dark, 8.0, 8.0, alpha * 0.5);
            }
        }
    }
}
