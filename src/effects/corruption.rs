//! Noisy purple decay with scattered corrupt pixels and glitch lines

use super::Growth;

pub(super) fn tint([r, g, b]: [u8; 3], draw: f64) -> [f64; 3] {
    let noise = draw * 30.0 - 15.0;
    [
        (r as f64 * 0.5 + 40.0 + noise).max(0.0).min(255.0),
        (g as f64 * 0.3 + noise).max(0.0),
        (b as f64 * 0.5 + 50.0 + noise).max(0.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        if g.rng.next_f64() > 0.035 {
            continue;
        }
        let scatter = g.rng.int_below(5) + 2;
        for _ in 0..scatter {
            let sx = site.x + site.dx() * (g.rng.int_below(6) + 1) + g.rng.int_below(3) - 1;
            let sy = site.y + site.dy() * (g.rng.int_below(6) + 1) + g.rng.int_below(3) - 1;
            let purple = g.rng.int_below(80) as f64 + 40.0;
            let alpha = g.rng.int_below(120) as f64 + 80.0;
            g.canvas.set(sx, sy, purple, 10.0, purple + 30.0, alpha);
        }
    }

    // glitch lines stay anchored inside the sprite's region
    let region = g.region;
    for _ in 0..4 {
        let gy = region.y + g.rng.int_below(region.height as i32);
        let gx = region.x + g.rng.int_below(region.width as i32);
        let len = g.rng.int_below(8) + 3;
        let horizontal = g.rng.next_f64() > 0.5;
        for i in 0..len {
            let (px, py) = if horizontal { (gx + i, gy) } else { (gx, gy + i) };
            if g.canvas.is_opaque(px, py) || g.rng.next_f64() > 0.5 {
                g.canvas.set(px, py, 120.0, 0.0, 160.0, 200.0);
            }
        }
    }
}
