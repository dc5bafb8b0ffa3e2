//! Jagged spikes erupting at random angles

use std::f64::consts::{FRAC_PI_2, PI};

use super::Growth;
use crate::composite::round_half_up;

const CONTRAST: f64 = 1.6;

pub(super) fn tint([r, g, b]: [u8; 3]) -> [f64; 3] {
    let stretch = |c: u8| (c as f64 - 128.0) * CONTRAST + 128.0;
    [
        (stretch(r) * 0.85 + 20.0).max(0.0).min(255.0),
        (stretch(g) * 0.7).max(0.0).min(255.0),
        (stretch(b) * 0.75 + 10.0).max(0.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        if g.rng.next_f64() > 0.05 {
            continue;
        }
        let count = g.rng.int_below(3) + 1;
        for _ in 0..count {
            let angle = g.rng.next_f64() * PI * 2.0;
            let len = g.rng.int_below(12) + 4;
            let cr = g.rng.int_below(80) as f64 + 50.0;
            let cg = g.rng.int_below(30) as f64;
            let cb = g.rng.int_below(40) as f64 + 10.0;
            let normal = angle + FRAC_PI_2;
            let (mut px, mut py) = (site.x as f64, site.y as f64);

            for i in 1..=len {
                let t = i as f64 / len as f64;
                let wobble = (g.rng.next_f64() - 0.5) * 2.5;
                px += angle.cos() + normal.cos() * wobble;
                py += angle.sin() + normal.sin() * wobble;
                let (rx, ry) = (round_half_up(px) as i32, round_half_up(py) as i32);
                let alpha = (255.0 * (1.0 - t * 0.6)).floor();
                let bright = 1.0 - t * 0.5;
                g.canvas.blend(rx, ry, cr * bright, cg * bright, cb * bright, alpha);

                if t < 0.4 {
                    let ox = round_half_up(normal.cos()) as i32;
                    let oy = round_half_up(normal.sin()) as i32;
                    let shade = cr * bright * 0.7;
                    g.canvas.blend(rx + ox, ry + oy, shade, cg, cb, alpha * 0.5);
                    g.canvas.blend(rx - ox, ry - oy, shade, cg, cb, alpha * 0.5);
                }
                if i == len {
                    g.canvas.blend(rx, ry, (cr + 100.0).min(255.0), cg + 20.0, cb + 30.0, 220.0);
                }
            }
        }
    }
}
