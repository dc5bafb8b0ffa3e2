//! Flames licking upward and sideways, with embers
//!
//! Flames never grow from downward sites. Each flame colors its pixels by
//! progress `t` along its length: a white-yellow core, an orange middle band
//! and red tips.

use super::Growth;
use crate::composite::round_half_up;
use crate::sampler::Direction;

pub(super) fn tint([r, g, b]: [u8; 3]) -> [f64; 3] {
    [
        (r as f64 * 0.8 + 50.0).min(255.0),
        (g as f64 * 0.6 + 20.0).min(255.0),
        (b as f64 * 0.3).max(0.0),
    ]
}

pub(super) fn tint_inferno([r, g, b]: [u8; 3]) -> [f64; 3] {
    [
        (r as f64 * 0.85 + 60.0).min(255.0),
        (g as f64 * 0.55 + 25.0).min(255.0),
        (b as f64 * 0.2).max(0.0),
    ]
}

/// Three-band flame color at progress `t`.
fn flame_color(t: f64) -> [f64; 3] {
    if t < 0.3 {
        [255.0, 255.0, 180.0]
    } else if t < 0.6 {
        [255.0, 160.0 - t * 100.0, 20.0]
    } else {
        [200.0, 50.0, 10.0]
    }
}

pub(super) fn grow(g: &mut Growth) {
    let phase = g.seed as f64 * 0.01;
    for site in &g.sites {
        if site.dir == Direction::Down {
            continue;
        }
        if g.rng.next_f64() > 0.05 {
            continue;
        }
        let len = g.rng.int_below(8) + 2;
        let drift = (g.rng.next_f64() - 0.5) * 0.3;
        let (x, y) = (site.x as f64, site.y as f64);

        for i in 1..=len {
            let step = i as f64;
            let t = step / len as f64;
            let wobble = (step * 1.5 + phase).sin() * 1.5;
            let (px, py) = if site.dir == Direction::Up {
                (round_half_up(x + wobble + drift * step), y - step)
            } else {
                (
                    round_half_up(x + site.dx() as f64 * step + wobble),
                    round_half_up(y + site.dy() as f64 * step - step * 0.3),
                )
            };
            let alpha = (240.0 * (1.0 - t * 0.8)).floor();
            let [r, gr, b] = flame_color(t);
            g.canvas.blend(px as i32, py as i32, r, gr, b, alpha);
        }
    }

    for _ in 0..15 {
        let site = g.pick_site();
        let ex = site.x + (g.rng.next_f64() * 8.0 - 4.0).floor() as i32;
        let ey = site.y - g.rng.int_below(10) - 3;
        let alpha = g.rng.int_below(150) as f64 + 60.0;
        g.canvas.blend(ex, ey, 255.0, 200.0, 50.0, alpha);
    }
}

pub(super) fn grow_inferno(g: &mut Growth) {
    let phase = g.seed as f64 * 0.01;
    for site in &g.sites {
        if site.dir == Direction::Down {
            continue;
        }
        if g.rng.next_f64() > 0.09 {
            continue;
        }
        let len = g.rng.int_below(12) + 4;
        let base_width = g.rng.int_below(2) + 2;
        let drift = (g.rng.next_f64() - 0.5) * 0.4;
        let upward = site.dir == Direction::Up;
        // flames widen across their direction of travel
        let (perp_x, perp_y) = if upward { (1, 0) } else { (0, 1) };
        let (x, y) = (site.x as f64, site.y as f64);

        for i in 1..=len {
            let step = i as f64;
            let t = step / len as f64;
            let wobble = (step * 1.2 + phase).sin() * 2.0;
            let (px, py) = if upward {
                (round_half_up(x + wobble + drift * step), y - step)
            } else {
                (
                    round_half_up(x + site.dx() as f64 * step),
                    round_half_up(y - step * 0.45 + wobble * 0.5),
                )
            };
            let half = round_half_up((1.0 - t) * base_width as f64) as i32;
            let alpha = (250.0 * (1.0 - t * 0.75)).floor();
            let [r, gr, b] = flame_color(t);
            for k in -half..=half {
                let falloff = 1.0 - k.abs() as f64 / (half + 1) as f64 * 0.5;
                g.canvas.blend(
                    px as i32 + perp_x * k,
                    py as i32 + perp_y * k,
                    r,
                    gr,
                    b,
                    (alpha * falloff).floor(),
                );
            }
        }
    }

    for _ in 0..24 {
        let site = g.pick_site();
        let ex = site.x + g.rng.int_below(12) - 6;
        let ey = site.y - g.rng.int_below(16) - 3;
        let alpha = g.rng.int_below(150) as f64 + 80.0;
        g.canvas.blend(ex, ey, 255.0, 190.0, 40.0, alpha);
    }

    for _ in 0..10 {
        let site = g.pick_site();
        let sx = site.x + g.rng.int_below(8) - 4;
        let sy = site.y - g.rng.int_below(10) - 10;
        let alpha = g.rng.int_below(50) as f64 + 40.0;
        for (ox, oy) in [(0, 0), (1, 0), (0, -1)] {
            g.canvas.blend(sx + ox, sy + oy, 60.0, 55.0, 55.0, alpha);
        }
    }
}
