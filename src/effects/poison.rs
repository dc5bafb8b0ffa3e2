//! Toxic drips running down the sprite plus bubbling stamps near edges

use super::Growth;
use crate::composite::round_half_up;
use crate::sampler::Direction;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [
        (lum * 0.3 + 20.0).min(255.0),
        (lum * 0.7 + rgb[1] as f64 * 0.4 + 15.0).min(255.0),
        (lum * 0.4 + 40.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    drips(g);
    bubbles(g);
}

fn drips(g: &mut Growth) {
    for site in &g.sites {
        if site.dir != Direction::Down {
            continue;
        }
        if g.rng.next_f64() > 0.06 {
            continue;
        }
        let len = g.rng.int_below(10) + 3;
        for i in 1..=len {
            let t = i as f64 / len as f64;
            let sway = if g.rng.next_f64() > 0.5 { 1.0 } else { 0.0 };
            let wobble = round_half_up((i as f64 * 0.8).sin() * sway) as i32;
            let alpha = (220.0 * (1.0 - t * 0.6)).floor();
            let green = (140.0 + g.rng.next_f64() * 60.0).floor();
            g.canvas.blend(site.x + wobble, site.y + i, 20.0, green, 60.0, alpha);
        }

        let (bx, by) = (site.x, site.y + len + 1);
        g.canvas.blend(bx, by, 30.0, 180.0, 70.0, 200.0);
        g.canvas.blend(bx - 1, by, 25.0, 160.0, 60.0, 140.0);
        g.canvas.blend(bx + 1, by, 25.0, 160.0, 60.0, 140.0);
        g.canvas.blend(bx, by + 1, 20.0, 140.0, 50.0, 100.0);
    }
}

fn bubbles(g: &mut Growth) {
    for _ in 0..12 {
        let site = g.pick_site();
        let radius = g.rng.int_below(3) + 2;
        let (cx, cy) = site.step(radius + 2);
        let r = radius as f64;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let dist = ((dx * dx + dy * dy) as f64).sqrt();
                if dist > r {
                    continue;
                }
                let t = dist / r;
                let rim = dist > r - 1.2;
                let alpha = if rim { 180.0 } else { (80.0 * (1.0 - t * 0.5)).floor() };
                let green = if rim { 220.0 } else { 160.0 };
                g.canvas.blend(cx + dx, cy + dy, 30.0, green, 80.0, alpha);
            }
        }
        g.canvas.blend(cx - 1, cy - 1, 150.0, 255.0, 180.0, 160.0);
    }
}
