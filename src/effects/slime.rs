//! Gooey drips from every face, heaviest underneath

use super::Growth;
use crate::composite::round_half_up;
use crate::sampler::Direction;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [
        (lum * 0.2 + 30.0).min(255.0),
        (lum * 0.6 + 80.0).min(255.0),
        (lum * 0.15 + 20.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        let down = site.dir == Direction::Down;
        let vertical = !site.dir.is_horizontal();
        let chance = match site.dir {
            Direction::Down => 0.08,
            Direction::Left | Direction::Right => 0.025,
            Direction::Up => 0.012,
        };
        if g.rng.next_f64() > chance {
            continue;
        }
        let len = g.rng.int_below(if down { 12 } else { 6 }) + 2;

        for i in 1..=len {
            let t = i as f64 / len as f64;
            let angle = i as f64 * 0.6 + g.rng.next_f64() * 6.0;
            let sway = if g.rng.next_f64() > 0.7 { 1.0 } else { 0.0 };
            let wobble = round_half_up(angle.sin() * sway) as i32;
            let alpha = (220.0 * (1.0 - t * 0.5)).floor();
            let green = 120.0 + g.rng.int_below(80) as f64;
            let (px, py) = if vertical {
                (site.x + wobble, site.y + site.dy() * i)
            } else {
                (site.x + site.dx() * i, site.y + wobble)
            };
            g.canvas.blend(px, py, 40.0, green, 30.0, alpha);

            if t < 0.5 && vertical {
                g.canvas.blend(px - 1, py, 35.0, green - 10.0, 25.0, alpha * 0.5);
                g.canvas.blend(px + 1, py, 35.0, green - 10.0, 25.0, alpha * 0.5);
            }
        }

        if down && len > 3 {
            let (bx, by) = (site.x, site.y + len + 1);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    g.canvas.blend(bx + dx, by + dy, 50.0, 180.0, 40.0, 180.0);
                }
            }
            g.canvas.blend(bx, by - 1, 100.0, 220.0, 80.0, 200.0);
        }
    }
}
