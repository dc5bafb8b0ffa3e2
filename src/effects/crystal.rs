//! Angled gemstone shards growing off the edge normal

use super::Growth;
use crate::composite::round_half_up;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    let [r, g, b] = rgb.map(f64::from);
    [
        (lum * 0.4 + r * 0.3 + 40.0).min(255.0),
        (lum * 0.3 + g * 0.3 + 50.0).min(255.0),
        (lum * 0.5 + b * 0.4 + 80.0).min(255.0),
    ]
}

pub(super) fn grow(g: &mut Growth) {
    for _ in 0..g.budget(15.0, 25.0) {
        let site = g.pick_site();
        let len = g.rng.int_below(8) + 3;
        let angle = (site.dy() as f64).atan2(site.dx() as f64) + (g.rng.next_f64() - 0.5) * 0.8;
        let hue = g.rng.next_f64();
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (site.x as f64, site.y as f64);

        for i in 1..=len {
            let px = round_half_up(x + cos * i as f64);
            let py = round_half_up(y + sin * i as f64);
            let t = i as f64 / len as f64;
            let bright = 150.0 + ((1.0 - t) * 105.0).floor();
            let alpha = (230.0 * (1.0 - t * 0.5)).floor();

            let cr = (bright * (0.5 + hue * 0.3)).floor();
            let cg = (bright * (0.5 + (1.0 - hue) * 0.2)).floor();
            let cb = (bright * (0.7 + hue * 0.3)).floor();

            g.canvas.set(px as i32, py as i32, cr, cg, cb, alpha);
            if t < 0.4 {
                let (perp_x, perp_y) = (-sin, cos);
                for side in [1.0, -1.0] {
                    let wx = round_half_up(px + perp_x * side) as i32;
                    let wy = round_half_up(py + perp_y * side) as i32;
                    g.canvas.blend(wx, wy, cr, cg, cb, alpha * 0.6);
                }
            }
        }

        let tx = round_half_up(x + cos) as i32;
        let ty = round_half_up(y + sin) as i32;
        g.canvas.blend(tx, ty, 240.0, 240.0, 255.0, 250.0);
    }
}
