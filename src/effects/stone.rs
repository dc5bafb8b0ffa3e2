//! Grey rock texture with rubble flecks and random-walk cracks

use super::Growth;
use crate::composite::clamp_channel;
use crate::tint::luminance;

pub(super) fn tint(rgb: [u8; 3], draw: f64) -> [f64; 3] {
    let noise = draw * 20.0 - 10.0;
    let base = luminance(rgb) * 0.6 + 60.0 + noise;
    [base + 5.0, base, base - 5.0].map(|v| v.max(0.0).min(255.0))
}

pub(super) fn grow(g: &mut Growth) {
    for site in &g.sites {
        if g.rng.next_f64() > 0.08 {
            continue;
        }
        let len = g.rng.int_below(3) + 1;
        for i in 1..=len {
            let gray = 80.0 + g.rng.int_below(50) as f64;
            let wobble_x = g.rng.int_below(3) - 1;
            let wobble_y = g.rng.int_below(3) - 1;
            let alpha = (200.0 * (1.0 - i as f64 / (len + 1) as f64)).floor();
            let (px, py) = site.step(i);
            g.canvas.blend(px + wobble_x, py + wobble_y, gray, gray - 5.0, gray - 10.0, alpha);
        }
    }
    cracks(g);
}

fn cracks(g: &mut Growth) {
    // cracks only darken RGB, so the start candidates never change
    let pixels = g.sprite_pixels();
    if pixels.is_empty() {
        return;
    }
    for _ in 0..3 {
        let (mut cx, mut cy) = pixels[g.rng.below(pixels.len())];
        let len = g.rng.int_below(8) + 3;
        for _ in 0..len {
            if g.canvas.is_opaque(cx, cy) {
                let [r, gr, b, _] = g.canvas.get(cx, cy);
                g.canvas.set_rgb(
                    cx,
                    cy,
                    [
                        clamp_channel(r as f64 - 40.0),
                        clamp_channel(gr as f64 - 40.0),
                        clamp_channel(b as f64 - 35.0),
                    ],
                );
            }
            cx += g.rng.int_below(3) - 1;
            cy += g.rng.int_below(3) - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::transform;
    use crate::pixels::PixelBuffer;

    #[test]
    fn test_tint_is_grey_with_warm_offset() {
        let [r, g, b] = tint([100, 100, 100], 0.5);
        assert!((r - g - 5.0).abs() < 1e-9);
        assert!((g - b - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_cracks_keep_alpha() {
        let source = PixelBuffer::filled(6, 6, [200, 200, 200, 255]);
        let out = transform(&source, "stone", 17).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(out.alpha(x + 6, y + 6), 255);
            }
        }
    }
}
