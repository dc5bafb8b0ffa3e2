//! Lightning bolts with glow, short branches and sparks
//!
//! Bolt cores are solid writes; the glow around them is blended. `storm`
//! draws longer bolts whose forks are bolts themselves, recursing up to
//! [`MAX_BRANCH_DEPTH`] levels.

use super::{Growth, MAX_BRANCH_DEPTH};
use crate::tint::luminance;

const GLOW: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(super) fn tint(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [
        (lum * 0.3 + 20.0).min(255.0),
        (lum * 0.5 + 40.0).min(255.0),
        (lum * 0.7 + 80.0).min(255.0),
    ]
}

pub(super) fn tint_storm(rgb: [u8; 3]) -> [f64; 3] {
    let lum = luminance(rgb);
    [
        (lum * 0.25 + 15.0).min(255.0),
        (lum * 0.4 + 30.0).min(255.0),
        (lum * 0.6 + 100.0).min(255.0),
    ]
}

/// One jagged step in a random cardinal direction.
fn jag(g: &mut Growth, x: &mut i32, y: &mut i32) {
    match g.rng.int_below(4) {
        0 => *x += 1,
        1 => *x -= 1,
        2 => *y += 1,
        _ => *y -= 1,
    }
}

fn core(g: &mut Growth, x: i32, y: i32, bright: f64, glow_alpha: f64) {
    g.canvas.set(x, y, bright, bright, 255.0, 250.0);
    for (ox, oy) in GLOW {
        g.canvas.blend(x + ox, y + oy, 80.0, 120.0, 255.0, glow_alpha);
    }
}

pub(super) fn grow(g: &mut Growth) {
    for _ in 0..8 {
        let site = g.pick_site();
        let (mut bx, mut by) = site.step(1);
        let len = g.rng.int_below(12) + 5;

        for _ in 0..len {
            let bright = 200.0 + g.rng.int_below(55) as f64;
            core(g, bx, by, bright, 80.0);
            jag(g, &mut bx, &mut by);

            if g.rng.next_f64() > 0.75 {
                let (mut rx, mut ry) = (bx, by);
                for _ in 0..3 {
                    rx += g.rng.int_below(3) - 1;
                    ry += g.rng.int_below(3) - 1;
                    g.canvas.blend(rx, ry, 150.0, 180.0, 255.0, 150.0);
                }
            }
        }
    }
    sparks(g, 12, 10, 180.0, 70.0);
}

fn sparks(g: &mut Growth, count: usize, spread: i32, alpha_range: f64, alpha_min: f64) {
    for _ in 0..count {
        let site = g.pick_site();
        let sx = site.x + (g.rng.next_f64() * spread as f64 - (spread / 2) as f64).floor() as i32;
        let sy = site.y + (g.rng.next_f64() * spread as f64 - (spread / 2) as f64).floor() as i32;
        let alpha = (g.rng.next_f64() * alpha_range).floor() + alpha_min;
        g.canvas.blend(sx, sy, 200.0, 220.0, 255.0, alpha);
    }
}

pub(super) fn grow_storm(g: &mut Growth) {
    for _ in 0..12 {
        let site = g.pick_site();
        let (x, y) = site.step(1);
        let len = g.rng.int_below(24) + 12;
        bolt(g, x, y, (site.dx(), site.dy()), len, 0);
    }
    sparks(g, 30, 24, 180.0, 70.0);
}

/// Walk a bolt biased along `(dx, dy)`. Forks spawn shorter bolts one level
/// deeper until the depth limit. Returns the deepest fork level reached.
fn bolt(
    g: &mut Growth,
    mut x: i32,
    mut y: i32,
    (dx, dy): (i32, i32),
    len: i32,
    depth: u32,
) -> u32 {
    let glow = 90.0 - depth as f64 * 25.0;
    let mut deepest = depth;
    for i in 0..len {
        let bright = 210.0 + g.rng.int_below(45) as f64;
        core(g, x, y, bright, glow);

        // favour the outward heading, otherwise zig-zag
        if g.rng.next_f64() < 0.45 {
            x += dx;
            y += dy;
        } else {
            jag(g, &mut x, &mut y);
        }

        if depth < MAX_BRANCH_DEPTH && i > 2 && g.rng.next_f64() > 0.88 {
            let side = g.rng.sign();
            let heading = ((dx - dy * side).signum(), (dy + dx * side).signum());
            let fork_len = ((len - i) / 2).max(3);
            deepest = deepest.max(bolt(g, x, y, heading, fork_len, depth + 1));
        }
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::expand_with_region;
    use crate::effects::transform;
    use crate::pixels::PixelBuffer;
    use crate::rng::SeededRng;

    #[test]
    fn test_tints_are_blue() {
        let [r, _, b] = tint([128, 128, 128]);
        assert!(b > r);
        let [r, _, b] = tint_storm([128, 128, 128]);
        assert!(b > r);
    }

    #[test]
    fn test_bolt_cores_are_solid() {
        let source = PixelBuffer::filled(5, 5, [100, 100, 100, 255]);
        let out = transform(&source, "electric", 42).unwrap();
        let solid =
            out.as_bytes().chunks_exact(4).filter(|px| px[2] == 255 && px[3] >= 250).count();
        assert!(solid > 0);
    }

    #[test]
    fn test_storm_fills_its_wide_margin() {
        let source = PixelBuffer::filled(8, 8, [100, 100, 100, 255]);
        let out = transform(&source, "storm", 5).unwrap();
        assert_eq!(out.width(), 108);
        assert!(out.opaque_count() > 8 * 8 + 50);
    }

    #[test]
    fn test_bolt_forks_stop_at_depth_limit() {
        let source = PixelBuffer::filled(4, 4, [100, 100, 100, 255]);
        let mut reached_limit = false;
        for seed in 0..40 {
            let (canvas, region) = expand_with_region(&source, 50).unwrap();
            let rng = SeededRng::new(seed);
            let mut g = Growth { canvas, rng, sites: Vec::new(), region, seed };
            let deepest = bolt(&mut g, 52, 49, (0, -1), 35, 0);
            assert!(deepest <= MAX_BRANCH_DEPTH, "seed {} forked to depth {}", seed, deepest);
            reached_limit |= deepest == MAX_BRANCH_DEPTH;

            assert_eq!(bolt(&mut g, 52, 49, (0, -1), 35, MAX_BRANCH_DEPTH), MAX_BRANCH_DEPTH);
        }
        assert!(reached_limit);
    }
}
