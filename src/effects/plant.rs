//! Vines, leaves and flowers
//!
//! `plant` grows short wandering vines from any site. `overgrowth` keeps to
//! the silhouette: only sites on the outer edge sprout, and its vines fork
//! recursively (at most [`MAX_BRANCH_DEPTH`] levels) before ending in leaf
//! clusters and stemmed flowers.

use super::{Growth, MAX_BRANCH_DEPTH};
use crate::sampler::{outer_edge_set, EdgeSample};

const PETALS: [[f64; 3]; 4] =
    [[255.0, 100.0, 150.0], [255.0, 200.0, 50.0], [200.0, 100.0, 255.0], [255.0, 150.0, 80.0]];

pub(super) fn tint([r, g, b]: [u8; 3]) -> [f64; 3] {
    [r as f64, (g as f64 * 0.9 + 20.0).min(255.0), b as f64]
}

pub(super) fn grow(g: &mut Growth) {
    for _ in 0..g.budget(20.0, 18.0) {
        let site = g.pick_site();
        wandering_vine(g, site);
    }
    for _ in 0..5 {
        let site = g.pick_site();
        let (fx, fy) = site.step(3);
        let [pr, pg, pb] = PETALS[g.rng.below(PETALS.len())];
        g.canvas.set(fx, fy, 255.0, 230.0, 50.0, 220.0);
        for (ox, oy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            g.canvas.set(fx + ox, fy + oy, pr, pg, pb, 200.0);
        }
    }
}

fn wandering_vine(g: &mut Growth, site: EdgeSample) {
    let (mut vx, mut vy) = site.step(1);
    let len = g.rng.int_below(10) + 4;
    let mut dir = g.rng.sign();
    let vertical = site.dx() != 0;

    for i in 0..len {
        let green = 80.0 + g.rng.int_below(80) as f64;
        let dark = 40.0 + g.rng.int_below(40) as f64;
        g.canvas.set(vx, vy, dark, green, 20.0, 230.0);

        if g.rng.next_f64() > 0.6 && i > 1 {
            let side = g.rng.sign();
            let (lx, ly) = if vertical { (0, side) } else { (side, 0) };
            g.canvas.set(vx + lx, vy + ly, 30.0, green + 30.0, 15.0, 200.0);
            g.canvas.set(vx + lx * 2, vy + ly * 2, 25.0, green + 40.0, 10.0, 160.0);
        }

        if vertical {
            vy += dir;
            if g.rng.next_f64() > 0.6 {
                vx += if site.dx() > 0 { 1 } else { -1 };
            }
        } else {
            vx += dir;
            if g.rng.next_f64() > 0.6 {
                vy += if site.dy() > 0 { 1 } else { -1 };
            }
        }
        if g.rng.next_f64() > 0.8 {
            dir = -dir;
        }
    }
}

pub(super) fn grow_overgrowth(g: &mut Growth) {
    let outer = outer_edge_set(&g.canvas);
    let edges: Vec<EdgeSample> =
        g.sites.iter().filter(|s| outer.contains(&(s.x, s.y))).copied().collect();
    if edges.is_empty() {
        return;
    }

    let vines = (edges.len() as f64 / 12.0).min(24.0).ceil() as usize;
    for _ in 0..vines {
        let site = edges[g.rng.below(edges.len())];
        let len = g.rng.int_below(12) + 6;
        let (x, y) = site.step(1);
        branch(g, x, y, (site.dx(), site.dy()), len, 0);
    }
    for _ in 0..6 {
        let site = edges[g.rng.below(edges.len())];
        stemmed_flower(g, site);
    }
}

/// Grow one vine segment along `(dx, dy)`, forking sideways while `depth`
/// allows. Returns the deepest fork level reached.
fn branch(
    g: &mut Growth,
    mut x: i32,
    mut y: i32,
    (dx, dy): (i32, i32),
    len: i32,
    depth: u32,
) -> u32 {
    let mut deepest = depth;
    for i in 0..len {
        let green = 70.0 + g.rng.int_below(70) as f64;
        let dark = 30.0 + g.rng.int_below(30) as f64;
        g.canvas.set(x, y, dark, green, 18.0, 235.0);

        if i > 0 && g.rng.next_f64() > 0.7 {
            leaf_cluster(g, x, y, (dx, dy), green);
        }
        if depth < MAX_BRANCH_DEPTH && i > 1 && g.rng.next_f64() > 0.85 {
            let side = g.rng.sign();
            let fork = (-dy * side, dx * side);
            let fork_len = (((len - i) as f64) * 0.6).ceil().max(2.0) as i32;
            deepest = deepest.max(branch(g, x + fork.0, y + fork.1, fork, fork_len, depth + 1));
        }

        x += dx;
        y += dy;
        if g.rng.next_f64() > 0.65 {
            let side = g.rng.sign();
            x += dy.abs() * side;
            y += dx.abs() * side;
        }
    }
    deepest
}

fn leaf_cluster(g: &mut Growth, x: i32, y: i32, (dx, dy): (i32, i32), green: f64) {
    let side = g.rng.sign();
    let (px, py) = (-dy * side, dx * side);
    g.canvas.set(x + px, y + py, 30.0, green + 35.0, 15.0, 210.0);
    g.canvas.blend(x + px * 2, y + py * 2, 25.0, green + 45.0, 12.0, 170.0);
    g.canvas.blend(x + px + dx, y + py + dy, 35.0, green + 25.0, 20.0, 150.0);
}

fn stemmed_flower(g: &mut Growth, site: EdgeSample) {
    let stem = g.rng.int_below(3) + 2;
    for i in 1..=stem {
        let (sx, sy) = site.step(i);
        g.canvas.set(sx, sy, 40.0, 110.0, 25.0, 220.0);
    }
    let (fx, fy) = site.step(stem + 1);
    let [pr, pg, pb] = PETALS[g.rng.below(PETALS.len())];
    g.canvas.set(fx, fy, 255.0, 230.0, 50.0, 230.0);
    for (ox, oy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
        g.canvas.blend(fx + ox, fy + oy, pr, pg, pb, 220.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::expand_with_region;
    use crate::effects::transform;
    use crate::pixels::PixelBuffer;
    use crate::rng::SeededRng;

    #[test]
    fn test_tint_only_touches_green() {
        assert_eq!(tint([10, 100, 30]), [10.0, 110.0, 30.0]);
        assert_eq!(tint([0, 255, 0])[1], 249.5);
    }

    #[test]
    fn test_overgrowth_reaches_further_than_plant() {
        let source = PixelBuffer::filled(10, 10, [120, 90, 60, 255]);
        let plant = transform(&source, "plant", 3).unwrap();
        let over = transform(&source, "overgrowth", 3).unwrap();
        assert_eq!(plant.width(), 10 + 32);
        assert_eq!(over.width(), 10 + 60);
        assert!(over.opaque_count() > source.opaque_count());
    }

    #[test]
    fn test_flowers_have_yellow_centers() {
        let source = PixelBuffer::filled(6, 6, [120, 90, 60, 255]);
        let out = transform(&source, "plant", 11).unwrap();
        let bytes = out.as_bytes();
        let centers = bytes.chunks_exact(4).filter(|px| px[..] == [255u8, 230, 50, 220]).count();
        assert!(centers >= 1);
    }

    #[test]
    fn test_overgrowth_starts_only_from_boundary_sites() {
        // Interior samples never seed vines, so the core of a large sprite
        // keeps its tinted color.
        let source = PixelBuffer::filled(60, 60, [120, 90, 60, 255]);
        let core = [120, 101, 60, 255];
        for seed in 1..=10 {
            let out = transform(&source, "overgrowth", seed).unwrap();
            for y in 20..40 {
                for x in 20..40 {
                    assert_eq!(out.get(x + 30, y + 30), core, "seed {} at ({}, {})", seed, x, y);
                }
            }
        }
    }

    #[test]
    fn test_branch_forks_stop_at_depth_limit() {
        let source = PixelBuffer::filled(4, 4, [120, 90, 60, 255]);
        let mut reached_limit = false;
        for seed in 0..40 {
            let (canvas, region) = expand_with_region(&source, 30).unwrap();
            let rng = SeededRng::new(seed);
            let mut g = Growth { canvas, rng, sites: Vec::new(), region, seed };
            let deepest = branch(&mut g, 30, 29, (0, -1), 40, 0);
            assert!(deepest <= MAX_BRANCH_DEPTH, "seed {} forked to depth {}", seed, deepest);
            reached_limit |= deepest == MAX_BRANCH_DEPTH;

            assert_eq!(branch(&mut g, 30, 29, (0, -1), 40, MAX_BRANCH_DEPTH), MAX_BRANCH_DEPTH);
        }
        assert!(reached_limit);
    }
}
