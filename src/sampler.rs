//! Growth site sampling
//!
//! [`sample_edges`] scans a canvas row-major (y outer, x inner) and emits
//! one [`EdgeSample`] per empty cardinal neighbour of each opaque pixel.
//! Opaque pixels with no empty neighbour emit a single interior sample whose
//! direction is drawn from the shared stream. Neighbours are always tested
//! in [`CARDINALS`] order.
//!
//! Both orders are observable: they fix which rng draws land on which pixel
//! and the order in which growth passes visit the sites.

use std::collections::HashSet;

use crate::pixels::PixelBuffer;
use crate::rng::SeededRng;

/// One of the four axis-aligned unit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Neighbour test order: left, right, up, down.
pub const CARDINALS: [Direction; 4] =
    [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

impl Direction {
    #[inline]
    pub fn dx(self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up | Direction::Down => 0,
        }
    }

    #[inline]
    pub fn dy(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => 0,
        }
    }

    /// Whether the direction runs along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.dy() == 0
    }
}

/// A site where growth may originate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSample {
    pub x: i32,
    pub y: i32,
    pub dir: Direction,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    /// `true` when `dir` leads to an empty neighbour.
    pub is_boundary: bool,
}

impl EdgeSample {
    #[inline]
    pub fn dx(&self) -> i32 {
        self.dir.dx()
    }

    #[inline]
    pub fn dy(&self) -> i32 {
        self.dir.dy()
    }

    /// Position `steps` pixels away along the sample direction.
    #[inline]
    pub fn step(&self, steps: i32) -> (i32, i32) {
        (self.x + self.dx() * steps, self.y + self.dy() * steps)
    }
}

/// Collect growth sites from every opaque pixel of `canvas`.
///
/// Consumes one draw from `rng` per interior pixel, in scan order. A canvas
/// without opaque pixels yields an empty list and draws nothing.
pub fn sample_edges(canvas: &PixelBuffer, rng: &mut SeededRng) -> Vec<EdgeSample> {
    let mut samples = Vec::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if !canvas.is_opaque(x, y) {
                continue;
            }
            let [r, g, b, a] = canvas.get(x, y);
            let before = samples.len();
            for dir in CARDINALS {
                if canvas.is_empty(x + dir.dx(), y + dir.dy()) {
                    samples.push(EdgeSample { x, y, dir, r, g, b, a, is_boundary: true });
                }
            }
            if samples.len() == before {
                let dir = CARDINALS[rng.below(CARDINALS.len())];
                samples.push(EdgeSample { x, y, dir, r, g, b, a, is_boundary: false });
            }
        }
    }
    samples
}

/// Positions of opaque pixels that touch at least one empty neighbour.
pub fn outer_edge_set(canvas: &PixelBuffer) -> HashSet<(i32, i32)> {
    let mut set = HashSet::new();
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.is_opaque(x, y)
                && CARDINALS.iter().any(|d| canvas.is_empty(x + d.dx(), y + d.dy()))
            {
                set.insert((x, y));
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::filled(width, height, [200, 100, 50, 255])
    }

    #[test]
    fn test_single_pixel_emits_four_boundary_samples() {
        let mut rng = SeededRng::new(1);
        let samples = sample_edges(&solid(1, 1), &mut rng);
        let dirs: Vec<_> = samples.iter().map(|s| s.dir).collect();
        assert_eq!(dirs, CARDINALS.to_vec());
        assert!(samples.iter().all(|s| s.is_boundary));
        // no interior pixel, so the stream is untouched
        assert_eq!(rng, SeededRng::new(1));
    }

    #[test]
    fn test_interior_pixel_draws_one_direction() {
        let canvas = solid(3, 3);
        let mut rng = SeededRng::new(42);
        let samples = sample_edges(&canvas, &mut rng);

        let interior: Vec<_> = samples.iter().filter(|s| !s.is_boundary).collect();
        assert_eq!(interior.len(), 1);
        assert_eq!((interior[0].x, interior[0].y), (1, 1));
        // first draw for seed 42 is 0.6011..., floor(* 4) = 2 -> Up
        assert_eq!(interior[0].dir, Direction::Up);

        let mut expected = SeededRng::new(42);
        expected.next_f64();
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_sample_counts_on_block() {
        // 3x3 block: corners 2 each, edges 1 each, center 1 interior
        let samples = sample_edges(&solid(3, 3), &mut SeededRng::new(0));
        assert_eq!(samples.len(), 4 * 2 + 4 + 1);
    }

    #[test]
    fn test_row_major_order() {
        let samples = sample_edges(&solid(2, 2), &mut SeededRng::new(0));
        let positions: Vec<_> = samples.iter().map(|s| (s.x, s.y)).collect();
        let mut sorted = positions.clone();
        sorted.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(positions, sorted);
        assert_eq!(samples[0].dir, Direction::Left);
        assert_eq!(samples[1].dir, Direction::Up);
    }

    #[test]
    fn test_threshold_alpha_counts_as_empty() {
        let mut data = vec![0u8; 2 * 4];
        data[..4].copy_from_slice(&[9, 9, 9, 21]);
        data[4..].copy_from_slice(&[9, 9, 9, 20]);
        let canvas = PixelBuffer::from_rgba(2, 1, data).unwrap();
        let samples = sample_edges(&canvas, &mut SeededRng::new(3));
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.x == 0));
        assert!(samples.iter().any(|s| s.dir == Direction::Right));
    }

    #[test]
    fn test_empty_canvas_yields_nothing() {
        let mut rng = SeededRng::new(8);
        assert!(sample_edges(&PixelBuffer::new(5, 5), &mut rng).is_empty());
        assert_eq!(rng, SeededRng::new(8));
    }

    #[test]
    fn test_samples_carry_pixel_color() {
        let samples = sample_edges(&solid(1, 1), &mut SeededRng::new(0));
        let s = samples[0];
        assert_eq!([s.r, s.g, s.b, s.a], [200, 100, 50, 255]);
        assert_eq!(s.step(3), (-3, 0));
    }

    #[test]
    fn test_outer_edge_set_excludes_interior() {
        let set = outer_edge_set(&solid(3, 3));
        assert_eq!(set.len(), 8);
        assert!(!set.contains(&(1, 1)));
        assert!(set.contains(&(0, 0)));
    }
}
