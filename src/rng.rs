//! Seeded random stream shared by the phases of one transformation
//!
//! The generator is mulberry32: a single 32-bit state advanced by a fixed
//! integer mixing step. All arithmetic is wrapping `u32`, and the final
//! division by 2^32 is exact in `f64`, so a given seed yields the same
//! sequence on every platform.
//!
//! A [`SeededRng`] is created at the start of each invocation and handed to
//! each phase by `&mut`. The order in which phases draw from it is part of
//! the output contract.

/// Deterministic generator of floats in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a stream from an integer seed, taken modulo 2^32.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// `floor(next * n)`, an index in `0..n` for `n > 0`.
    #[inline]
    pub fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64).floor() as usize
    }

    /// `floor(next * n)` as a signed offset, for coordinate and color jitter.
    #[inline]
    pub fn int_below(&mut self, n: i32) -> i32 {
        (self.next_f64() * n as f64).floor() as i32
    }

    /// 50/50 choice between `1` and `-1`, drawn as `next > 0.5`.
    #[inline]
    pub fn sign(&mut self) -> i32 {
        if self.next_f64() > 0.5 {
            1
        } else {
            -1
        }
    }
}
