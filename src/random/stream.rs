use crate::foundation::core::Seed;

/// Deterministic 32-bit mulberry stream.
///
/// Each draw advances a single `u32` of state; output is bit-identical to the JavaScript
/// `mulberry32` generator for the same seed, so layouts shared from a browser regenerate exactly.
/// One instance belongs to one computation: construct it, drain what you need, drop it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Weyl increment added to the state before every draw.
    pub const INCREMENT: u32 = 0x6D2B_79F5;

    const TWO_POW_32: f64 = 4_294_967_296.0;

    /// Build a stream from anything convertible into a [`Seed`].
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            state: seed.into().0,
        }
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Next sample in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::TWO_POW_32
    }

    /// Uniform index in `0..bound` computed as `floor(next_f64() * bound)`.
    ///
    /// Returns 0 without drawing when `bound` is 0.
    pub fn next_index(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let idx = (self.next_f64() * bound as f64).floor() as usize;
        idx.min(bound - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/stream.rs"]
mod tests;
