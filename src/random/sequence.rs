use crate::{foundation::core::Seed, random::stream::SeededStream};

/// Fractional part of the golden ratio, the irrational step of the sequence.
///
/// The browser build writes this as `0.618033988749895`, which rounds one ULP higher, so
/// sequence values can differ from it in their last bits.
pub const GOLDEN_RATIO_FRAC: f64 = 0.618_033_988_749_894_9;

/// Lazy golden-ratio sequence over `[min, max)`.
///
/// The phase is drawn from the stream once at construction; every later value is a fixed step
/// away from the previous one, so consecutive outputs never land close together.
#[derive(Clone, Copy, Debug)]
pub struct GoldenSequence {
    current: f64,
    min: f64,
    span: f64,
}

impl GoldenSequence {
    /// Draw the phase from `stream` and start a sequence scaled to `[min, max)`.
    pub fn new(stream: &mut SeededStream, min: f64, max: f64) -> Self {
        Self {
            current: stream.next_f64(),
            min,
            span: max - min,
        }
    }
}

impl Iterator for GoldenSequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.current = (self.current + GOLDEN_RATIO_FRAC) % 1.0;
        Some(self.min + self.current * self.span)
    }
}

/// `count` evenly spread values in `[min, max)` from a fresh stream seeded with `seed`.
pub fn golden_sequence(seed: impl Into<Seed>, count: usize, min: f64, max: f64) -> Vec<f64> {
    let mut stream = SeededStream::new(seed);
    golden_sequence_from(&mut stream, count, min, max)
}

/// Same as [`golden_sequence`] but continues an existing stream.
///
/// One phase draw is consumed even when `count` is 0.
pub fn golden_sequence_from(
    stream: &mut SeededStream,
    count: usize,
    min: f64,
    max: f64,
) -> Vec<f64> {
    GoldenSequence::new(stream, min, max).take(count).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/random/sequence.rs"]
mod tests;
