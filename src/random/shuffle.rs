use crate::{foundation::core::Seed, random::stream::SeededStream};

/// Fisher-Yates over `items`, walking `i` from the end down to 1.
pub fn shuffle_in_place<T>(items: &mut [T], stream: &mut SeededStream) {
    for i in (1..items.len()).rev() {
        let j = stream.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Seeded permutation of `items`; the input is left untouched.
pub fn shuffle<T: Clone>(items: &[T], seed: impl Into<Seed>) -> Vec<T> {
    let mut out = items.to_vec();
    let mut stream = SeededStream::new(seed);
    shuffle_in_place(&mut out, &mut stream);
    out
}

/// First `count` items of [`shuffle`]. Never pads: asking for more yields the whole permutation.
pub fn pick<T: Clone>(items: &[T], count: usize, seed: impl Into<Seed>) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    let mut out = shuffle(items, seed);
    out.truncate(count);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/random/shuffle.rs"]
mod tests;
