//! Index sources used to pick the next target.

use rand::Rng;

/// Produces uniformly distributed indices in `0..len`.
pub trait IndexSource {
    /// Returns 0 when `len` is zero; callers treat that as "nothing to pick".
    fn next_index(&mut self, len: usize) -> usize;
}

/// Thread-local `rand` generator (seeded from `crypto.getRandomValues` in the browser).
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl IndexSource for OsRandom {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed list of indices (wrapped modulo `len`), cycling forever.
#[derive(Clone, Debug)]
pub struct Sequence {
    values: Vec<usize>,
    pos: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self { values: values.into(), pos: 0 }
    }
}

impl IndexSource for Sequence {
    fn next_index(&mut self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v % len
    }
}
