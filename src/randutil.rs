//! The random-number collaborator used by every sampling routine.
//!
//! Nothing in this crate keeps a global generator: callers hand a `&mut impl RandomSource` to
//! each operation, which keeps seeded runs reproducible and lets tests script the draws.
use oorandom::Rand64;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed numbers.
pub trait RandomSource {
    /// A real number in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// An integer in `[0, bound)`. `bound` must be at least 1.
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound >= 1);
        let idx = (self.next_uniform() * bound as f64) as usize;
        // Rounding can push u * bound up to bound for u close to 1.
        idx.min(bound - 1)
    }
}

impl RandomSource for Rand64 {
    fn next_uniform(&mut self) -> f64 {
        self.rand_float()
    }
    fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound >= 1);
        self.rand_range(0..bound as u64) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Deterministic generator for a given seed.
pub fn seeded(seed: u64) -> Rand64 {
    Rand64::new(seed.into())
}

/// Generator seeded from the system clock; for callers that do not care about reproducibility.
pub fn from_time() -> Rand64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0xdeadbeef);
    Rand64::new(nanos)
}

/// Replays a fixed list of uniform draws, cycling when it runs out.
///
/// Integer draws go through the default `floor(u * bound)` mapping, so a script of
/// `[0.0, 0.5, 0.99]` against a bound of 4 yields `0, 2, 3`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    /// Values outside `[0, 1)` are clamped into it.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        let values = values
            .into_iter()
            .map(|v: f64| v.max(0.0).min(1.0 - f64::EPSILON))
            .collect();
        Self {
            values,
            position: 0,
        }
    }
    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let v = self.values[self.position % self.values.len()];
        self.position += 1;
        v
    }
}
