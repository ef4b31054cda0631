//! Injectable randomness. Effect builders take `&mut dyn RandomSource` so
//! tests can replay exact sequences.

use rand::RngCore;

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn between(&mut self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }

    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

impl<R: RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        // 53 random mantissa bits, same construction as `rand`'s standard f64.
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Picks one element uniformly. Empty arrays are rejected at compile time.
pub fn pick<'a, T, const N: usize>(rng: &mut dyn RandomSource, items: &'a [T; N]) -> &'a T {
    const { assert!(N > 0, "pick needs at least one item") };
    &items[rng.index(N)]
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct Scripted {
    values: Vec<f64>,
    cursor: usize,
}

impl Scripted {
    /// An empty script behaves like `constant(0.0)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for Scripted {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
