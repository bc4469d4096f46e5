//! xorshift64* generator used for every die roll
//!
//! Same seed → same sequence of faces. Games seeded from entropy record the
//! seed they started from so a surprising run can be replayed.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use montecarlo_core_rs::DiceRng;
///
/// let mut rng = DiceRng::new(12345);
/// let u = rng.next_f64();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRng {
    state: u64,
}

impl DiceRng {
    /// Create a generator from a seed. A zero seed is mapped to 1
    /// because xorshift never leaves the all-zero state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a generator seeded from the random bits of a v4 UUID.
    pub fn from_entropy() -> Self {
        let (hi, lo) = uuid::Uuid::new_v4().as_u64_pair();
        Self::new(hi ^ lo.rotate_left(32))
    }

    /// Restore a generator from a value previously returned by [`DiceRng::state`].
    pub fn from_state(state: u64) -> Self {
        Self::new(state)
    }

    /// Current internal state, for checkpointing.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform f64 in [0.0, 1.0) built from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Pick an index with probability proportional to `weights[i]`.
    ///
    /// Weights are divided by the largest one before summing, so finite
    /// weights near `f64::MAX` do not overflow the total. Returns `None` when
    /// there is no positive finite weight. Zero-weight entries are never
    /// selected.
    ///
    /// # Example
    /// ```
    /// use montecarlo_core_rs::DiceRng;
    ///
    /// let mut rng = DiceRng::new(7);
    /// let idx = rng.weighted_index(&[0.0, 3.0, 0.0]);
    /// assert_eq!(idx, Some(1));
    /// ```
    pub fn weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let max = weights.iter().copied().fold(0.0, f64::max);
        if !(max > 0.0 && max.is_finite()) {
            return None;
        }

        let total: f64 = weights.iter().map(|&w| w / max).sum();
        let target = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (idx, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight / max;
            if target < cumulative {
                return Some(idx);
            }
        }

        // Rounding can leave target just past the final partial sum
        weights.iter().rposition(|&w| w > 0.0)
    }
}
