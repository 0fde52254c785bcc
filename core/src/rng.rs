//! Deterministic random number generation.
//!
//! RULE: Nothing in the pipeline may call any platform RNG.
//! All randomness flows through GeneratorRng instances derived
//! from the single master seed supplied for the run.
//!
//! Each generation stage gets its own RNG stream, seeded deterministically
//! from (master_seed XOR stage_slot). This means:
//!   - Adding a new stage never changes existing stages' streams.
//!   - Each stage's stream is fully reproducible in isolation.
//!
//! Weighted tables are ordered slices rather than hash maps so that
//! iteration order can never perturb a stream.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generation stage.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a stage RNG from the master seed and a stable stage slot.
    /// The slot must never change once assigned.
    pub fn new(master_seed: u64, stage_slot: u64) -> Self {
        let derived_seed = master_seed ^ (stage_slot.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll an i64 in [lo, hi] inclusive.
    pub fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        lo + self.next_u64_below((hi - lo + 1) as u64) as i64
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn float_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick an index from an ordered weight slice. Zero-weight entries are
    /// never picked unless every weight is zero, in which case the last
    /// index is returned.
    pub fn weighted_index(&mut self, weights: &[u32]) -> usize {
        assert!(!weights.is_empty(), "weighted_index on empty slice");
        let total: u64 = weights.iter().map(|w| *w as u64).sum();
        if total == 0 {
            return weights.len() - 1;
        }
        let mut roll = self.next_u64_below(total);
        for (i, w) in weights.iter().enumerate() {
            let w = *w as u64;
            if roll < w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }

    /// Pick a uniformly random element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "choose on empty slice");
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Draw k distinct indices from [0, n) via a partial Fisher-Yates
    /// shuffle. The result preserves draw order; sort it if a canonical
    /// order is needed.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let k = k.min(n);
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = i + self.next_u64_below((n - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}

/// All stage RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stage(&self, slot: StageSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Account = 0,
    Contact = 1,
    Deal = 2,
    Activity = 3,
    // Add new stages here — append only.
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Contact => "contact",
            Self::Deal => "deal",
            Self::Activity => "activity",
        }
    }
}
