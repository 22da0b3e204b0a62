//! RNG oracle for deterministic random number generation.
//!
//! Every random decision of an encounter (party size, candidate draws, herd
//! sizes, target picks, accuracy and flee rolls) goes through [`RngOracle`].
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. Encounters are
//! replayable from their seed, which is what makes them testable.

use std::sync::atomic::{AtomicUsize, Ordering};

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentage in `0..100`.
    ///
    /// Chance checks succeed when the roll is strictly below the chance.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
/// - Implementation based on PCG-XSH-RR variant
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Seeds are ignored. Meant for tests and scripted encounters where each
/// roll must be chosen by hand.
#[derive(Debug, Default)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for SequenceRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}

/// Compute deterministic seed from encounter components.
///
/// # Arguments
///
/// * `game_seed` - Base seed of the encounter (for replay/determinism)
/// * `nonce` - Roll sequence number (increments each roll)
/// * `actor_id` - Unit the roll is made for
/// * `context` - What the roll decides, see [`RollKind`]
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // Mix all inputs using simple hash combiners
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// What a roll decides. Used as the `context` input of [`compute_seed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollKind {
    PartySize = 0,
    DangerBonus = 1,
    Candidate = 2,
    Acceptance = 3,
    Herd = 4,
    Targeting = 5,
    Accuracy = 6,
    Flee = 7,
}

/// Seeded stream of rolls over an [`RngOracle`].
///
/// Each roll consumes one nonce, so the n-th roll of an encounter depends
/// only on the seed, `n`, the unit and the roll kind.
pub struct RollStream<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    nonce: u64,
}

impl<'a> RollStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            nonce: 0,
        }
    }

    /// Number of rolls made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, actor_id: u32, kind: RollKind) -> u64 {
        let seed = compute_seed(self.seed, self.nonce, actor_id, kind as u32);
        self.nonce += 1;
        seed
    }

    /// Percentage roll in `0..100`.
    pub fn percent(&mut self, actor_id: u32, kind: RollKind) -> u32 {
        let seed = self.next_seed(actor_id, kind);
        self.rng.roll_percent(seed)
    }

    /// True with probability `chance` percent.
    pub fn chance(&mut self, actor_id: u32, kind: RollKind, chance: u32) -> bool {
        self.percent(actor_id, kind) < chance
    }

    /// Uniform value in `[min, max]`.
    pub fn range(&mut self, actor_id: u32, kind: RollKind, min: u32, max: u32) -> u32 {
        let seed = self.next_seed(actor_id, kind);
        self.rng.range(seed, min, max)
    }

    /// Uniform index in `0..len`; `len` must be non-zero.
    pub fn index(&mut self, actor_id: u32, kind: RollKind, len: usize) -> usize {
        let max = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.range(actor_id, kind, 0, max) as usize
    }
}
