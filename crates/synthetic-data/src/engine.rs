//! Seeded pseudorandom engine.
//!
//! The engine is a 32-bit Mersenne Twister (MT19937). Its output for a given
//! seed is identical on every platform, which lets tests pin golden values.
//! It is fast and well mixed but not cryptographically secure.

use std::fmt;

use rand::RngCore;
use rand::rand_core::impls;

use crate::error::ConfigurationError;
use crate::seed::Seed;

/// Number of words in the state vector.
const STATE_LEN: usize = 624;

/// Twist offset.
const SHIFT: usize = 397;

const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Seed used by [`Engine::default`], the reference implementation's default.
pub const DEFAULT_SEED: u32 = 5489;

/// Seed used to prime the state before mixing in a key sequence.
const SEQUENCE_PRIMER: u32 = 19_650_218;

/// Deterministic pseudorandom engine.
///
/// Two engines with the same seed history and the same number of draws
/// produce identical output forever. [`Engine::fork`] yields a value copy
/// that advances independently of the original.
///
/// # Example
///
/// ```
/// use synthetic_data::{Engine, Seed};
///
/// let mut engine = Engine::with_seed(1);
/// assert_eq!(engine.next_u32(), 1_791_095_845);
///
/// engine.seed(&Seed::Single(1)).expect("non-empty seed");
/// assert_eq!(engine.next_u32(), 1_791_095_845);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Engine {
    state: [u32; STATE_LEN],
    cursor: usize,
    draws: u64,
}

impl Engine {
    /// Creates an engine seeded with a single value.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        let mut engine = Self {
            state: [0; STATE_LEN],
            cursor: STATE_LEN,
            draws: 0,
        };
        engine.seed_single(seed);
        engine
    }

    /// Resets the engine from `seed`.
    ///
    /// The new state depends only on `seed`, never on prior state, and the
    /// draw counter returns to zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::EmptySeedSequence`] if `seed` is an empty
    /// sequence. The engine is left untouched in that case.
    pub fn seed(&mut self, seed: &Seed) -> Result<(), ConfigurationError> {
        match seed {
            Seed::Single(value) => self.seed_single(*value),
            Seed::Sequence(keys) => {
                if keys.is_empty() {
                    return Err(ConfigurationError::EmptySeedSequence);
                }
                self.seed_sequence(keys);
            }
        }
        Ok(())
    }

    /// Resets the engine from a single seed value.
    #[expect(
        clippy::indexing_slicing,
        reason = "indices are bounded by the fixed state length"
    )]
    pub fn seed_single(&mut self, seed: u32) {
        self.state[0] = seed;
        let mut offset: u32 = 1;
        for index in 1..STATE_LEN {
            let previous = self.state[index - 1];
            self.state[index] = 1_812_433_253_u32
                .wrapping_mul(previous ^ (previous >> 30))
                .wrapping_add(offset);
            offset += 1;
        }
        self.cursor = STATE_LEN;
        self.draws = 0;
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices are bounded by the fixed state length and key length"
    )]
    fn seed_sequence(&mut self, keys: &[u32]) {
        self.seed_single(SEQUENCE_PRIMER);

        let mut index = 1;
        let mut key_index = 0;
        let mut key_offset: u32 = 0;
        for _ in 0..STATE_LEN.max(keys.len()) {
            let previous = self.state[index - 1];
            self.state[index] = (self.state[index]
                ^ (previous ^ (previous >> 30)).wrapping_mul(1_664_525))
            .wrapping_add(keys[key_index])
            .wrapping_add(key_offset);
            index += 1;
            key_index += 1;
            key_offset = key_offset.wrapping_add(1);
            if index >= STATE_LEN {
                self.state[0] = self.state[STATE_LEN - 1];
                index = 1;
            }
            if key_index >= keys.len() {
                key_index = 0;
                key_offset = 0;
            }
        }

        for _ in 1..STATE_LEN {
            let previous = self.state[index - 1];
            let position = u32::try_from(index).unwrap_or(u32::MAX);
            self.state[index] = (self.state[index]
                ^ (previous ^ (previous >> 30)).wrapping_mul(1_566_083_941))
            .wrapping_sub(position);
            index += 1;
            if index >= STATE_LEN {
                self.state[0] = self.state[STATE_LEN - 1];
                index = 1;
            }
        }

        self.state[0] = UPPER_MASK;
        self.cursor = STATE_LEN;
        self.draws = 0;
    }

    /// Produces the next 32-bit value in the sequence.
    #[expect(
        clippy::indexing_slicing,
        reason = "the cursor is kept below the state length by twist"
    )]
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= STATE_LEN {
            self.twist();
        }
        let mut value = self.state[self.cursor];
        self.cursor += 1;
        self.draws += 1;

        value ^= value >> 11;
        value ^= (value << 7) & 0x9d2c_5680;
        value ^= (value << 15) & 0xefc6_0000;
        value ^= value >> 18;
        value
    }

    /// Produces a float in `[0, 1)` with 53-bit resolution from two draws.
    #[expect(
        clippy::float_arithmetic,
        reason = "combining two draws into a float is the purpose of this method"
    )]
    pub fn next_f64(&mut self) -> f64 {
        let high = f64::from(self.next_u32() >> 5);
        let low = f64::from(self.next_u32() >> 6);
        (high * 67_108_864.0 + low) / 9_007_199_254_740_992.0
    }

    /// Returns a copy of this engine that advances independently.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Returns the number of values drawn since the last seed.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "indices are bounded by the fixed state length"
    )]
    fn twist(&mut self) {
        for index in 0..STATE_LEN {
            let next = if index + 1 == STATE_LEN { 0 } else { index + 1 };
            let source = if index + SHIFT >= STATE_LEN {
                index + SHIFT - STATE_LEN
            } else {
                index + SHIFT
            };
            let mixed = (self.state[index] & UPPER_MASK) | (self.state[next] & LOWER_MASK);
            let feedback = if mixed & 1 == 0 { 0 } else { MATRIX_A };
            self.state[index] = self.state[source] ^ (mixed >> 1) ^ feedback;
        }
        self.cursor = 0;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("cursor", &self.cursor)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}

impl RngCore for Engine {
    fn next_u32(&mut self) -> u32 {
        Self::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
