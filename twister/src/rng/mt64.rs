//! MT19937-64 Mersenne Twister engine
//!
//! The 64-bit Mersenne Twister of Matsumoto and Nishimura, using the
//! published reference constants so output is bit-compatible with
//! `init_genrand64` / `genrand64_int64`.
//!
//! # Algorithm
//!
//! The engine owns a fixed block of 312 words. Every 312 draws the whole
//! block is regenerated in place ("twist"), and each word handed out is
//! passed through a tempering transform first.
//!
//! # Determinism
//!
//! Same seed → same sequence of values, forever. Seeding never fails:
//! any `i64` is accepted and used as a raw bit pattern.

use std::fmt;

/// Number of 64-bit words in the state vector
pub const STATE_WORDS: usize = 312;

/// Middle-word offset used by the twist
const MIDDLE_WORD: usize = 156;

const SEED_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;

/// Most significant 33 bits
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
/// Least significant 31 bits
const LOWER_MASK: u64 = 0x0000_0000_7FFF_FFFF;

const TEMPER_D: u64 = 0x5555_5555_5555_5555;
const TEMPER_B: u64 = 0x71D6_7FFF_EDA6_0000;
const TEMPER_C: u64 = 0xFFF7_EEE0_0000_0000;

/// 2^-53, one ulp of a double in [0, 1)
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;
/// 2^-24, one ulp of a float in [0, 1)
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Deterministic MT19937-64 generator
///
/// Not thread-safe: every draw takes `&mut self`. Give each thread its
/// own engine, or serialize access externally.
///
/// # Example
/// ```
/// use mersenne_twister_rs::Engine;
///
/// let mut rng = Engine::new(5489);
/// assert_eq!(rng.next_raw(), 14514284786278117030);
///
/// let unit = rng.next_f64();
/// assert!((0.0..1.0).contains(&unit));
/// ```
#[derive(Clone)]
pub struct Engine {
    /// State vector, always exactly `STATE_WORDS` long
    state: [u64; STATE_WORDS],

    /// Next word to serve. `STATE_WORDS` means the block is spent and
    /// the next draw twists first.
    cursor: usize,
}

impl Engine {
    /// Create a new engine from a seed
    ///
    /// Negative seeds are fine; the two's complement bit pattern becomes
    /// `state[0]`. A 32-bit seed should be widened with `i64::from`, which
    /// sign-extends.
    ///
    /// The cursor starts past the end of the block, so the first draw
    /// performs the initial twist.
    ///
    /// # Example
    /// ```
    /// use mersenne_twister_rs::Engine;
    ///
    /// let rng = Engine::new(-7);
    /// assert_eq!(rng.cursor(), mersenne_twister_rs::STATE_WORDS);
    /// ```
    pub fn new(seed: i64) -> Self {
        tracing::debug!(seed, "seeding MT19937-64 engine");
        Self {
            state: seed_state(seed as u64),
            cursor: STATE_WORDS,
        }
    }

    /// Index of the next state word to be served, in `[0, STATE_WORDS]`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Generate the next tempered 64-bit word
    ///
    /// This is the only operation that advances the engine; every other
    /// conversion is built on it.
    pub fn next_raw(&mut self) -> u64 {
        if self.cursor >= STATE_WORDS {
            tracing::trace!("state block spent, twisting");
            twist(&mut self.state);
            self.cursor = 0;
        }

        let word = self.state[self.cursor];
        self.cursor += 1;
        temper(word)
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Uses the top 53 bits of one raw draw.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_raw() >> 11) as f64 * DOUBLE_UNIT
    }

    /// Generate random f32 in range [0.0, 1.0)
    ///
    /// Uses the top 24 bits of one raw draw.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_raw() >> 40) as f32 * FLOAT_UNIT
    }

    /// Low 32 bits of one raw draw, reinterpreted as signed
    pub fn next_i32(&mut self) -> i32 {
        self.next_raw() as i32
    }

    /// One raw draw reinterpreted as signed
    pub fn next_i64(&mut self) -> i64 {
        self.next_raw() as i64
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Fill a fresh state block from `seed` (reference `init_genrand64`)
fn seed_state(seed: u64) -> [u64; STATE_WORDS] {
    let mut state = [0u64; STATE_WORDS];
    state[0] = seed;
    for i in 1..STATE_WORDS {
        let prev = state[i - 1];
        state[i] = SEED_MULTIPLIER
            .wrapping_mul(prev ^ (prev >> 62))
            .wrapping_add(i as u64);
    }
    state
}

/// Regenerate the whole block in place
///
/// Later positions read words already rewritten earlier in the same
/// pass (`i + MIDDLE_WORD` wraps into the new generation), so the loop
/// order is part of the algorithm.
fn twist(state: &mut [u64; STATE_WORDS]) {
    for i in 0..STATE_WORDS {
        let x = (state[i] & UPPER_MASK) | (state[(i + 1) % STATE_WORDS] & LOWER_MASK);
        let mut x_a = x >> 1;
        if x & 1 == 1 {
            x_a ^= MATRIX_A;
        }
        state[i] = state[(i + MIDDLE_WORD) % STATE_WORDS] ^ x_a;
    }
}

fn temper(mut y: u64) -> u64 {
    y ^= (y >> 29) & TEMPER_D;
    y ^= (y << 17) & TEMPER_B;
    y ^= (y << 37) & TEMPER_C;
    y ^ (y >> 43)
}
