//! Random sources for opponent strategies.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Shareable**: `SeededRandom` guards one generator for concurrent callers
//! - **Scriptable**: `ScriptedRandom` replays queued draws for tests
//!
//! Seeded reproducibility only holds for a single sequential caller. Concurrent
//! callers interleave draws in whatever order they take the lock.
//!
//! ```
//! use rps_wager::core::{RandomSource, SeededRandom};
//!
//! let a = SeededRandom::new(42);
//! let b = SeededRandom::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_range(0..3), b.next_range(0..3));
//! }
//! ```

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::Move;

/// Capability supplying uniform draws to opponent strategies.
///
/// Implementations take `&self` and guard their own state, so one source can be
/// shared by every strategy in a registry.
pub trait RandomSource: Send + Sync {
    /// Uniform double in `[0, 1)`.
    fn next_f64(&self) -> f64;

    /// Uniform integer in the half-open `range`.
    fn next_range(&self, range: Range<i32>) -> i32;

    /// Uniform move.
    fn next_move(&self) -> Move {
        Move::ALL[self.next_range(0..3).rem_euclid(3) as usize]
    }
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random double in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random integer in the given range.
    ///
    /// An empty range yields its start rather than panicking.
    pub fn gen_range(&mut self, range: Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }
}

/// A `GameRng` behind a mutex, shared across strategies.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<GameRng>,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }

    fn lock(&self) -> MutexGuard<'_, GameRng> {
        // A panic mid-draw cannot leave the generator inconsistent.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.lock().gen_f64()
    }

    fn next_range(&self, range: Range<i32>) -> i32 {
        self.lock().gen_range(range)
    }
}

/// Replays queued draws in order.
///
/// When a queue runs dry, doubles default to `0.0` and integers to the start
/// of the requested range. Queued integers are returned as-is, even outside
/// the requested range.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    doubles: Mutex<VecDeque<f64>>,
    ints: Mutex<VecDeque<i32>>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a double for the next `next_f64` call.
    #[must_use]
    pub fn with_double(self, value: f64) -> Self {
        self.push_double(value);
        self
    }

    /// Queue an integer for the next `next_range` call.
    #[must_use]
    pub fn with_int(self, value: i32) -> Self {
        self.push_int(value);
        self
    }

    pub fn push_double(&self, value: f64) {
        self.doubles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(value);
    }

    pub fn push_int(&self, value: i32) {
        self.ints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(value);
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&self) -> f64 {
        self.doubles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(0.0)
    }

    fn next_range(&self, range: Range<i32>) -> i32 {
        self.ints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(range.start)
    }
}
