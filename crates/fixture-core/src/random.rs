//! Random source adapter.
//!
//! Every generator draws from one [`RandomSource`] owned by its fixture.
//! [`SeededRandom`] wraps a seeded `StdRng` behind a mutex so individual
//! draws are atomic even if a fixture is shared across threads; the order
//! of draws, and therefore determinism, is only guaranteed for
//! single-threaded use.
//!
//! All bounded draws use half-open `[from, to)` ranges.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Uniform draws used by generators.
///
/// Identical seeds must yield identical outputs for identical call
/// sequences.
///
/// # Panics
///
/// Bounded draws panic when the range is empty (`from >= to` or
/// `bound <= 0`), the same way `rand`'s `random_range` does.
pub trait RandomSource: Send + Sync {
    /// Draw a uniformly distributed boolean.
    fn next_bool(&self) -> bool;

    /// Draw any `i32`.
    fn next_int(&self) -> i32;

    /// Draw an `i32` in `[0, bound)`.
    fn next_int_bounded(&self, bound: i32) -> i32 {
        self.next_int_range(0, bound)
    }

    /// Draw an `i32` in `[from, to)`.
    fn next_int_range(&self, from: i32, to: i32) -> i32;

    /// Draw any `i64`.
    fn next_long(&self) -> i64;

    /// Draw an `i64` in `[0, bound)`.
    fn next_long_bounded(&self, bound: i64) -> i64 {
        self.next_long_range(0, bound)
    }

    /// Draw an `i64` in `[from, to)`.
    fn next_long_range(&self, from: i64, to: i64) -> i64;

    /// Draw an `f32` in `[0, 1)`.
    fn next_float(&self) -> f32;

    /// Draw an `f64` in `[0, 1)`.
    fn next_double(&self) -> f64;

    /// Draw an `f64` in `[0, bound)`.
    fn next_double_bounded(&self, bound: f64) -> f64 {
        self.next_double_range(0.0, bound)
    }

    /// Draw an `f64` in `[from, to)`.
    fn next_double_range(&self, from: f64, to: f64) -> f64;

    /// Fill `buffer` with random bytes.
    fn fill_bytes(&self, buffer: &mut [u8]);

    /// Draw `size` random bytes.
    fn next_bytes(&self, size: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; size];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// Random source shared by a fixture and every generator it created.
pub type SharedRandom = Arc<dyn RandomSource>;

/// Seeded random source backed by `StdRng`.
pub struct SeededRandom {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a random source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Create a shared random source seeded with `seed`.
    pub fn shared(seed: u64) -> SharedRandom {
        Arc::new(Self::new(seed))
    }

    /// The seed this source was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn with_rng<R>(&self, draw: impl FnOnce(&mut StdRng) -> R) -> R {
        // A panic while holding the lock cannot leave StdRng half-updated.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut rng)
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn next_bool(&self) -> bool {
        self.with_rng(|rng| rng.random())
    }

    fn next_int(&self) -> i32 {
        self.with_rng(|rng| rng.random())
    }

    fn next_int_range(&self, from: i32, to: i32) -> i32 {
        self.with_rng(|rng| rng.random_range(from..to))
    }

    fn next_long(&self) -> i64 {
        self.with_rng(|rng| rng.random())
    }

    fn next_long_range(&self, from: i64, to: i64) -> i64 {
        self.with_rng(|rng| rng.random_range(from..to))
    }

    fn next_float(&self) -> f32 {
        self.with_rng(|rng| rng.random())
    }

    fn next_double(&self) -> f64 {
        self.with_rng(|rng| rng.random())
    }

    fn next_double_range(&self, from: f64, to: f64) -> f64 {
        self.with_rng(|rng| rng.random_range(from..to))
    }

    fn fill_bytes(&self, buffer: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(buffer))
    }
}
