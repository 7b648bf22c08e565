//! Scripted random source for tests.
//!
//! [`ScriptedRandom`] replays fixed values per kind of draw, cycling when a
//! script runs out, so tests can force a particular path (null gate always
//! open, duplicate set elements, a specific selector index).
//!
//! Bounded draws clamp the scripted value into the requested range. A draw
//! whose kind has no script panics with `missing binding for <draw>`.

use crate::random::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct Cycle<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T: Copy> Cycle<T> {
    fn next(&mut self, draw: &str) -> T {
        if self.values.is_empty() {
            panic!("missing binding for {draw}");
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[derive(Debug, Default)]
struct Script {
    booleans: Cycle<bool>,
    ints: Cycle<i32>,
    longs: Cycle<i64>,
    floats: Cycle<f32>,
    doubles: Cycle<f64>,
    bytes: Cycle<u8>,
}

/// Test-double random source replaying scripted values.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    script: Mutex<Script>,
    draws: AtomicUsize,
}

impl ScriptedRandom {
    /// A source with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values for `next_bool`.
    pub fn with_booleans(self, values: impl IntoIterator<Item = bool>) -> Self {
        self.script(|script| script.booleans.values = values.into_iter().collect())
    }

    /// Values for `next_int` and the bounded int draws.
    pub fn with_ints(self, values: impl IntoIterator<Item = i32>) -> Self {
        self.script(|script| script.ints.values = values.into_iter().collect())
    }

    /// Values for `next_long` and the bounded long draws.
    pub fn with_longs(self, values: impl IntoIterator<Item = i64>) -> Self {
        self.script(|script| script.longs.values = values.into_iter().collect())
    }

    /// Values for `next_float`.
    pub fn with_floats(self, values: impl IntoIterator<Item = f32>) -> Self {
        self.script(|script| script.floats.values = values.into_iter().collect())
    }

    /// Values for `next_double` and the bounded double draws.
    pub fn with_doubles(self, values: impl IntoIterator<Item = f64>) -> Self {
        self.script(|script| script.doubles.values = values.into_iter().collect())
    }

    /// Bytes handed out by `fill_bytes`, one at a time.
    pub fn with_bytes(self, values: impl IntoIterator<Item = u8>) -> Self {
        self.script(|script| script.bytes.values = values.into_iter().collect())
    }

    /// Total number of draws made so far. A byte fill counts once.
    pub fn draw_count(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }

    fn script(self, edit: impl FnOnce(&mut Script)) -> Self {
        edit(&mut self.script.lock().unwrap_or_else(PoisonError::into_inner));
        self
    }

    fn draw<R>(&self, next: impl FnOnce(&mut Script) -> R) -> R {
        self.draws.fetch_add(1, Ordering::SeqCst);
        next(&mut self.script.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl RandomSource for ScriptedRandom {
    fn next_bool(&self) -> bool {
        self.draw(|script| script.booleans.next("next_bool"))
    }

    fn next_int(&self) -> i32 {
        self.draw(|script| script.ints.next("next_int"))
    }

    fn next_int_range(&self, from: i32, to: i32) -> i32 {
        let value = self.draw(|script| script.ints.next("next_int_range"));
        value.clamp(from, to - 1)
    }

    fn next_long(&self) -> i64 {
        self.draw(|script| script.longs.next("next_long"))
    }

    fn next_long_range(&self, from: i64, to: i64) -> i64 {
        let value = self.draw(|script| script.longs.next("next_long_range"));
        value.clamp(from, to - 1)
    }

    fn next_float(&self) -> f32 {
        self.draw(|script| script.floats.next("next_float"))
    }

    fn next_double(&self) -> f64 {
        self.draw(|script| script.doubles.next("next_double"))
    }

    fn next_double_range(&self, from: f64, to: f64) -> f64 {
        let value = self.draw(|script| script.doubles.next("next_double_range"));
        if value < from {
            from
        } else if value >= to {
            to - (to - from) * f64::EPSILON
        } else {
            value
        }
    }

    fn fill_bytes(&self, buffer: &mut [u8]) {
        self.draw(|script| {
            for byte in buffer.iter_mut() {
                *byte = script.bytes.next("fill_bytes");
            }
        })
    }
}
