//! Scalar value generators.
//!
//! Each function maps one or more draws from the random source to a value.

use crate::random::RandomSource;
use std::sync::atomic::{AtomicU64, Ordering};

/// Printable ASCII, `[33, 126]`, as a half-open range.
pub const PRINTABLE_FROM: i32 = 33;
pub const PRINTABLE_TO: i32 = 127;

/// String lengths, `[1, 10]`, as a half-open range.
pub const STRING_LENGTH_FROM: i32 = 1;
pub const STRING_LENGTH_TO: i32 = 11;

pub fn generate_bool(random: &dyn RandomSource) -> bool {
    random.next_bool()
}

pub fn generate_byte(random: &dyn RandomSource) -> i8 {
    random.next_int_range(i32::from(i8::MIN), i32::from(i8::MAX) + 1) as i8
}

pub fn generate_short(random: &dyn RandomSource) -> i16 {
    random.next_int_range(i32::from(i16::MIN), i32::from(i16::MAX) + 1) as i16
}

pub fn generate_int(random: &dyn RandomSource) -> i32 {
    random.next_int()
}

pub fn generate_long(random: &dyn RandomSource) -> i64 {
    random.next_long()
}

pub fn generate_float(random: &dyn RandomSource) -> f32 {
    random.next_float()
}

/// A `[0, 1)` double offset by an arbitrary integer.
///
/// Two draws: one double, then one int.
pub fn generate_double(random: &dyn RandomSource) -> f64 {
    let fraction = random.next_double();
    fraction + f64::from(random.next_int())
}

/// A printable ASCII character.
pub fn generate_char(random: &dyn RandomSource) -> char {
    char::from(random.next_int_range(PRINTABLE_FROM, PRINTABLE_TO) as u8)
}

/// A string of 1 to 10 printable ASCII characters.
pub fn generate_string(random: &dyn RandomSource) -> String {
    let length = random.next_int_range(STRING_LENGTH_FROM, STRING_LENGTH_TO);
    (0..length).map(|_| generate_char(random)).collect()
}

pub fn generate_ubyte(random: &dyn RandomSource) -> u8 {
    generate_byte(random) as u8
}

pub fn generate_ushort(random: &dyn RandomSource) -> u16 {
    generate_short(random) as u16
}

pub fn generate_uint(random: &dyn RandomSource) -> u32 {
    generate_int(random) as u32
}

pub fn generate_ulong(random: &dyn RandomSource) -> u64 {
    generate_long(random) as u64
}

/// An opaque value that is distinct from every other one produced in this
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnyValue {
    serial: u64,
}

impl AnyValue {
    fn fresh() -> Self {
        static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);
        Self {
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// A fresh [`AnyValue`]. Draws nothing from the random source.
pub fn generate_any(_random: &dyn RandomSource) -> AnyValue {
    AnyValue::fresh()
}

/// The unit value. Draws nothing from the random source.
pub fn generate_unit(_random: &dyn RandomSource) {}
