//! Array value generators.
//!
//! Arrays are 1 to 100 elements long. Boolean arrays draw one boolean per
//! element. The other kinds draw a single byte buffer of the array's length
//! and widen each byte into an element; double arrays additionally add a
//! fresh double draw per element. Unsigned int arrays draw four bytes per
//! element.

use crate::random::RandomSource;

/// Array lengths, `[1, 100]`, as a half-open range.
pub const ARRAY_LENGTH_FROM: i32 = 1;
pub const ARRAY_LENGTH_TO: i32 = 101;

fn array_length(random: &dyn RandomSource) -> usize {
    random.next_int_range(ARRAY_LENGTH_FROM, ARRAY_LENGTH_TO) as usize
}

/// One byte buffer of a fresh array length, each byte reinterpreted as signed.
fn signed_bytes(random: &dyn RandomSource) -> impl Iterator<Item = i8> {
    let length = array_length(random);
    random.next_bytes(length).into_iter().map(|byte| byte as i8)
}

pub fn generate_bool_array(random: &dyn RandomSource) -> Vec<bool> {
    let length = array_length(random);
    (0..length).map(|_| random.next_bool()).collect()
}

pub fn generate_byte_array(random: &dyn RandomSource) -> Vec<i8> {
    signed_bytes(random).collect()
}

pub fn generate_ubyte_array(random: &dyn RandomSource) -> Vec<u8> {
    let length = array_length(random);
    random.next_bytes(length)
}

pub fn generate_char_array(random: &dyn RandomSource) -> Vec<char> {
    let length = array_length(random);
    random.next_bytes(length).into_iter().map(char::from).collect()
}

pub fn generate_short_array(random: &dyn RandomSource) -> Vec<i16> {
    signed_bytes(random).map(i16::from).collect()
}

pub fn generate_int_array(random: &dyn RandomSource) -> Vec<i32> {
    signed_bytes(random).map(i32::from).collect()
}

pub fn generate_long_array(random: &dyn RandomSource) -> Vec<i64> {
    signed_bytes(random).map(i64::from).collect()
}

pub fn generate_float_array(random: &dyn RandomSource) -> Vec<f32> {
    signed_bytes(random).map(f32::from).collect()
}

pub fn generate_double_array(random: &dyn RandomSource) -> Vec<f64> {
    let bytes: Vec<i8> = signed_bytes(random).collect();
    bytes
        .into_iter()
        .map(|byte| f64::from(byte) + random.next_double())
        .collect()
}

pub fn generate_uint_array(random: &dyn RandomSource) -> Vec<u32> {
    let length = array_length(random);
    random
        .next_bytes(length * 4)
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
