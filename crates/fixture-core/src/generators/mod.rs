//! Built-in generators.
//!
//! One generator per supported primitive and primitive-array type, keyed by
//! the type's unqualified id. These ids are reserved: custom registrations
//! under the same id are superseded when a fixture is built.
//!
//! | Type | Draws |
//! |------|-------|
//! | `bool` | one boolean |
//! | `i8`, `i16`, `u8`, `u16` | one bounded int |
//! | `i32`, `u32` | one int |
//! | `i64`, `u64` | one long |
//! | `f32` | one float |
//! | `f64` | one double plus one int |
//! | `char` | one int over printable ASCII |
//! | `String` | one length draw plus one draw per character |
//! | `AnyValue`, `()` | none |
//! | `Vec<bool>`, `Vec<i8>`, `Vec<u8>`, `Vec<char>`, `Vec<i16>`, `Vec<i32>`, `Vec<i64>`, `Vec<f32>`, `Vec<f64>`, `Vec<u32>` | one length draw plus element draws |

pub mod array;
pub mod scalar;
pub mod selector;

use crate::generator::{Generator, GeneratorRegistry};
use crate::generator_id::GeneratorId;
use crate::random::{RandomSource, SharedRandom};
use std::sync::Arc;

pub use scalar::AnyValue;
pub use selector::{SelectorGenerator, SelectorGeneratorFactory};

/// Bind a generation function to the shared random source.
fn bind<T: 'static>(
    random: &SharedRandom,
    generate: fn(&dyn RandomSource) -> T,
) -> Arc<dyn Generator<T>> {
    let random = Arc::clone(random);
    Arc::new(move || generate(random.as_ref()))
}

fn register<T: 'static>(
    registry: &mut GeneratorRegistry,
    random: &SharedRandom,
    generate: fn(&dyn RandomSource) -> T,
) {
    registry.insert(GeneratorId::for_type::<T>(), bind(random, generate));
}

/// Instantiate every built-in generator against `random`.
pub fn builtin_generators(random: &SharedRandom) -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::default();

    register(&mut registry, random, scalar::generate_bool);
    register(&mut registry, random, scalar::generate_byte);
    register(&mut registry, random, scalar::generate_short);
    register(&mut registry, random, scalar::generate_int);
    register(&mut registry, random, scalar::generate_long);
    register(&mut registry, random, scalar::generate_float);
    register(&mut registry, random, scalar::generate_double);
    register(&mut registry, random, scalar::generate_char);
    register(&mut registry, random, scalar::generate_string);
    register(&mut registry, random, scalar::generate_ubyte);
    register(&mut registry, random, scalar::generate_ushort);
    register(&mut registry, random, scalar::generate_uint);
    register(&mut registry, random, scalar::generate_ulong);
    register(&mut registry, random, scalar::generate_any);
    register(&mut registry, random, scalar::generate_unit);

    register(&mut registry, random, array::generate_bool_array);
    register(&mut registry, random, array::generate_byte_array);
    register(&mut registry, random, array::generate_ubyte_array);
    register(&mut registry, random, array::generate_char_array);
    register(&mut registry, random, array::generate_short_array);
    register(&mut registry, random, array::generate_int_array);
    register(&mut registry, random, array::generate_long_array);
    register(&mut registry, random, array::generate_float_array);
    register(&mut registry, random, array::generate_double_array);
    register(&mut registry, random, array::generate_uint_array);

    registry
}

/// Number of built-in generators.
pub const BUILTIN_GENERATOR_COUNT: usize = 25;
