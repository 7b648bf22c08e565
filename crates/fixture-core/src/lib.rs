//! Deterministic, seedable test fixtures.
//!
//! This crate provides the [`Fixture`], a registry of per-type generators
//! that all draw from one seeded random source, so a whole run of generated
//! fixtures is reproducible from a single seed.
//!
//! # Architecture
//!
//! ```text
//! Configuration { seed, custom factories }
//!        │ build()
//!        ▼
//! ┌──────────────────────────────┐
//! │  Fixture                     │
//! │                              │
//! │  - random (SeededRandom)     │
//! │  - generators (id -> gen)    │
//! └──────────────┬───────────────┘
//!                │ value::<T>(qualifier)
//!                ▼
//!   list / set / map / sequence / pair / triple / ...
//! ```
//!
//! Generators are keyed by a [`GeneratorId`] derived from the Rust type and
//! an optional [`Qualifier`]. Built-in generators cover the primitive types,
//! `String`, and `Vec`s of primitives; their ids cannot be overridden.
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{create_fixture_with, qualified_by};
//!
//! let color = qualified_by("color");
//! let fixture = create_fixture_with(|config| {
//!     config.set_seed(23);
//!     config.use_selector(["red", "green", "blue"].map(String::from), Some(&color))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let age: u8 = fixture.value(None).unwrap();
//! let names: Vec<String> = fixture.list(None, Some(3)).unwrap();
//! let picked: String = fixture.value(Some(&color)).unwrap();
//!
//! assert_eq!(names.len(), 3);
//! assert!(["red", "green", "blue"].contains(&picked.as_str()));
//! # let _ = age;
//! ```

pub mod collections;
pub mod configuration;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod generator_id;
pub mod generators;
pub mod number;
pub mod qualifier;
pub mod random;
pub mod testing;
pub mod type_name;

// Re-exports for convenience
pub use collections::Sequence;
pub use configuration::{create_fixture, create_fixture_with, Configuration};
pub use error::{FixtureError, Result};
pub use fixture::{Fixture, DEFAULT_FILTER_ATTEMPTS};
pub use generator::{DependentGeneratorFactory, Generator, GeneratorFactory, GeneratorRegistry};
pub use generator_id::{resolve_generator_id, GeneratorId};
pub use generators::{AnyValue, SelectorGenerator, SelectorGeneratorFactory};
pub use number::Number;
pub use qualifier::{qualified_by, qualified_by_variant, Qualifier};
pub use random::{RandomSource, SeededRandom, SharedRandom};
