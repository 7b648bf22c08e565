//! Generator traits and the generator registry.
//!
//! A [`Generator`] produces one value per call. Custom generators reach the
//! registry through a [`GeneratorFactory`] (given the shared random source)
//! or a [`DependentGeneratorFactory`] (additionally given a read-only view of
//! the other generators, so it can compose over them).
//!
//! Plain closures work for all three:
//!
//! ```rust
//! use fixture_core::{create_fixture_with, RandomSource, SharedRandom};
//!
//! #[derive(Debug, PartialEq)]
//! struct Dice(i32);
//!
//! let fixture = create_fixture_with(|config| {
//!     config.add_generator::<Dice, _>(
//!         |random: SharedRandom| move || Dice(random.next_int_range(1, 7)),
//!         None,
//!     );
//!     Ok(())
//! })
//! .unwrap();
//!
//! let Dice(roll) = fixture.value::<Dice>(None).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

use crate::error::{FixtureError, Result};
use crate::generator_id::{resolve_generator_id, GeneratorId};
use crate::qualifier::Qualifier;
use crate::random::SharedRandom;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// Produces one value of `T` per call.
pub trait Generator<T>: Send + Sync {
    /// Generate the next value.
    fn generate(&self) -> T;
}

impl<T, F> Generator<T> for F
where
    F: Fn() -> T + Send + Sync,
{
    fn generate(&self) -> T {
        self()
    }
}

/// Builds a generator bound to the fixture's random source.
pub trait GeneratorFactory<T> {
    /// Create the generator.
    fn create(&self, random: SharedRandom) -> Box<dyn Generator<T>>;
}

impl<T, G, F> GeneratorFactory<T> for F
where
    F: Fn(SharedRandom) -> G,
    G: Generator<T> + 'static,
{
    fn create(&self, random: SharedRandom) -> Box<dyn Generator<T>> {
        Box::new(self(random))
    }
}

/// Builds a generator that may delegate to other registered generators.
///
/// The registry it receives holds the built-in generators and the simple
/// custom ones. Other dependent generators are not visible.
pub trait DependentGeneratorFactory<T> {
    /// Create the generator, looking up collaborators in `generators`.
    fn create(
        &self,
        random: SharedRandom,
        generators: &GeneratorRegistry,
    ) -> Result<Box<dyn Generator<T>>>;
}

impl<T, G, F> DependentGeneratorFactory<T> for F
where
    F: Fn(SharedRandom, &GeneratorRegistry) -> Result<G>,
    G: Generator<T> + 'static,
{
    fn create(
        &self,
        random: SharedRandom,
        generators: &GeneratorRegistry,
    ) -> Result<Box<dyn Generator<T>>> {
        Ok(Box::new(self(random, generators)?))
    }
}

/// Type-erased generator. Always holds an `Arc<dyn Generator<T>>`.
pub(crate) type ErasedGenerator = Arc<dyn Any + Send + Sync>;

/// Erase the output type of a generator so it can live in the registry.
pub(crate) fn erase<T: 'static>(generator: Arc<dyn Generator<T>>) -> ErasedGenerator {
    Arc::new(generator)
}

/// Read-only mapping from generator id to generator.
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    generators: HashMap<GeneratorId, ErasedGenerator>,
}

impl GeneratorRegistry {
    /// Look up the generator for `T` under an optional qualifier.
    pub fn get<T: 'static>(&self, qualifier: Option<&Qualifier>) -> Result<Arc<dyn Generator<T>>> {
        self.get_by_id::<T>(&resolve_generator_id::<T>(qualifier))
            .map(Arc::clone)
    }

    /// Look up the generator for `T` registered under `id`.
    pub fn get_by_id<T: 'static>(&self, id: &GeneratorId) -> Result<&Arc<dyn Generator<T>>> {
        let erased = self
            .generators
            .get(id)
            .ok_or_else(|| FixtureError::MissingGenerator { id: id.clone() })?;

        erased
            .downcast_ref::<Arc<dyn Generator<T>>>()
            .ok_or_else(|| FixtureError::TypeMismatch {
                id: id.clone(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Whether a generator is registered under `id`.
    pub fn contains(&self, id: &GeneratorId) -> bool {
        self.generators.contains_key(id)
    }

    /// Registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &GeneratorId> {
        self.generators.keys()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Register a typed generator, returning whether an entry was replaced.
    pub(crate) fn insert<T: 'static>(
        &mut self,
        id: GeneratorId,
        generator: Arc<dyn Generator<T>>,
    ) -> bool {
        self.insert_erased(id, erase(generator))
    }

    pub(crate) fn insert_erased(&mut self, id: GeneratorId, generator: ErasedGenerator) -> bool {
        self.generators.insert(id, generator).is_some()
    }

    /// Overwrite entries with every entry of `other`, returning the ids
    /// that were replaced.
    pub(crate) fn overwrite_with(&mut self, other: &GeneratorRegistry) -> Vec<GeneratorId> {
        other
            .generators
            .iter()
            .filter_map(|(id, generator)| {
                self.insert_erased(id.clone(), Arc::clone(generator))
                    .then(|| id.clone())
            })
            .collect()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&GeneratorId> = self.generators.keys().collect();
        ids.sort();
        f.debug_struct("GeneratorRegistry").field("ids", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualifier::qualified_by;
    use crate::random::{RandomSource, SeededRandom};

    fn constant<T: Clone + Send + Sync + 'static>(value: T) -> Arc<dyn Generator<T>> {
        Arc::new(move || value.clone())
    }

    #[test]
    fn test_get_registered_generator() {
        let mut registry = GeneratorRegistry::default();
        registry.insert(GeneratorId::for_type::<i32>(), constant(7));

        let generator = registry.get::<i32>(None).unwrap();
        assert_eq!(generator.generate(), 7);
    }

    #[test]
    fn test_missing_generator_reports_id() {
        let registry = GeneratorRegistry::default();
        let err = registry.get::<u16>(Some(&qualified_by("x"))).err();

        assert_eq!(
            err,
            Some(FixtureError::MissingGenerator {
                id: resolve_generator_id::<u16>(Some(&qualified_by("x")))
            })
        );
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let mut registry = GeneratorRegistry::default();
        let id = GeneratorId::for_type::<i32>();
        registry.insert(id.clone(), constant(String::from("not an int")));

        let err = registry.get_by_id::<i32>(&id).err();
        assert!(matches!(err, Some(FixtureError::TypeMismatch { .. })));
    }

    #[test]
    fn test_insert_reports_replacement() {
        let mut registry = GeneratorRegistry::default();
        let id = GeneratorId::for_type::<i32>();

        assert!(!registry.insert(id.clone(), constant(1)));
        assert!(registry.insert(id.clone(), constant(2)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get::<i32>(None).unwrap().generate(), 2);
    }

    #[test]
    fn test_overwrite_with_prefers_other() {
        let mut custom = GeneratorRegistry::default();
        custom.insert(GeneratorId::for_type::<i32>(), constant(1));
        custom.insert(GeneratorId::for_type::<u8>(), constant(9u8));

        let mut builtins = GeneratorRegistry::default();
        builtins.insert(GeneratorId::for_type::<i32>(), constant(2));

        let replaced = custom.overwrite_with(&builtins);

        assert_eq!(replaced, vec![GeneratorId::for_type::<i32>()]);
        assert_eq!(custom.get::<i32>(None).unwrap().generate(), 2);
        assert_eq!(custom.get::<u8>(None).unwrap().generate(), 9);
    }

    #[test]
    fn test_closure_factories() {
        let random = SeededRandom::shared(3);
        let factory = |random: SharedRandom| move || random.next_int_bounded(5);
        let generator = GeneratorFactory::<i32>::create(&factory, random);

        assert!((0..5).contains(&generator.generate()));
    }
}
