//! Fixture configuration and build.
//!
//! [`Configuration`] collects the seed and the custom generator factories.
//! [`Configuration::build`] turns it into an immutable [`Fixture`]:
//!
//! ```text
//! seed ──► SeededRandom ──┬──► built-in generators ─────────────┐
//!                         ├──► simple custom factories ─────────┤
//!                         │                                     ▼
//!                         └──► dependent custom factories ◄── view (built-ins + simple)
//!                                                               │
//!              final map = customs, then built-ins overwrite ◄──┘
//! ```
//!
//! Dependent generators can compose over built-ins and simple custom
//! generators only. They never see each other.

use crate::error::Result;
use crate::fixture::Fixture;
use crate::generator::{
    erase, DependentGeneratorFactory, ErasedGenerator, GeneratorFactory, GeneratorRegistry,
};
use crate::generator_id::{resolve_generator_id, GeneratorId};
use crate::generators::{builtin_generators, SelectorGeneratorFactory};
use crate::qualifier::Qualifier;
use crate::random::{SeededRandom, SharedRandom};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

type SimpleFactory = Box<dyn FnOnce(&SharedRandom) -> ErasedGenerator>;
type DependentFactory =
    Box<dyn FnOnce(&SharedRandom, &GeneratorRegistry) -> Result<ErasedGenerator>>;

enum RegisteredFactory {
    Simple(SimpleFactory),
    Dependent(DependentFactory),
}

/// Mutable builder for a [`Fixture`].
#[derive(Default)]
pub struct Configuration {
    /// Seed of the fixture's random source
    seed: u64,
    /// Custom registrations keyed by generator id
    factories: BTreeMap<GeneratorId, RegisteredFactory>,
}

impl Configuration {
    /// A configuration with seed 0 and no custom generators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed used when the fixture is built.
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Register a generator factory for `T` under an optional qualifier.
    ///
    /// Replaces any earlier custom registration under the same id. An
    /// unqualified registration for a built-in type has no effect on the
    /// built fixture.
    pub fn add_generator<T, F>(&mut self, factory: F, qualifier: Option<&Qualifier>) -> &mut Self
    where
        T: 'static,
        F: GeneratorFactory<T> + 'static,
    {
        let id = resolve_generator_id::<T>(qualifier);
        self.register(
            id,
            RegisteredFactory::Simple(Box::new(move |random: &SharedRandom| {
                erase::<T>(Arc::from(factory.create(Arc::clone(random))))
            })),
        )
    }

    /// Register a factory for `T` that composes over other generators.
    pub fn add_dependent_generator<T, F>(
        &mut self,
        factory: F,
        qualifier: Option<&Qualifier>,
    ) -> &mut Self
    where
        T: 'static,
        F: DependentGeneratorFactory<T> + 'static,
    {
        let id = resolve_generator_id::<T>(qualifier);
        self.register(
            id,
            RegisteredFactory::Dependent(Box::new(
                move |random: &SharedRandom,
                      generators: &GeneratorRegistry|
                      -> Result<ErasedGenerator> {
                    let generator = factory.create(Arc::clone(random), generators)?;
                    Ok(erase::<T>(Arc::from(generator)))
                },
            )),
        )
    }

    /// Register a selector over `options` as the generator for `T`.
    ///
    /// Fails with `InvalidArgument` if `options` is empty.
    pub fn use_selector<T>(
        &mut self,
        options: impl IntoIterator<Item = T>,
        qualifier: Option<&Qualifier>,
    ) -> Result<&mut Self>
    where
        T: Clone + Send + Sync + 'static,
    {
        let factory = SelectorGeneratorFactory::new(options)?;
        Ok(self.add_generator::<T, _>(factory, qualifier))
    }

    /// Ids of the custom registrations, in id order.
    pub fn custom_ids(&self) -> impl Iterator<Item = &GeneratorId> {
        self.factories.keys()
    }

    /// Build the fixture with a random source seeded from this configuration.
    pub fn build(self) -> Result<Fixture> {
        let random = SeededRandom::shared(self.seed);
        self.build_with_random(random)
    }

    /// Build the fixture around an existing random source. The configured
    /// seed is ignored.
    pub fn build_with_random(self, random: SharedRandom) -> Result<Fixture> {
        let builtins = builtin_generators(&random);

        let mut customs = GeneratorRegistry::default();
        let mut dependents = Vec::new();
        for (id, factory) in self.factories {
            match factory {
                RegisteredFactory::Simple(create) => {
                    customs.insert_erased(id, create(&random));
                }
                RegisteredFactory::Dependent(create) => dependents.push((id, create)),
            }
        }
        let simple_count = customs.len();

        let mut visible = customs.clone();
        visible.overwrite_with(&builtins);

        let dependent_count = dependents.len();
        for (id, create) in dependents {
            let generator = create(&random, &visible)?;
            customs.insert_erased(id, generator);
        }

        for id in customs.overwrite_with(&builtins) {
            tracing::debug!("Custom generator for '{id}' superseded by built-in generator");
        }

        tracing::debug!(
            seed = self.seed,
            builtins = builtins.len(),
            simple = simple_count,
            dependent = dependent_count,
            "Built fixture"
        );

        Ok(Fixture::new(random, customs))
    }

    fn register(&mut self, id: GeneratorId, factory: RegisteredFactory) -> &mut Self {
        if self.factories.insert(id.clone(), factory).is_some() {
            tracing::debug!("Replaced custom generator registration for '{id}'");
        }
        self
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("seed", &self.seed)
            .field("custom_ids", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Build a fixture with the default configuration.
pub fn create_fixture() -> Result<Fixture> {
    Configuration::new().build()
}

/// Build a fixture after applying `configure` to a fresh configuration.
pub fn create_fixture_with<F>(configure: F) -> Result<Fixture>
where
    F: FnOnce(&mut Configuration) -> Result<()>,
{
    let mut configuration = Configuration::new();
    configure(&mut configuration)?;
    configuration.build()
}
