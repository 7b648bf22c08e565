//! The fixture: an immutable, seeded value-generation session.

use crate::error::{FixtureError, Result};
use crate::generator::GeneratorRegistry;
use crate::generator_id::resolve_generator_id;
use crate::number::{Number, NUMBER_KINDS};
use crate::qualifier::Qualifier;
use crate::random::{RandomSource, SharedRandom};
use std::any::{Any, TypeId};
use std::fmt;
use std::ops::RangeBounds;

/// Attempts made by [`Fixture::filtered`] before giving up.
pub const DEFAULT_FILTER_ATTEMPTS: usize = 1000;

/// Random source plus the closed set of generators built from it.
///
/// Every value comes out of the one shared random stream, so two fixtures
/// built from the same configuration and seed produce the same values for
/// the same sequence of calls.
pub struct Fixture {
    random: SharedRandom,
    generators: GeneratorRegistry,
}

impl Fixture {
    pub(crate) fn new(random: SharedRandom, generators: GeneratorRegistry) -> Self {
        Self { random, generators }
    }

    /// The random source shared by every generator of this fixture.
    pub fn random(&self) -> &SharedRandom {
        &self.random
    }

    /// The final generator registry.
    pub fn generators(&self) -> &GeneratorRegistry {
        &self.generators
    }

    /// Resolve one value of `T`.
    ///
    /// `Number` is resolved by first picking a concrete numeric kind with
    /// one draw over `[0, 6)`.
    pub fn value<T: 'static>(&self, qualifier: Option<&Qualifier>) -> Result<T> {
        if TypeId::of::<T>() == TypeId::of::<Number>() {
            let number: Box<dyn Any> = Box::new(self.number(qualifier)?);
            return number
                .downcast::<T>()
                .map(|value| *value)
                .map_err(|_| FixtureError::TypeMismatch {
                    id: resolve_generator_id::<T>(qualifier),
                    expected: std::any::type_name::<T>(),
                });
        }

        let id = resolve_generator_id::<T>(qualifier);
        tracing::trace!("Resolving fixture value for '{id}'");
        let generator = self.generators.get_by_id::<T>(&id)?;
        Ok(generator.generate())
    }

    /// Resolve a value of `T` or `None`, each with probability one half.
    ///
    /// The boolean gate is drawn first; on `None` no generator runs.
    pub fn nullable<T: 'static>(&self, qualifier: Option<&Qualifier>) -> Result<Option<T>> {
        if self.random.next_bool() {
            return Ok(None);
        }
        self.value(qualifier).map(Some)
    }

    /// Resolve a [`Number`] of a uniformly chosen concrete kind.
    pub fn number(&self, qualifier: Option<&Qualifier>) -> Result<Number> {
        let number = match self.random.next_int_bounded(NUMBER_KINDS) {
            0 => Number::Byte(self.value(qualifier)?),
            1 => Number::Short(self.value(qualifier)?),
            2 => Number::Int(self.value(qualifier)?),
            3 => Number::Float(self.value(qualifier)?),
            4 => Number::Long(self.value(qualifier)?),
            _ => Number::Double(self.value(qualifier)?),
        };
        Ok(number)
    }

    /// Resolve values of `T` until one satisfies `predicate`.
    ///
    /// Fails with `FilterExhausted` after [`DEFAULT_FILTER_ATTEMPTS`]
    /// rejected values.
    pub fn filtered<T, P>(&self, qualifier: Option<&Qualifier>, predicate: P) -> Result<T>
    where
        T: 'static,
        P: Fn(&T) -> bool,
    {
        self.filtered_with_attempts(qualifier, DEFAULT_FILTER_ATTEMPTS, predicate)
    }

    /// [`Fixture::filtered`] with an explicit attempt budget.
    pub fn filtered_with_attempts<T, P>(
        &self,
        qualifier: Option<&Qualifier>,
        attempts: usize,
        predicate: P,
    ) -> Result<T>
    where
        T: 'static,
        P: Fn(&T) -> bool,
    {
        for _ in 0..attempts {
            let value = self.value::<T>(qualifier)?;
            if predicate(&value) {
                return Ok(value);
            }
        }
        Err(FixtureError::FilterExhausted {
            id: resolve_generator_id::<T>(qualifier),
            attempts,
        })
    }

    /// Resolve a value of `T` that lies within `range`.
    pub fn value_in<T, R>(&self, range: R, qualifier: Option<&Qualifier>) -> Result<T>
    where
        T: PartialOrd + 'static,
        R: RangeBounds<T>,
    {
        self.filtered(qualifier, |value: &T| range.contains(value))
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("generators", &self.generators)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{create_fixture, Configuration};
    use crate::generator_id::GeneratorId;
    use crate::qualifier::qualified_by;
    use crate::random::SeededRandom;
    use crate::testing::ScriptedRandom;
    use std::sync::Arc;

    fn scripted_fixture(random: ScriptedRandom) -> (Fixture, Arc<ScriptedRandom>) {
        let random = Arc::new(random);
        let fixture = Configuration::new()
            .build_with_random(Arc::clone(&random) as SharedRandom)
            .unwrap();
        (fixture, random)
    }

    #[test]
    fn test_seed_zero_int_matches_reference() {
        let fixture = create_fixture().unwrap();
        assert_eq!(
            fixture.value::<i32>(None).unwrap(),
            SeededRandom::new(0).next_int()
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let first = create_fixture().unwrap();
        let second = create_fixture().unwrap();

        for _ in 0..20 {
            assert_eq!(
                first.value::<String>(None).unwrap(),
                second.value::<String>(None).unwrap()
            );
            assert_eq!(
                first.value::<Vec<i64>>(None).unwrap(),
                second.value::<Vec<i64>>(None).unwrap()
            );
        }
    }

    #[test]
    fn test_missing_generator() {
        struct Unregistered;
        let fixture = create_fixture().unwrap();

        let err = fixture.value::<Unregistered>(None).err();
        assert_eq!(
            err,
            Some(FixtureError::MissingGenerator {
                id: GeneratorId::for_type::<Unregistered>()
            })
        );
    }

    #[test]
    fn test_nullable_gate_skips_generator() {
        let (fixture, random) = scripted_fixture(ScriptedRandom::new().with_booleans([true]));

        for _ in 0..10 {
            assert_eq!(fixture.nullable::<i32>(None).unwrap(), None);
        }
        assert_eq!(random.draw_count(), 10);
    }

    #[test]
    fn test_nullable_closed_gate_resolves_value() {
        let (fixture, random) = scripted_fixture(
            ScriptedRandom::new().with_booleans([false]).with_ints([17]),
        );

        assert_eq!(fixture.nullable::<i32>(None).unwrap(), Some(17));
        assert_eq!(random.draw_count(), 2);
    }

    #[test]
    fn test_number_kind_from_first_draw() {
        let (fixture, _) = scripted_fixture(
            ScriptedRandom::new()
                .with_ints([4])
                .with_longs([99]),
        );
        assert_eq!(fixture.value::<Number>(None).unwrap(), Number::Long(99));

        let (fixture, _) = scripted_fixture(ScriptedRandom::new().with_ints([2, -5]));
        assert_eq!(fixture.number(None).unwrap(), Number::Int(-5));
    }

    #[test]
    fn test_number_upper_kinds() {
        let (fixture, random) = scripted_fixture(
            ScriptedRandom::new()
                .with_ints([5, 3])
                .with_doubles([0.25]),
        );
        assert_eq!(fixture.value::<Number>(None).unwrap(), Number::Double(3.25));
        assert_eq!(random.draw_count(), 3);

        let (fixture, _) = scripted_fixture(
            ScriptedRandom::new()
                .with_ints([3])
                .with_floats([0.5]),
        );
        assert_eq!(fixture.number(None).unwrap(), Number::Float(0.5));

        let (fixture, _) = scripted_fixture(ScriptedRandom::new().with_ints([1, 300]));
        assert_eq!(fixture.number(None).unwrap(), Number::Short(300));
    }

    #[test]
    fn test_number_honors_qualifier() {
        let qualifier = qualified_by("small");
        let random: SharedRandom = Arc::new(ScriptedRandom::new().with_ints([0]));
        let mut configuration = Configuration::new();
        configuration.add_generator::<i8, _>(|_: SharedRandom| || 3i8, Some(&qualifier));
        let fixture = configuration.build_with_random(random).unwrap();

        assert_eq!(fixture.number(Some(&qualifier)).unwrap(), Number::Byte(3));
        assert!(fixture.number(None).is_ok());
    }

    #[test]
    fn test_filtered_returns_first_match() {
        let (fixture, _) = scripted_fixture(ScriptedRandom::new().with_ints([1, 3, 8, 5]));
        let even = fixture.filtered::<i32, _>(None, |v| v % 2 == 0).unwrap();
        assert_eq!(even, 8);
    }

    #[test]
    fn test_filtered_exhausts() {
        let fixture = create_fixture().unwrap();
        let err = fixture
            .filtered_with_attempts::<bool, _>(None, 5, |_| false)
            .err();

        assert_eq!(
            err,
            Some(FixtureError::FilterExhausted {
                id: GeneratorId::for_type::<bool>(),
                attempts: 5
            })
        );
    }

    #[test]
    fn test_value_in_range() {
        let fixture = create_fixture().unwrap();
        for _ in 0..20 {
            let value = fixture.value_in::<i8, _>(0..=20, None).unwrap();
            assert!((0..=20).contains(&value));
        }
    }
}
