//! Selector generator: uniform choice from a fixed option list.

use crate::error::{FixtureError, Result, MISSING_SELECTABLE_ITEMS};
use crate::generator::{Generator, GeneratorFactory};
use crate::random::{RandomSource, SharedRandom};
use std::sync::Arc;

/// Factory for [`SelectorGenerator`]s over a non-empty option list.
#[derive(Debug, Clone)]
pub struct SelectorGeneratorFactory<T> {
    options: Arc<[T]>,
}

impl<T> SelectorGeneratorFactory<T> {
    /// Create a factory, failing with `InvalidArgument` if `options` is empty.
    pub fn new(options: impl IntoIterator<Item = T>) -> Result<Self> {
        let options: Arc<[T]> = options.into_iter().collect();
        if options.is_empty() {
            return Err(FixtureError::invalid_argument(MISSING_SELECTABLE_ITEMS));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }
}

impl<T> GeneratorFactory<T> for SelectorGeneratorFactory<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn create(&self, random: SharedRandom) -> Box<dyn Generator<T>> {
        Box::new(SelectorGenerator {
            options: Arc::clone(&self.options),
            random,
        })
    }
}

/// Picks one option per call with a single bounded draw.
pub struct SelectorGenerator<T> {
    options: Arc<[T]>,
    random: SharedRandom,
}

impl<T> Generator<T> for SelectorGenerator<T>
where
    T: Clone + Send + Sync,
{
    fn generate(&self) -> T {
        let bound = i32::try_from(self.options.len()).unwrap_or(i32::MAX);
        let index = self.random.next_int_bounded(bound) as usize;
        self.options[index].clone()
    }
}
