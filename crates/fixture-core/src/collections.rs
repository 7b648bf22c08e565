//! Collection-shaped fixtures built from single-value resolution.
//!
//! Nothing here draws randomness of its own beyond the collection size and,
//! for [`Fixture::value_from`], the index. Elements are resolved in order,
//! so element order follows the random stream. Sets and maps can come out
//! smaller than requested when duplicate elements or keys are drawn; later
//! map entries overwrite earlier ones.

use crate::error::{FixtureError, Result};
use crate::fixture::Fixture;
use crate::qualifier::Qualifier;
use crate::random::RandomSource;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::marker::PhantomData;

/// Collection sizes when none is requested, `[1, 10]`, as a half-open range.
pub const SIZE_FROM: i32 = 1;
pub const SIZE_TO: i32 = 11;

impl Fixture {
    /// The requested size, or a draw over `[1, 10]`.
    pub fn determine_size(&self, size: Option<usize>) -> usize {
        size.unwrap_or_else(|| self.random().next_int_range(SIZE_FROM, SIZE_TO) as usize)
    }

    /// A list of `T`.
    pub fn list<T: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Vec<T>> {
        self.list_with(size, |fixture| fixture.value(qualifier))
    }

    /// A list whose elements come from `draw`, e.g. `Fixture::nullable`.
    pub fn list_with<T, F>(&self, size: Option<usize>, mut draw: F) -> Result<Vec<T>>
    where
        F: FnMut(&Fixture) -> Result<T>,
    {
        let size = self.determine_size(size);
        (0..size).map(|_| draw(self)).collect()
    }

    /// A fixed-size array of `T`.
    pub fn array<T: 'static>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<Box<[T]>> {
        self.list(qualifier, size).map(Vec::into_boxed_slice)
    }

    /// A set of at most `size` elements of `T`.
    pub fn set<T>(&self, qualifier: Option<&Qualifier>, size: Option<usize>) -> Result<HashSet<T>>
    where
        T: Eq + Hash + 'static,
    {
        self.set_with(size, |fixture| fixture.value(qualifier))
    }

    /// A set whose candidate elements come from `draw`.
    pub fn set_with<T, F>(&self, size: Option<usize>, mut draw: F) -> Result<HashSet<T>>
    where
        T: Eq + Hash,
        F: FnMut(&Fixture) -> Result<T>,
    {
        let size = self.determine_size(size);
        let mut set = HashSet::with_capacity(size);
        for _ in 0..size {
            set.insert(draw(self)?);
        }
        Ok(set)
    }

    /// An ordered set of at most `size` elements of `T`.
    pub fn sorted_set<T>(
        &self,
        qualifier: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<BTreeSet<T>>
    where
        T: Ord + 'static,
    {
        let size = self.determine_size(size);
        let mut set = BTreeSet::new();
        for _ in 0..size {
            set.insert(self.value(qualifier)?);
        }
        Ok(set)
    }

    /// A lazy sequence of `T`, resolving each element when it is pulled.
    pub fn sequence<'a, T: 'static>(
        &'a self,
        qualifier: Option<&'a Qualifier>,
        size: Option<usize>,
    ) -> Sequence<'a, T> {
        self.sequence_with(size, move |fixture| fixture.value(qualifier))
    }

    /// A lazy sequence whose elements come from `draw`.
    ///
    /// The size is fixed when the sequence is created.
    pub fn sequence_with<'a, T, F>(&'a self, size: Option<usize>, draw: F) -> Sequence<'a, T>
    where
        F: FnMut(&Fixture) -> Result<T> + 'a,
    {
        Sequence {
            fixture: self,
            remaining: self.determine_size(size),
            draw: Box::new(draw),
            _marker: PhantomData,
        }
    }

    /// Two independent values, first then second.
    pub fn pair<A, B>(
        &self,
        first: Option<&Qualifier>,
        second: Option<&Qualifier>,
    ) -> Result<(A, B)>
    where
        A: 'static,
        B: 'static,
    {
        let a = self.value(first)?;
        let b = self.value(second)?;
        Ok((a, b))
    }

    /// Three independent values, in order.
    pub fn triple<A, B, C>(
        &self,
        first: Option<&Qualifier>,
        second: Option<&Qualifier>,
        third: Option<&Qualifier>,
    ) -> Result<(A, B, C)>
    where
        A: 'static,
        B: 'static,
        C: 'static,
    {
        let a = self.value(first)?;
        let b = self.value(second)?;
        let c = self.value(third)?;
        Ok((a, b, c))
    }

    /// A map of at most `size` entries. Duplicate keys keep the last value.
    pub fn map<K, V>(
        &self,
        key: Option<&Qualifier>,
        value: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash + 'static,
        V: 'static,
    {
        let size = self.determine_size(size);
        let mut map = HashMap::with_capacity(size);
        for _ in 0..size {
            let (k, v) = self.pair(key, value)?;
            map.insert(k, v);
        }
        Ok(map)
    }

    /// An ordered map of at most `size` entries.
    pub fn sorted_map<K, V>(
        &self,
        key: Option<&Qualifier>,
        value: Option<&Qualifier>,
        size: Option<usize>,
    ) -> Result<BTreeMap<K, V>>
    where
        K: Ord + 'static,
        V: 'static,
    {
        let size = self.determine_size(size);
        let mut map = BTreeMap::new();
        for _ in 0..size {
            let (k, v) = self.pair(key, value)?;
            map.insert(k, v);
        }
        Ok(map)
    }

    /// One element of `items`, picked with a single bounded draw.
    ///
    /// Does not use any registered generator.
    pub fn value_from<I>(&self, items: I) -> Result<I::Item>
    where
        I: IntoIterator,
    {
        let mut items: Vec<I::Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(FixtureError::invalid_argument(
                "Cannot pick a value from an empty collection",
            ));
        }
        let bound = i32::try_from(items.len()).unwrap_or(i32::MAX);
        let index = self.random().next_int_bounded(bound) as usize;
        Ok(items.swap_remove(index))
    }
}

/// Finite, pull-based sequence of fixture values.
///
/// Each call to `next` resolves one element. The sequence cannot be
/// restarted.
pub struct Sequence<'a, T> {
    fixture: &'a Fixture,
    remaining: usize,
    draw: Box<dyn FnMut(&Fixture) -> Result<T> + 'a>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some((self.draw)(self.fixture))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Sequence<'_, T> {}
