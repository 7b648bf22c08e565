//! Canonical type identifiers.
//!
//! Generator ids are keyed on a stable, readable name per Rust type. Names
//! come from [`std::any::type_name`] and are memoized per [`TypeId`] in one
//! process-wide [`TypeNameCache`]. The cache is populated lazily and never
//! evicted.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Memoized mapping from type identity to canonical name.
#[derive(Debug, Default)]
pub struct TypeNameCache {
    names: RwLock<HashMap<TypeId, &'static str>>,
}

impl TypeNameCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical name of `T`, computed once per cache.
    pub fn name_of<T: ?Sized + 'static>(&self) -> &'static str {
        let type_id = TypeId::of::<T>();
        if let Some(name) = self
            .names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return *name;
        }

        let mut names = self.names.write().unwrap_or_else(PoisonError::into_inner);
        *names
            .entry(type_id)
            .or_insert_with(std::any::type_name::<T>)
    }

    /// Number of memoized names.
    pub fn len(&self) -> usize {
        self.names
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no name has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide cache, initialized on first use.
pub fn type_names() -> &'static TypeNameCache {
    static CACHE: OnceLock<TypeNameCache> = OnceLock::new();
    CACHE.get_or_init(TypeNameCache::new)
}

/// Canonical identifier of `T` from the process-wide cache.
pub fn canonical_type_id<T: ?Sized + 'static>() -> &'static str {
    type_names().name_of::<T>()
}
