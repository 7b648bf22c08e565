//! Registry keys derived from a type and an optional qualifier.

use crate::qualifier::Qualifier;
use crate::type_name::canonical_type_id;
use std::fmt;

/// Separator between a qualifier and the type qualifier in an id.
pub const ID_SEPARATOR: &str = ":";

/// Key of a generator in the fixture registry.
///
/// Unqualified ids are exactly the canonical type identifier, which is how
/// built-in generators are keyed. Qualified ids have the form
/// `q:<qualifier>:q:<type>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratorId(String);

impl GeneratorId {
    /// Id of the unqualified generator for `T`.
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        Self(canonical_type_id::<T>().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve the registry key for `T` under an optional qualifier.
pub fn resolve_generator_id<T: ?Sized + 'static>(qualifier: Option<&Qualifier>) -> GeneratorId {
    match qualifier {
        None => GeneratorId::for_type::<T>(),
        Some(qualifier) => GeneratorId(format!(
            "{}{ID_SEPARATOR}{}",
            qualifier.value(),
            Qualifier::for_type::<T>().value()
        )),
    }
}
