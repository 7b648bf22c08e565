//! Qualifiers name a "flavor" of a type so that several generators for the
//! same type can coexist in one fixture.

use crate::type_name::canonical_type_id;
use std::fmt;

/// Prefix carried by every qualifier value.
///
/// Keeps qualified ids from colliding with bare type identifiers.
pub const QUALIFIER_PREFIX: &str = "q:";

/// An immutable qualifier value, always starting with [`QUALIFIER_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Qualifier {
    value: String,
}

impl Qualifier {
    /// Qualifier backed by a literal string.
    pub fn named(value: impl AsRef<str>) -> Self {
        Self {
            value: format!("{QUALIFIER_PREFIX}{}", value.as_ref()),
        }
    }

    /// Qualifier backed by an enum variant.
    ///
    /// Uses the lower-cased `Debug` name, so it is meant for unit variants:
    /// `Color::Red` becomes `q:red`.
    pub fn of_variant<E: fmt::Debug>(variant: &E) -> Self {
        Self::named(format!("{variant:?}").to_lowercase())
    }

    /// Qualifier backed by the canonical identifier of `T`.
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        Self::named(canonical_type_id::<T>())
    }

    /// The prefixed qualifier value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Shorthand for [`Qualifier::named`].
pub fn qualified_by(value: impl AsRef<str>) -> Qualifier {
    Qualifier::named(value)
}

/// Shorthand for [`Qualifier::of_variant`].
pub fn qualified_by_variant<E: fmt::Debug>(variant: &E) -> Qualifier {
    Qualifier::of_variant(variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Flavor {
        Vanilla,
        DarkChocolate,
    }

    #[test]
    fn test_named_qualifier_is_prefixed() {
        assert_eq!(qualified_by("name").value(), "q:name");
    }

    #[test]
    fn test_variant_qualifier_is_lowercased() {
        assert_eq!(qualified_by_variant(&Flavor::Vanilla).value(), "q:vanilla");
        assert_eq!(
            qualified_by_variant(&Flavor::DarkChocolate).value(),
            "q:darkchocolate"
        );
    }

    #[test]
    fn test_type_qualifier_wraps_type_id() {
        assert_eq!(Qualifier::for_type::<u64>().value(), "q:u64");
    }

    #[test]
    fn test_equal_values_are_equal_qualifiers() {
        assert_eq!(qualified_by("a"), Qualifier::named(String::from("a")));
        assert_ne!(qualified_by("a"), qualified_by("b"));
    }
}
