//! Error types for fixture configuration and resolution.

use crate::generator_id::GeneratorId;

/// Message used when a selector is constructed without options.
pub const MISSING_SELECTABLE_ITEMS: &str = "Missing selectable items!";

/// Error type for fixture operations.
///
/// None of these are transient: each one means the configuration is
/// incomplete or a type was requested that nothing can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// Structurally invalid input given to a generator factory or accessor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No generator registered under the resolved id
    #[error("Missing generator: no generator registered for '{id}'")]
    MissingGenerator { id: GeneratorId },

    /// A generator exists under the id but produces another Rust type
    #[error("Generator registered for '{id}' does not produce {expected}")]
    TypeMismatch {
        id: GeneratorId,
        expected: &'static str,
    },

    /// Filtering rejected every drawn value
    #[error("No value for '{id}' matched the filter after {attempts} attempts")]
    FilterExhausted { id: GeneratorId, attempts: usize },
}

impl FixtureError {
    /// Create an [`FixtureError::InvalidArgument`] from any message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = FixtureError> = std::result::Result<T, E>;
