//! YAML fixture configuration.
//!
//! ```yaml
//! seed: 23
//! selectors:
//!   - qualifier: color
//!     options: [red, green, blue]
//! ```
//!
//! Each selector becomes a `String` selector registered under
//! `qualified_by(qualifier)`.

use fixture_core::{qualified_by, Configuration, FixtureError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for file configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configuration was rejected by the fixture builder
    #[error("Invalid fixture configuration: {0}")]
    Fixture(#[from] FixtureError),
}

/// A named list of string options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub qualifier: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Fixture configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Seed of the random source; 0 when absent
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub selectors: Vec<SelectorConfig>,
}

impl FixtureConfig {
    /// Load a configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply the seed and selectors to `configuration`.
    ///
    /// Fails with `InvalidArgument` if a selector has no options.
    pub fn apply(&self, configuration: &mut Configuration) -> Result<(), ConfigError> {
        if let Some(seed) = self.seed {
            configuration.set_seed(seed);
        }

        for selector in &self.selectors {
            let qualifier = qualified_by(&selector.qualifier);
            configuration.use_selector(selector.options.iter().cloned(), Some(&qualifier))?;
            tracing::debug!(
                "Registered selector '{}' with {} options",
                selector.qualifier,
                selector.options.len()
            );
        }

        Ok(())
    }

    /// Qualifiers declared by the selectors, in file order.
    pub fn qualifiers(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(|s| s.qualifier.as_str())
    }
}
