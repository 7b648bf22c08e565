//! Generators for common third-party types.
//!
//! `fixture-core` only knows about primitives and strings. This crate adds
//! generators for `chrono` date/time types, `chrono-tz` time zones and
//! `uuid` UUIDs, registered as custom generators on a [`Configuration`].
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use fixture_core::create_fixture_with;
//! use uuid::Uuid;
//!
//! let fixture = create_fixture_with(|config| {
//!     config.set_seed(42);
//!     fixture_ext::register_all(config)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let id = fixture.value::<Uuid>(None).unwrap();
//! let created = fixture.value::<DateTime<Utc>>(None).unwrap();
//! assert_eq!(id.get_version_num(), 4);
//! assert!(created.timestamp() >= 0);
//! ```

pub mod datetime;
pub mod uuid;

use fixture_core::{Configuration, Result};

pub use datetime::{InstantGeneratorFactory, ZonedDateTimeFactory};

/// Register every generator this crate provides.
pub fn register_all(configuration: &mut Configuration) -> Result<&mut Configuration> {
    datetime::register(configuration)?;
    uuid::register(configuration);
    Ok(configuration)
}
