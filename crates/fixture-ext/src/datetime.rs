//! Date and time generators.
//!
//! Registers:
//!
//! - `DateTime<Utc>` - instants between 1970-01-01 and 2100-01-01
//! - `NaiveDate` - calendar dates in the same span
//! - `chrono::Duration` - durations under one year, millisecond precision
//! - `chrono_tz::Tz` - a selector over every IANA time zone
//! - `DateTime<Tz>` - an instant in a zone, composed from the two generators above

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use fixture_core::{
    Configuration, DependentGeneratorFactory, FixtureError, Generator, GeneratorFactory,
    GeneratorRegistry, Qualifier, RandomSource, Result, SharedRandom,
};

/// Upper bound (exclusive) of generated instants: 2100-01-01T00:00:00Z.
pub const MAX_EPOCH_SECONDS: i64 = 4_102_444_800;

/// Upper bound (exclusive) of generated durations: 365 days.
pub const MAX_DURATION_MILLIS: i64 = 86_400_000 * 365;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Uniform instants in `[start, end)`, with nanosecond precision.
///
/// One long draw per instant, as nanoseconds since the Unix epoch.
pub struct InstantGenerator {
    random: SharedRandom,
    start_nanos: i64,
    end_nanos: i64,
}

impl Generator<DateTime<Utc>> for InstantGenerator {
    fn generate(&self) -> DateTime<Utc> {
        let nanos = self.random.next_long_range(self.start_nanos, self.end_nanos);
        DateTime::from_timestamp_nanos(nanos)
    }
}

/// Factory for [`InstantGenerator`] over a fixed span.
#[derive(Debug, Clone)]
pub struct InstantGeneratorFactory {
    start_nanos: i64,
    end_nanos: i64,
}

impl InstantGeneratorFactory {
    /// Instants between the Unix epoch and 2100-01-01.
    pub fn new() -> Self {
        Self {
            start_nanos: 0,
            end_nanos: MAX_EPOCH_SECONDS * NANOS_PER_SECOND,
        }
    }

    /// Instants between two RFC 3339 timestamps or `%Y-%m-%d` dates.
    ///
    /// Both bounds must lie between 1677-09-21 and 2262-04-11, the span of
    /// nanosecond timestamps that fit in an `i64`.
    pub fn between(start: &str, end: &str) -> Result<Self> {
        let start_nanos = parse_timestamp_nanos(start)?;
        let end_nanos = parse_timestamp_nanos(end)?;

        if start_nanos >= end_nanos {
            return Err(FixtureError::invalid_argument(format!(
                "Empty instant range: {start} is not before {end}"
            )));
        }

        Ok(Self {
            start_nanos,
            end_nanos,
        })
    }
}

impl Default for InstantGeneratorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory<DateTime<Utc>> for InstantGeneratorFactory {
    fn create(&self, random: SharedRandom) -> Box<dyn Generator<DateTime<Utc>>> {
        Box::new(InstantGenerator {
            random,
            start_nanos: self.start_nanos,
            end_nanos: self.end_nanos,
        })
    }
}

/// Parse a timestamp string in various formats.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn parse_timestamp_nanos(s: &str) -> Result<i64> {
    parse_timestamp(s)
        .ok_or_else(|| FixtureError::invalid_argument(format!("Invalid timestamp: {s}")))?
        .timestamp_nanos_opt()
        .ok_or_else(|| FixtureError::invalid_argument(format!("Timestamp out of range: {s}")))
}

pub fn generate_date(random: &dyn RandomSource) -> NaiveDate {
    let seconds = random.next_long_range(0, MAX_EPOCH_SECONDS);
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

pub fn generate_duration(random: &dyn RandomSource) -> Duration {
    Duration::milliseconds(random.next_long_range(0, MAX_DURATION_MILLIS))
}

/// Composes the registered instant and time zone generators.
pub struct ZonedDateTimeFactory;

impl DependentGeneratorFactory<DateTime<Tz>> for ZonedDateTimeFactory {
    fn create(
        &self,
        _random: SharedRandom,
        generators: &GeneratorRegistry,
    ) -> Result<Box<dyn Generator<DateTime<Tz>>>> {
        let instants = generators.get::<DateTime<Utc>>(None)?;
        let zones = generators.get::<Tz>(None)?;
        Ok(Box::new(move || instants.generate().with_timezone(&zones.generate())))
    }
}

/// Register an instant generator over `[start, end)` under `qualifier`.
pub fn register_instant_range<'c>(
    configuration: &'c mut Configuration,
    start: &str,
    end: &str,
    qualifier: &Qualifier,
) -> Result<&'c mut Configuration> {
    let factory = InstantGeneratorFactory::between(start, end)?;
    Ok(configuration.add_generator::<DateTime<Utc>, _>(factory, Some(qualifier)))
}

/// Register every date and time generator.
pub fn register(configuration: &mut Configuration) -> Result<&mut Configuration> {
    configuration
        .add_generator::<DateTime<Utc>, _>(InstantGeneratorFactory::new(), None)
        .add_generator::<NaiveDate, _>(
            |random: SharedRandom| move || generate_date(random.as_ref()),
            None,
        )
        .add_generator::<Duration, _>(
            |random: SharedRandom| move || generate_duration(random.as_ref()),
            None,
        )
        .use_selector(chrono_tz::TZ_VARIANTS.iter().copied(), None)?
        .add_dependent_generator::<DateTime<Tz>, _>(ZonedDateTimeFactory, None);

    tracing::debug!("Registered date/time generators");
    Ok(configuration)
}
