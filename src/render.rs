//! Rendering fixture values as JSON.

use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::ValueEnum;
use fixture_core::{Fixture, Number, Qualifier};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Kinds of value the CLI can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Ubyte,
    Ushort,
    Uint,
    Ulong,
    /// One of the six signed numeric kinds, chosen per value
    Number,
    /// UTC instant, RFC 3339
    Instant,
    Date,
    /// IANA time zone name
    Timezone,
    /// Instant in a random time zone, RFC 3339
    Zoned,
    /// Milliseconds
    Duration,
    Uuid,
}

/// Resolve one value of `kind` and convert it to JSON.
///
/// With `nullable`, the value is `null` half of the time.
pub fn render(
    fixture: &Fixture,
    kind: ValueKind,
    qualifier: Option<&Qualifier>,
    nullable: bool,
) -> anyhow::Result<Value> {
    match kind {
        ValueKind::Bool => draw::<bool, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Byte => draw::<i8, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Short => draw::<i16, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Int => draw::<i32, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Long => draw::<i64, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Float => draw::<f32, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Double => draw::<f64, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Char => draw::<char, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::String => draw::<String, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Ubyte => draw::<u8, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Ushort => draw::<u16, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Uint => draw::<u32, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Ulong => draw::<u64, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Number => draw::<Number, _>(fixture, qualifier, nullable, |v| v),
        ValueKind::Instant => {
            draw::<DateTime<Utc>, _>(fixture, qualifier, nullable, |v| v.to_rfc3339())
        }
        ValueKind::Date => draw::<NaiveDate, _>(fixture, qualifier, nullable, |v| v.to_string()),
        ValueKind::Timezone => draw::<Tz, _>(fixture, qualifier, nullable, |v| v.name()),
        ValueKind::Zoned => {
            draw::<DateTime<Tz>, _>(fixture, qualifier, nullable, |v| v.to_rfc3339())
        }
        ValueKind::Duration => {
            draw::<Duration, _>(fixture, qualifier, nullable, |v| v.num_milliseconds())
        }
        ValueKind::Uuid => draw::<Uuid, _>(fixture, qualifier, nullable, |v| v.to_string()),
    }
}

fn draw<T, S>(
    fixture: &Fixture,
    qualifier: Option<&Qualifier>,
    nullable: bool,
    present: impl FnOnce(T) -> S,
) -> anyhow::Result<Value>
where
    T: 'static,
    S: Serialize,
{
    let value = if nullable {
        fixture.nullable::<T>(qualifier)?
    } else {
        Some(fixture.value::<T>(qualifier)?)
    };

    serde_json::to_value(value.map(present))
        .with_context(|| format!("Failed to serialize {}", std::any::type_name::<T>()))
}
