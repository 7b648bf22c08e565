//! The numeric supertype.

use serde::Serialize;
use std::fmt;

/// A number of one of the six signed numeric kinds.
///
/// Resolving `Number` from a fixture first picks the kind uniformly with
/// one draw, in the order of the variants below, then resolves that
/// concrete type.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Float(f32),
    Long(i64),
    Double(f64),
}

/// Number of concrete kinds a [`Number`] can take.
pub(crate) const NUMBER_KINDS: i32 = 6;

impl Number {
    /// Widen to `f64`. Longs beyond 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Byte(v) => f64::from(v),
            Number::Short(v) => f64::from(v),
            Number::Int(v) => f64::from(v),
            Number::Float(v) => f64::from(v),
            Number::Long(v) => v as f64,
            Number::Double(v) => v,
        }
    }

    /// Name of the concrete kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Number::Byte(_) => "byte",
            Number::Short(_) => "short",
            Number::Int(_) => "int",
            Number::Float(_) => "float",
            Number::Long(_) => "long",
            Number::Double(_) => "double",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Byte(v) => write!(f, "{v}"),
            Number::Short(v) => write!(f, "{v}"),
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v}"),
            Number::Long(v) => write!(f, "{v}"),
            Number::Double(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_f64() {
        assert_eq!(Number::Byte(-3).as_f64(), -3.0);
        assert_eq!(Number::Long(1 << 20).as_f64(), 1_048_576.0);
        assert_eq!(Number::Double(0.5).as_f64(), 0.5);
    }

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Number::Double(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(Number::Short(12).kind(), "short");
        assert_eq!(Number::Short(12).to_string(), "12");
    }
}
