//! A metric value that may be mathematically undefined.

use core::fmt;

use serde::{Serialize, Serializer};

/// Printed in place of a number when a metric is undefined.
pub const NOT_DEFINED: &str = "not defined";

/// Why a [`Score`] has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undefined {
    /// Only one binary class is present in the truth vector.
    SingleClass,
    /// The truth vector has no positive samples.
    NoPositives,
    /// No samples carry a confidence to rank by.
    NoScores,
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SingleClass => "only one class present in truth",
            Self::NoPositives => "no positive samples in truth",
            Self::NoScores => "no samples with a confidence",
        })
    }
}

/// A metric value, or an explicit marker that it cannot be computed.
///
/// Undefined metrics are never coerced to zero or NaN. They display as
/// [`NOT_DEFINED`] and serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    Defined(f64),
    Undefined(Undefined),
}

impl Score {
    /// The numeric value, if defined.
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(v),
            Self::Undefined(_) => None,
        }
    }

    pub const fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(v) => write!(f, "{v:?}"),
            Self::Undefined(_) => f.write_str(NOT_DEFINED),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Defined(v) => serializer.serialize_some(v),
            Self::Undefined(_) => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_displays_sentinel() {
        assert_eq!(Score::Undefined(Undefined::SingleClass).to_string(), "not defined");
        assert_eq!(Score::Defined(0.75).to_string(), "0.75");
        assert_eq!(Score::Defined(1.0).to_string(), "1.0");
    }

    #[test]
    fn value_accessor() {
        assert_eq!(Score::Defined(1.0).value(), Some(1.0));
        assert_eq!(Score::Undefined(Undefined::NoScores).value(), None);
        assert!(!Score::Undefined(Undefined::NoPositives).is_defined());
    }
}
