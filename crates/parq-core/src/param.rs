//! Bind-parameter and scalar-result kinds.
//!
//! The original design dispatched on the runtime type of each bind value;
//! here the supported set is a closed enum, one arm per kind, so an
//! unsupported bind value is unrepresentable. The result-type tag keeps the
//! open failure mode: asking the default mapper for a kind outside the set
//! fails with `UnsupportedMapping`.

use chrono::NaiveDate;

/// Dates cross the SQL boundary as ISO-8601 text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One positional bind value. Bound in list order to `?` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(String),
    Int(i32),
    BigInt(i64),
    Date(NaiveDate),
}

impl Param {
    /// Kind name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Param::Text(_) => "text",
            Param::Int(_) => "integer",
            Param::BigInt(_) => "big integer",
            Param::Date(_) => "date",
        }
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Param::Int(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::BigInt(value)
    }
}

impl From<NaiveDate> for Param {
    fn from(value: NaiveDate) -> Self {
        Param::Date(value)
    }
}

/// Result-type tag for the default single-column mapper.
///
/// `Blob` is deliberately outside the mapped set: requesting it exercises
/// the `UnsupportedMapping` path, matching the original's behavior for any
/// class without a mapper arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Int,
    BigInt,
    Text,
    Date,
    Blob,
}

impl ScalarKind {
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Int => "integer",
            ScalarKind::BigInt => "big integer",
            ScalarKind::Text => "text",
            ScalarKind::Date => "date",
            ScalarKind::Blob => "blob",
        }
    }
}

/// A single-column value produced by the default mapper.
/// Convenience for scalar queries (`SELECT count(*)`), not a general ORM.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i32),
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
}

impl Scalar {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_big_int(&self) -> Option<i64> {
        match self {
            Scalar::BigInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Scalar::Date(v) => Some(*v),
            _ => None,
        }
    }
}
