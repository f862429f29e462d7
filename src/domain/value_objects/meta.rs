//! Loosely-typed scalar and metadata values

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that callers may give either as a number or as a string.
///
/// The legacy array grammar tags the two differently (`i` vs `s`), so the
/// submitted shape is kept instead of normalizing to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyScalar {
    Int(i64),
    Str(String),
}

impl LegacyScalar {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Type tag used by the legacy array grammar
    pub fn type_tag(&self) -> char {
        match self {
            Self::Int(_) => 'i',
            Self::Str(_) => 's',
        }
    }
}

impl fmt::Display for LegacyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Str(value) => f.write_str(value),
        }
    }
}

/// A commerce value given either as a number or as text.
///
/// Numbers render in their shortest decimal form, text is written as
/// submitted, so `""` and `"19.99"` pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl Default for NumberOrText {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for NumberOrText {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Value side of a `wp:postmeta` pair
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Text(String),
    /// Rendered through the legacy array encoder
    Sequence(Vec<i64>),
    /// Rendered as an empty `wp:meta_value`
    Null,
}

impl MetaValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Shortest decimal rendering, `0.0` prints as `0` and `19.5` as `19.5`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
