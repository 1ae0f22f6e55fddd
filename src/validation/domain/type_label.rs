//! Canonical runtime type labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PropValue;

/// Canonical category of a runtime value.
///
/// Ordered sequences and keyed collections always receive distinct labels,
/// even though a weakly typed host reports both as `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeLabel {
    /// Text values.
    String,
    /// Double-precision numbers.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Ordered, indexable sequences.
    Array,
    /// Keyed collections and `null`.
    Object,
    /// The absent value.
    Undefined,
    /// Callable references.
    Function,
    /// Unique symbols.
    Symbol,
    /// Arbitrary-size integers.
    Bigint,
}

impl TypeLabel {
    /// Classifies a value into its canonical label.
    ///
    /// Total over every [`PropValue`]. `null` classifies as
    /// [`TypeLabel::Object`], matching native host reflection, while arrays
    /// are always split out as [`TypeLabel::Array`].
    #[must_use]
    pub const fn of(value: &PropValue) -> Self {
        match value {
            PropValue::Undefined => Self::Undefined,
            PropValue::Null | PropValue::Object(_) => Self::Object,
            PropValue::Bool(_) => Self::Boolean,
            PropValue::Number(_) => Self::Number,
            PropValue::BigInt(_) => Self::Bigint,
            PropValue::String(_) => Self::String,
            PropValue::Symbol(_) => Self::Symbol,
            PropValue::Function(_) => Self::Function,
            PropValue::Array(_) => Self::Array,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Undefined => "undefined",
            Self::Function => "function",
            Self::Symbol => "symbol",
            Self::Bigint => "bigint",
        }
    }

    /// Returns `true` for labels whose values may hold entries.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

/// Classifies a value into its canonical [`TypeLabel`].
///
/// Shorthand for [`TypeLabel::of`].
#[must_use]
pub const fn classify(value: &PropValue) -> TypeLabel {
    TypeLabel::of(value)
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown type label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type label: {0}")]
pub struct ParseTypeLabelError(pub String);

impl TryFrom<&str> for TypeLabel {
    type Error = ParseTypeLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "undefined" => Ok(Self::Undefined),
            "function" => Ok(Self::Function),
            "symbol" => Ok(Self::Symbol),
            "bigint" => Ok(Self::Bigint),
            _ => Err(ParseTypeLabelError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for TypeLabel {
    type Err = ParseTypeLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}
