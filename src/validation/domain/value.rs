//! Dynamically typed property values.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};

/// A value passed into a component as a property.
///
/// The model covers every category a weakly typed host can hand over,
/// including the ones with no JSON form (`undefined`, functions, symbols and
/// big integers).
///
/// Equality is strict: values of different variants are never equal, and
/// `NaN` is not equal to itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    /// The absent value.
    #[default]
    Undefined,
    /// The explicit null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-size integer.
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol with an optional description.
    Symbol(Option<String>),
    /// A callable reference, identified by name.
    Function(String),
    /// An ordered, indexable sequence.
    Array(Vec<Self>),
    /// A keyed collection.
    Object(BTreeMap<String, Self>),
}

impl PropValue {
    /// Creates a string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a function reference value.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    /// Creates a symbol value with a description.
    #[must_use]
    pub fn symbol(description: impl Into<String>) -> Self {
        Self::Symbol(Some(description.into()))
    }

    /// Creates an array from any iterator of convertible items.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = impl Into<Self>>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates an object from key/value pairs.
    #[must_use]
    pub fn object(
        entries: impl IntoIterator<Item = (impl Into<String>, impl Into<Self>)>,
    ) -> Self {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the string slice when the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` only for the exact empty string.
    #[must_use]
    pub fn is_empty_string(&self) -> bool {
        self.as_str().is_some_and(str::is_empty)
    }

    /// Returns the enumerable entries of a collection as `(key, value)`
    /// pairs. Array keys are their indices.
    ///
    /// Scalars and `null` have no entries.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, &Self)> {
        match self {
            Self::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            Self::Object(map) => map.iter().map(|(key, item)| (key.clone(), item)).collect(),
            _ => Vec::new(),
        }
    }

    /// Renders the value the way it appears nested inside a collection,
    /// with strings quoted.
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::String(text) => format!("{text:?}"),
            other => other.to_string(),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if uses_exponent(value.abs()) {
        let rendered = format!("{value:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        }
    } else {
        value.to_string()
    }
}

/// Magnitudes from `1e21` upward, and non-zero ones below `1e-6`, print in
/// exponent form.
const fn uses_exponent(magnitude: f64) -> bool {
    magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6)
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => f.write_str(&format_number(*number)),
            Self::BigInt(number) => write!(f, "{number}n"),
            Self::String(text) => f.write_str(text),
            Self::Symbol(Some(description)) => write!(f, "Symbol({description})"),
            Self::Symbol(None) => f.write_str("Symbol()"),
            Self::Function(name) if name.is_empty() => f.write_str("[Function (anonymous)]"),
            Self::Function(name) => write!(f, "[Function: {name}]"),
            Self::Array(items) => {
                let rendered: Vec<String> = items.iter().map(Self::inspect).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Self::Object(map) if map.is_empty() => f.write_str("{}"),
            Self::Object(map) => {
                let rendered: Vec<String> = map
                    .iter()
                    .map(|(key, item)| format!("{key}: {}", item.inspect()))
                    .collect();
                write!(f, "{{ {} }}", rendered.join(", "))
            }
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i128> for PropValue {
    fn from(value: i128) -> Self {
        Self::BigInt(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for PropValue {
    fn from(value: Vec<T>) -> Self {
        Self::array(value)
    }
}

fn from_json_number(number: &Number) -> PropValue {
    if let Some(float) = number.as_f64() {
        return PropValue::Number(float);
    }
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
        .map_or(PropValue::Undefined, PropValue::BigInt)
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => from_json_number(&number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}
