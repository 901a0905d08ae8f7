//! Style tree value types.
//!
//! A style tree is a [`StyleMap`] whose entries are either declarations
//! (scalars, shorthand sequences, compound values) or nested selector blocks.
//! Flattening produces a [`FlatStyleMap`] keyed by scoped selector name.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_flatstyle::prelude::*;
//! use serde_json::json;
//!
//! let value = StyleValue::from(json!({ "padding": [10, 20] }));
//! let block = value.as_map().unwrap();
//! assert_eq!(
//!     block["padding"],
//!     StyleValue::Sequence(vec![StyleValue::Number(10.0), StyleValue::Number(20.0)]),
//! );
//! ```

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::animated::AnimatedHandle;

/// Property name to value mapping for a single selector block.
///
/// Entries keep their insertion order; declarations are applied in that
/// order, so a later declaration overrides an earlier one.
pub type StyleMap = IndexMap<String, StyleValue>;

/// The flattened output: selector name to explicit properties.
pub type FlatStyleMap = BTreeMap<String, StyleMap>;

/// Scoped selector name to the properties one shared block contributes.
///
/// Built while processing a single comma-joined selector block and merged
/// into a [`FlatStyleMap`] afterwards.
pub type SharedStyleMap = BTreeMap<String, StyleMap>;

/// A value in a style tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleValue {
    /// Explicit null.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Numeric value (density-independent pixels, ratios, ...).
    Number(f64),
    /// String value (`"auto"`, `"50%"`, colors, enum keywords, ...).
    String(String),
    /// Ordered sequence, used by shorthand properties.
    Sequence(Vec<StyleValue>),
    /// Nested mapping: a selector block or a compound property value.
    Map(StyleMap),
    /// Value driven by an animation.
    Animated(AnimatedHandle),
}

impl StyleValue {
    /// Get the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[StyleValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the mapping if this is a nested map.
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => format!("boolean {b}"),
            Self::Number(n) => format!("number {n}"),
            Self::String(s) => format!("string {s:?}"),
            Self::Sequence(items) => format!("sequence of {} element(s)", items.len()),
            Self::Map(map) => format!("map with {} key(s)", map.len()),
            Self::Animated(_) => "animated value".to_string(),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Animated(handle) => write!(f, "<animated {}>", handle.value()),
        }
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(i32, i64, u32, u64, f32, f64);

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<StyleMap> for StyleValue {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

impl From<AnimatedHandle> for StyleValue {
    fn from(handle: AnimatedHandle) -> Self {
        Self::Animated(handle)
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // Numbers outside f64 range do not occur in style trees.
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for StyleValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::Animated(_) => Err(S::Error::custom("animated values cannot be serialized")),
        }
    }
}
