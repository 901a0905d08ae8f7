//! Shared helpers for unit tests.

use crate::types::{StyleMap, StyleValue};

pub(crate) fn px(value: i32) -> StyleValue {
    StyleValue::from(value)
}

pub(crate) fn seq(values: &[i32]) -> StyleValue {
    StyleValue::Sequence(values.iter().copied().map(px).collect())
}

pub(crate) fn block<const N: usize>(entries: [(&str, StyleValue); N]) -> StyleMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
