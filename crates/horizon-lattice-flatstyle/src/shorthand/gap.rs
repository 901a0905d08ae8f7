//! `gap` shorthand.

use super::{Expansion, Longhand};
use crate::types::StyleValue;
use crate::{Error, Result};

pub(super) const LENGTHS: &[usize] = &[1, 2];

/// Expand a `gap` value.
///
/// Gap only accepts plain numbers: `n` and `[n]` set `gap`, `[row, column]`
/// sets `rowGap` and `columnGap`.
pub fn expand_gap(key: &str, value: &StyleValue) -> Result<Expansion> {
    match value {
        StyleValue::Number(_) => Ok(Expansion::from_entries([(Longhand::Gap, value)])),
        StyleValue::Sequence(items) => {
            if !LENGTHS.contains(&items.len()) {
                return Err(Error::invalid_length(key, LENGTHS, items.len()));
            }
            if let Some(bad) = items.iter().find(|item| item.as_number().is_none()) {
                return Err(Error::invalid_value(key, bad.describe()));
            }
            match items.as_slice() {
                [gap] => Ok(Expansion::from_entries([(Longhand::Gap, gap)])),
                [row, column] => Ok(Expansion::from_entries([
                    (Longhand::RowGap, row),
                    (Longhand::ColumnGap, column),
                ])),
                other => Err(Error::invalid_length(key, LENGTHS, other.len())),
            }
        }
        other => Err(Error::invalid_value(key, other.describe())),
    }
}
