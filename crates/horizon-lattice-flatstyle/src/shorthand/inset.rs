//! `inset` shorthand.

use super::{dimension_sequence, Expansion, Longhand};
use crate::types::{is_dimension_value, StyleValue};
use crate::{Error, Result};

pub(super) const LENGTHS: &[usize] = &[1, 2, 3, 4];

/// Expand an `inset` value into `top`, `right`, `bottom` and `left`.
///
/// A single dimension applies to every side. Sequences follow the CSS edge
/// order: `[all]`, `[vertical, horizontal]`, `[top, horizontal, bottom]`,
/// `[top, right, bottom, left]`.
pub fn expand_inset(key: &str, value: &StyleValue) -> Result<Expansion> {
    let (top, right, bottom, left) = match value {
        StyleValue::Sequence(items) => match dimension_sequence(key, items, LENGTHS)? {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            other => return Err(Error::invalid_length(key, LENGTHS, other.len())),
        },
        single if is_dimension_value(single) => (single, single, single, single),
        other => return Err(Error::invalid_value(key, other.describe())),
    };

    Ok(Expansion::from_entries([
        (Longhand::Top, top),
        (Longhand::Right, right),
        (Longhand::Bottom, bottom),
        (Longhand::Left, left),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{px, seq};
    use crate::types::{AnimatedValue, StyleMap};

    fn sides(expansion: Expansion) -> [StyleValue; 4] {
        [Longhand::Top, Longhand::Right, Longhand::Bottom, Longhand::Left]
            .map(|side| expansion.get(side).cloned().unwrap())
    }

    #[test]
    fn single_value_applies_to_all_sides() {
        for value in [
            px(8),
            StyleValue::from("auto"),
            StyleValue::from("25%"),
            StyleValue::Null,
            AnimatedValue::new(2.0).handle().into(),
        ] {
            let expansion = expand_inset("inset", &value).unwrap();
            assert_eq!(expansion.len(), 4);
            assert_eq!(sides(expansion), [value.clone(), value.clone(), value.clone(), value]);
        }
    }

    #[test]
    fn one_element_sequence() {
        let expansion = expand_inset("inset", &seq(&[3])).unwrap();
        assert_eq!(sides(expansion), [px(3), px(3), px(3), px(3)]);
    }

    #[test]
    fn two_element_sequence() {
        let expansion = expand_inset("inset", &seq(&[1, 2])).unwrap();
        assert_eq!(sides(expansion), [px(1), px(2), px(1), px(2)]);
    }

    #[test]
    fn three_element_sequence() {
        let expansion = expand_inset("inset", &seq(&[1, 2, 3])).unwrap();
        assert_eq!(sides(expansion), [px(1), px(2), px(3), px(2)]);
    }

    #[test]
    fn four_element_sequence() {
        let value = StyleValue::from(vec![
            px(5),
            "auto".into(),
            "10%".into(),
            StyleValue::Null,
        ]);
        let expansion = expand_inset("inset", &value).unwrap();
        assert_eq!(
            sides(expansion),
            [px(5), "auto".into(), "10%".into(), StyleValue::Null]
        );
    }

    #[test]
    fn rejects_bad_lengths() {
        assert_eq!(
            expand_inset("inset", &seq(&[1, 2, 3, 4, 5])),
            Err(Error::invalid_length("inset", LENGTHS, 5))
        );
        assert_eq!(
            expand_inset("inset", &StyleValue::Sequence(vec![])),
            Err(Error::invalid_length("inset", LENGTHS, 0))
        );
    }

    #[test]
    fn rejects_non_dimension_values() {
        let err = expand_inset("inset", &StyleValue::from("wide")).unwrap_err();
        assert!(matches!(err, Error::InvalidShorthandValue { ref key, .. } if key == "inset"));

        let value = StyleValue::Sequence(vec![px(1), true.into()]);
        let err = expand_inset("inset", &value).unwrap_err();
        assert_eq!(err, Error::invalid_value("inset", "boolean true"));

        let err = expand_inset("inset", &StyleValue::Map(StyleMap::new())).unwrap_err();
        assert_eq!(err, Error::invalid_value("inset", "map with 0 key(s)"));

        let err = expand_inset("inset", &StyleValue::from("٣٠%")).unwrap_err();
        assert!(matches!(err, Error::InvalidShorthandValue { .. }));
    }
}
