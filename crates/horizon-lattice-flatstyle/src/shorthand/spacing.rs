//! `margin` and `padding` shorthands.

use super::{dimension_sequence, Expansion, Longhand};
use crate::types::{is_dimension_value, StyleValue};
use crate::{Error, Result};

pub(super) const LENGTHS: &[usize] = &[1, 2, 3, 4];

/// Which spacing shorthand is being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// Outer spacing.
    Margin,
    /// Inner spacing.
    Padding,
}

/// Slot a spacing value is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    All,
    Vertical,
    Horizontal,
    Top,
    Right,
    Bottom,
    Left,
}

impl Spacing {
    /// The shorthand's property name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Margin => "margin",
            Self::Padding => "padding",
        }
    }

    fn longhand(&self, slot: Slot) -> Longhand {
        match (self, slot) {
            (Self::Margin, Slot::All) => Longhand::Margin,
            (Self::Margin, Slot::Vertical) => Longhand::MarginVertical,
            (Self::Margin, Slot::Horizontal) => Longhand::MarginHorizontal,
            (Self::Margin, Slot::Top) => Longhand::MarginTop,
            (Self::Margin, Slot::Right) => Longhand::MarginRight,
            (Self::Margin, Slot::Bottom) => Longhand::MarginBottom,
            (Self::Margin, Slot::Left) => Longhand::MarginLeft,
            (Self::Padding, Slot::All) => Longhand::Padding,
            (Self::Padding, Slot::Vertical) => Longhand::PaddingVertical,
            (Self::Padding, Slot::Horizontal) => Longhand::PaddingHorizontal,
            (Self::Padding, Slot::Top) => Longhand::PaddingTop,
            (Self::Padding, Slot::Right) => Longhand::PaddingRight,
            (Self::Padding, Slot::Bottom) => Longhand::PaddingBottom,
            (Self::Padding, Slot::Left) => Longhand::PaddingLeft,
        }
    }
}

/// Expand a `margin` or `padding` value.
///
/// Unlike `inset`, a one-element sequence stays a bare `margin`/`padding`
/// property, since the native engine supports that shorthand directly. A
/// three-element sequence sets top, horizontal and bottom.
pub fn expand_spacing(spacing: Spacing, value: &StyleValue) -> Result<Expansion> {
    expand_spacing_as(spacing.name(), spacing, value)
}

/// Expand a `margin` or `padding` value, reporting errors against `key`.
pub(crate) fn expand_spacing_as(
    key: &str,
    spacing: Spacing,
    value: &StyleValue,
) -> Result<Expansion> {
    let name = |slot| spacing.longhand(slot);

    match value {
        StyleValue::Sequence(items) => match dimension_sequence(key, items, LENGTHS)? {
            [all] => Ok(Expansion::from_entries([(name(Slot::All), all)])),
            [vertical, horizontal] => Ok(Expansion::from_entries([
                (name(Slot::Vertical), vertical),
                (name(Slot::Horizontal), horizontal),
            ])),
            [top, horizontal, bottom] => Ok(Expansion::from_entries([
                (name(Slot::Top), top),
                (name(Slot::Horizontal), horizontal),
                (name(Slot::Bottom), bottom),
            ])),
            [top, right, bottom, left] => Ok(Expansion::from_entries([
                (name(Slot::Top), top),
                (name(Slot::Right), right),
                (name(Slot::Bottom), bottom),
                (name(Slot::Left), left),
            ])),
            other => Err(Error::invalid_length(key, LENGTHS, other.len())),
        },
        single if is_dimension_value(single) => Ok(Expansion::from_entries([
            (name(Slot::Vertical), single),
            (name(Slot::Horizontal), single),
        ])),
        other => Err(Error::invalid_value(key, other.describe())),
    }
}
