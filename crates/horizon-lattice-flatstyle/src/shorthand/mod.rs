//! Shorthand property expansion.
//!
//! Native style engines want explicit per-edge properties, while authors
//! prefer compact shorthands. This module expands the four supported
//! shorthands:
//!
//! | Shorthand | Accepts | Emits |
//! |-----------|---------|-------|
//! | `inset` | dimension or 1-4 dimensions | `top`, `right`, `bottom`, `left` |
//! | `margin` | dimension or 1-4 dimensions | `margin*` |
//! | `padding` | dimension or 1-4 dimensions | `padding*` |
//! | `gap` | number or 1-2 numbers | `gap`, `rowGap`, `columnGap` |
//!
//! # Example
//!
//! ```
//! use horizon_lattice_flatstyle::prelude::*;
//!
//! let value = StyleValue::from(vec![10.0, 20.0]);
//! let expansion = Shorthand::Padding.expand("padding", &value)?;
//! assert_eq!(
//!     expansion.get(Longhand::PaddingVertical),
//!     Some(&StyleValue::Number(10.0)),
//! );
//! assert_eq!(
//!     expansion.get(Longhand::PaddingHorizontal),
//!     Some(&StyleValue::Number(20.0)),
//! );
//! # Ok::<(), horizon_lattice_flatstyle::Error>(())
//! ```

mod gap;
mod inset;
mod longhand;
mod spacing;

pub use gap::expand_gap;
pub use inset::expand_inset;
pub use longhand::Longhand;
pub use spacing::{expand_spacing, Spacing};

use spacing::expand_spacing_as;

use crate::types::{is_dimension_value, StyleMap, StyleValue};
use crate::{targets, Error, Result};

/// The shorthand properties this crate knows how to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    /// `inset`: absolute position offsets.
    Inset,
    /// `margin`: outer spacing.
    Margin,
    /// `padding`: inner spacing.
    Padding,
    /// `gap`: spacing between flex children.
    Gap,
}

impl Shorthand {
    /// Look up a shorthand by property name.
    pub fn from_property(name: &str) -> Option<Self> {
        match name {
            "inset" => Some(Self::Inset),
            "margin" => Some(Self::Margin),
            "padding" => Some(Self::Padding),
            "gap" => Some(Self::Gap),
            _ => None,
        }
    }

    /// The shorthand's property name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inset => "inset",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Gap => "gap",
        }
    }

    /// Sequence lengths accepted by this shorthand.
    pub fn accepted_lengths(&self) -> &'static [usize] {
        match self {
            Self::Inset => inset::LENGTHS,
            Self::Margin | Self::Padding => spacing::LENGTHS,
            Self::Gap => gap::LENGTHS,
        }
    }

    /// Expand `value`, reporting errors against `key`.
    pub fn expand(&self, key: &str, value: &StyleValue) -> Result<Expansion> {
        let expansion = match self {
            Self::Inset => expand_inset(key, value),
            Self::Margin => expand_spacing_as(key, Spacing::Margin, value),
            Self::Padding => expand_spacing_as(key, Spacing::Padding, value),
            Self::Gap => expand_gap(key, value),
        }?;
        tracing::trace!(
            target: targets::SHORTHAND,
            key,
            properties = expansion.len(),
            "expanded shorthand"
        );
        Ok(expansion)
    }
}

/// The explicit properties a shorthand expands to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expansion {
    entries: Vec<(Longhand, StyleValue)>,
}

impl Expansion {
    pub(crate) fn from_entries<const N: usize>(entries: [(Longhand, &StyleValue); N]) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(property, value)| (property, value.clone()))
                .collect(),
        }
    }

    /// Get the value assigned to a property.
    pub fn get(&self, property: Longhand) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    /// Iterate over the emitted properties in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Longhand, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }

    /// Number of emitted properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every property into `target`, overwriting existing values.
    pub fn merge_into(self, target: &mut StyleMap) {
        for (property, value) in self.entries {
            target.insert(property.as_str().to_string(), value);
        }
    }

    /// Collect the expansion into a property map.
    pub fn into_style_map(self) -> StyleMap {
        let mut map = StyleMap::new();
        self.merge_into(&mut map);
        map
    }
}

impl IntoIterator for Expansion {
    type Item = (Longhand, StyleValue);
    type IntoIter = std::vec::IntoIter<(Longhand, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Validate a shorthand sequence: length first, then every element.
pub(crate) fn dimension_sequence<'a>(
    key: &str,
    items: &'a [StyleValue],
    expected: &'static [usize],
) -> Result<&'a [StyleValue]> {
    if !expected.contains(&items.len()) {
        return Err(Error::invalid_length(key, expected, items.len()));
    }
    if let Some(bad) = items.iter().find(|item| !is_dimension_value(item)) {
        return Err(Error::invalid_value(key, bad.describe()));
    }
    Ok(items)
}
