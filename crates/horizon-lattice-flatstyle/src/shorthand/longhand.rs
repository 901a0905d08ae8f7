//! Explicit output property names.

use std::fmt;

/// A property produced by expanding a shorthand.
///
/// Output names are enumerated rather than assembled from the shorthand
/// name, so every property a shorthand can emit is visible here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Longhand {
    // === Inset ===
    Top,
    Right,
    Bottom,
    Left,

    // === Margin ===
    Margin,
    MarginVertical,
    MarginHorizontal,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,

    // === Padding ===
    Padding,
    PaddingVertical,
    PaddingHorizontal,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // === Gap ===
    Gap,
    RowGap,
    ColumnGap,
}

impl Longhand {
    /// The property name as understood by the native style engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Margin => "margin",
            Self::MarginVertical => "marginVertical",
            Self::MarginHorizontal => "marginHorizontal",
            Self::MarginTop => "marginTop",
            Self::MarginRight => "marginRight",
            Self::MarginBottom => "marginBottom",
            Self::MarginLeft => "marginLeft",
            Self::Padding => "padding",
            Self::PaddingVertical => "paddingVertical",
            Self::PaddingHorizontal => "paddingHorizontal",
            Self::PaddingTop => "paddingTop",
            Self::PaddingRight => "paddingRight",
            Self::PaddingBottom => "paddingBottom",
            Self::PaddingLeft => "paddingLeft",
            Self::Gap => "gap",
            Self::RowGap => "rowGap",
            Self::ColumnGap => "columnGap",
        }
    }
}

impl fmt::Display for Longhand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
