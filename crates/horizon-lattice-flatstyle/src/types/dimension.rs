//! Dimension value classification.
//!
//! Shorthand properties only accept values a native layout engine can place
//! on an edge: plain numbers, `"auto"`, percentage strings, null (reset) and
//! animated handles.

use std::sync::LazyLock;

use regex::Regex;

use super::animated::AnimatedHandle;
use super::value::StyleValue;

static PERCENTAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?%?$").expect("percentage pattern is valid")
});

/// A value accepted by spacing and inset shorthands.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Plain number.
    Number(f64),
    /// The `"auto"` keyword.
    Auto,
    /// Numeric string with an optional trailing `%`, kept verbatim.
    Percentage(String),
    /// Explicit null.
    Null,
    /// Animation-driven value.
    Animated(AnimatedHandle),
}

impl Dimension {
    /// Classify a style value, returning `None` if it is not a dimension.
    pub fn classify(value: &StyleValue) -> Option<Self> {
        match value {
            StyleValue::Number(n) => Some(Self::Number(*n)),
            StyleValue::String(s) if s == "auto" => Some(Self::Auto),
            StyleValue::String(s) if PERCENTAGE.is_match(s) => {
                Some(Self::Percentage(s.clone()))
            }
            StyleValue::Null => Some(Self::Null),
            StyleValue::Animated(handle) => Some(Self::Animated(handle.clone())),
            _ => None,
        }
    }
}

impl From<Dimension> for StyleValue {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Number(n) => StyleValue::Number(n),
            Dimension::Auto => StyleValue::String("auto".to_string()),
            Dimension::Percentage(s) => StyleValue::String(s),
            Dimension::Null => StyleValue::Null,
            Dimension::Animated(handle) => StyleValue::Animated(handle),
        }
    }
}

/// Check whether a value is usable as a dimension.
pub fn is_dimension_value(value: &StyleValue) -> bool {
    Dimension::classify(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnimatedValue;

    #[test]
    fn accepts_dimensions() {
        assert!(is_dimension_value(&StyleValue::from(12)));
        assert!(is_dimension_value(&StyleValue::from(-4.5)));
        assert!(is_dimension_value(&StyleValue::from("auto")));
        assert!(is_dimension_value(&StyleValue::from("50%")));
        assert!(is_dimension_value(&StyleValue::from("12.5%")));
        assert!(is_dimension_value(&StyleValue::from("12")));
        assert!(is_dimension_value(&StyleValue::Null));
        assert!(is_dimension_value(&AnimatedValue::new(0.0).handle().into()));
    }

    #[test]
    fn rejects_other_values() {
        assert!(!is_dimension_value(&StyleValue::from("Auto")));
        assert!(!is_dimension_value(&StyleValue::from("10px")));
        assert!(!is_dimension_value(&StyleValue::from("-5%")));
        assert!(!is_dimension_value(&StyleValue::from(".5%")));
        assert!(!is_dimension_value(&StyleValue::from("")));
        assert!(!is_dimension_value(&StyleValue::from("٣٠%")));
        assert!(!is_dimension_value(&StyleValue::from("１２")));
        assert!(!is_dimension_value(&StyleValue::from(true)));
        assert!(!is_dimension_value(&StyleValue::from(vec![1])));
        assert!(!is_dimension_value(&StyleValue::Map(Default::default())));
    }

    #[test]
    fn classify_keeps_percentage_text() {
        assert_eq!(
            Dimension::classify(&StyleValue::from("33.3%")),
            Some(Dimension::Percentage("33.3%".to_string()))
        );
        assert_eq!(Dimension::classify(&StyleValue::from("auto")), Some(Dimension::Auto));
    }

    #[test]
    fn round_trips_into_style_value() {
        let value = StyleValue::from("auto");
        let dimension = Dimension::classify(&value).unwrap();
        assert_eq!(StyleValue::from(dimension), value);
    }
}
