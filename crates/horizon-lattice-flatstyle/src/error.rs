//! Error types for style flattening.

/// Result type alias for flattening operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while expanding or flattening styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A shorthand property received a value it cannot expand.
    #[error("Invalid value for shorthand '{key}': received {received}")]
    InvalidShorthandValue { key: String, received: String },

    /// A shorthand sequence has an unsupported number of elements.
    #[error(
        "Invalid length for shorthand '{key}': expected one of {expected:?} values, got {actual}"
    )]
    InvalidShorthandLength {
        key: String,
        expected: &'static [usize],
        actual: usize,
    },

    /// A plain declaration appeared outside of any selector block.
    #[error("Property '{property}' is declared outside of a selector")]
    PropertyOutsideSelector { property: String },

    /// A shared selector key was bound to something other than a block.
    #[error("Selector '{selector}' must be bound to a style block")]
    InvalidSelectorBlock { selector: String },

    /// Selector nesting exceeded the configured depth.
    #[error("Selector '{selector}' is nested {depth} levels deep")]
    NestingTooDeep { selector: String, depth: usize },
}

impl Error {
    /// Create an invalid shorthand value error.
    pub fn invalid_value(key: impl Into<String>, received: impl Into<String>) -> Self {
        Self::InvalidShorthandValue {
            key: key.into(),
            received: received.into(),
        }
    }

    /// Create an invalid shorthand length error.
    pub fn invalid_length(
        key: impl Into<String>,
        expected: &'static [usize],
        actual: usize,
    ) -> Self {
        Self::InvalidShorthandLength {
            key: key.into(),
            expected,
            actual,
        }
    }

    /// Create an error for a declaration with no enclosing selector.
    pub fn outside_selector(property: impl Into<String>) -> Self {
        Self::PropertyOutsideSelector {
            property: property.into(),
        }
    }

    /// Create an error for a selector bound to a non-block value.
    pub fn invalid_block(selector: impl Into<String>) -> Self {
        Self::InvalidSelectorBlock {
            selector: selector.into(),
        }
    }

    /// The property or selector the error refers to.
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidShorthandValue { key, .. }
            | Self::InvalidShorthandLength { key, .. } => key,
            Self::PropertyOutsideSelector { property } => property,
            Self::InvalidSelectorBlock { selector }
            | Self::NestingTooDeep { selector, .. } => selector,
        }
    }
}
