//! Flattening configuration.
//!
//! [`FlattenOptions`] controls which properties are treated as compound
//! values, whether shorthands are expanded, and how deep selectors may nest.
//! Options can be built in code or deserialized from any serde format.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_flatstyle::FlattenOptions;
//!
//! let options = FlattenOptions::new()
//!     .with_ignored_property("textShadowOffset")
//!     .with_max_depth(8);
//!
//! assert!(options.is_ignored("shadowOffset"));
//! assert!(options.is_ignored("textShadowOffset"));
//! assert_eq!(options.max_depth(), 8);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::shorthand::Shorthand;

/// Compound properties copied verbatim by default.
pub const DEFAULT_IGNORED_PROPERTIES: &[&str] = &["shadowOffset"];

/// Default limit on selector nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for flattening a style tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlattenOptions {
    /// Properties whose map values are kept as-is instead of being treated
    /// as nested selectors or expanded.
    ignored_properties: BTreeSet<String>,
    /// Maximum selector nesting depth.
    max_depth: usize,
    /// Whether shorthand properties are expanded.
    expand_shorthands: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            ignored_properties: DEFAULT_IGNORED_PROPERTIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            expand_shorthands: true,
        }
    }
}

impl FlattenOptions {
    /// Create options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compound property that must be copied verbatim.
    pub fn with_ignored_property(mut self, name: impl Into<String>) -> Self {
        self.ignored_properties.insert(name.into());
        self
    }

    /// Replace the set of compound properties.
    pub fn with_ignored_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_properties = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum selector nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable shorthand expansion.
    pub fn with_expand_shorthands(mut self, expand: bool) -> Self {
        self.expand_shorthands = expand;
        self
    }

    /// Check if a property is a compound value to copy verbatim.
    pub fn is_ignored(&self, property: &str) -> bool {
        self.ignored_properties.contains(property)
    }

    /// The shorthand to expand for a property, if any.
    pub fn shorthand_for(&self, property: &str) -> Option<Shorthand> {
        if self.expand_shorthands {
            Shorthand::from_property(property)
        } else {
            None
        }
    }

    /// Compound properties copied verbatim.
    pub fn ignored_properties(&self) -> impl Iterator<Item = &str> {
        self.ignored_properties.iter().map(String::as_str)
    }

    /// Maximum selector nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether shorthand properties are expanded.
    pub fn expand_shorthands(&self) -> bool {
        self.expand_shorthands
    }
}
