//! Style flattening for Horizon Lattice.
//!
//! Authors describe styles as nested, SASS-like trees: selector blocks that
//! contain declarations, nested selectors and comma-joined selector lists,
//! using compact shorthands such as `padding: [10, 20]`. Native style
//! engines want the opposite: a flat map from selector name to explicit
//! properties. This crate bridges the two.
//!
//! - **Shorthands**: `inset`, `margin`, `padding` and `gap` expand into
//!   explicit per-edge properties
//! - **Scoping**: nested selectors are named `parent` + `Child`
//! - **Shared selectors**: `"title, subtitle"` applies one block to several
//!   selectors
//!
//! # Example
//!
//! ```
//! use horizon_lattice_flatstyle::prelude::*;
//! use serde_json::json;
//!
//! let tree: StyleMap = serde_json::from_value(json!({
//!     "overlay": { "inset": [5, 10, 15, 20] },
//! }))?;
//!
//! let flat = flatten_tree(&tree)?;
//! assert_eq!(flat["overlay"]["top"], StyleValue::Number(5.0));
//! assert_eq!(flat["overlay"]["left"], StyleValue::Number(20.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod flatten;
pub mod options;
pub mod shorthand;
pub mod types;

mod error;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use options::FlattenOptions;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Tree walking and shared selector merging.
    pub const FLATTEN: &str = "horizon_lattice_flatstyle::flatten";
    /// Shorthand expansion.
    pub const SHORTHAND: &str = "horizon_lattice_flatstyle::shorthand";
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::flatten::{
        apply_shared_styles, flatten, flatten_tree, scoped_key, StyleFlattener,
    };
    pub use crate::options::FlattenOptions;
    pub use crate::shorthand::{
        expand_gap, expand_inset, expand_spacing, Expansion, Longhand, Shorthand, Spacing,
    };
    pub use crate::types::{
        is_dimension_value, AnimatedHandle, AnimatedNode, AnimatedValue, Dimension, FlatStyleMap,
        StyleMap, StyleValue,
    };
    pub use crate::{Error, Result};
}
