//! Value types for style trees.

mod animated;
mod dimension;
mod value;

pub use animated::{AnimatedHandle, AnimatedNode, AnimatedValue, Listener, ListenerId};
pub use dimension::{is_dimension_value, Dimension};
pub use value::{FlatStyleMap, SharedStyleMap, StyleMap, StyleValue};
