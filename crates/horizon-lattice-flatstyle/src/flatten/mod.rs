//! Flattening of nested style trees.
//!
//! - [`scoped_key`] derives flat selector names (`card` + `title` = `cardTitle`)
//! - [`flatten`] writes one declaration into a selector bucket
//! - [`apply_shared_styles`] handles comma-joined selector lists
//! - [`StyleFlattener`] walks a whole tree

mod flattener;
mod key;
mod shared;
mod walker;

pub use flattener::{expand_declaration, flatten};
pub use key::{is_shared_key, scoped_key, split_selectors};
pub use shared::{apply_shared_styles, build_shared_styles, merge_shared_styles};
pub use walker::{flatten_tree, StyleFlattener};
