//! Shared (comma-joined) selector blocks.
//!
//! A block keyed by `"title, subtitle"` applies the same declarations to
//! every listed selector. Processing happens in two steps: the block is
//! first resolved into a [`SharedStyleMap`] holding one bucket per scoped
//! selector, which is then merged into the flat output. Nothing is written
//! to the output unless the whole block resolves.

use crate::options::FlattenOptions;
use crate::types::{FlatStyleMap, SharedStyleMap, StyleMap};
use crate::{targets, Result};

use super::flattener::expand_declaration;
use super::key::{scoped_key, split_selectors};

/// Resolve a shared block into per-selector property buckets.
///
/// Declarations are applied in block order; a later declaration overwrites
/// any longhand an earlier one produced.
pub fn build_shared_styles(
    key: &str,
    parent_key: Option<&str>,
    block: &StyleMap,
    options: &FlattenOptions,
) -> Result<SharedStyleMap> {
    let selectors: Vec<String> = split_selectors(key)
        .map(|segment| scoped_key(parent_key, segment))
        .collect();
    if selectors.is_empty() {
        tracing::warn!(
            target: targets::FLATTEN,
            key,
            "shared selector has no usable segments"
        );
        return Ok(SharedStyleMap::new());
    }

    let mut properties = StyleMap::new();
    for (property, value) in block {
        properties.extend(expand_declaration(property, value, options)?);
    }

    tracing::debug!(
        target: targets::FLATTEN,
        key,
        selectors = selectors.len(),
        properties = properties.len(),
        "resolved shared selector block"
    );

    let mut shared = SharedStyleMap::new();
    for selector in selectors {
        shared.entry(selector).or_default().extend(properties.clone());
    }
    Ok(shared)
}

/// Merge resolved shared styles into the flat output.
///
/// Buckets are created as needed; existing properties are overwritten.
pub fn merge_shared_styles(shared: SharedStyleMap, output: &mut FlatStyleMap) {
    for (selector, properties) in shared {
        output.entry(selector).or_default().extend(properties);
    }
}

/// Resolve a shared block and merge it into `output`.
pub fn apply_shared_styles(
    key: &str,
    parent_key: Option<&str>,
    block: &StyleMap,
    output: &mut FlatStyleMap,
    options: &FlattenOptions,
) -> Result<()> {
    let shared = build_shared_styles(key, parent_key, block, options)?;
    merge_shared_styles(shared, output);
    Ok(())
}
