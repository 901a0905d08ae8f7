//! Single-declaration flattening.

use crate::options::FlattenOptions;
use crate::types::{FlatStyleMap, StyleMap, StyleValue};
use crate::Result;

/// Resolve one declaration into the explicit properties it contributes.
///
/// Compound properties listed in [`FlattenOptions`] are copied verbatim,
/// shorthands are expanded, and everything else passes through unchanged.
/// Only shorthand values are validated.
pub fn expand_declaration(
    key: &str,
    value: &StyleValue,
    options: &FlattenOptions,
) -> Result<StyleMap> {
    if !options.is_ignored(key) {
        if let Some(shorthand) = options.shorthand_for(key) {
            return Ok(shorthand.expand(key, value)?.into_style_map());
        }
    }
    Ok(StyleMap::from([(key.to_string(), value.clone())]))
}

/// Flatten one declaration into the `parent_key` bucket of `output`.
///
/// The bucket is created if absent. The declaration is resolved before the
/// output is touched, so a failing shorthand leaves `output` unchanged.
pub fn flatten(
    parent_key: &str,
    key: &str,
    value: &StyleValue,
    output: &mut FlatStyleMap,
    options: &FlattenOptions,
) -> Result<()> {
    let properties = expand_declaration(key, value, options)?;
    output
        .entry(parent_key.to_string())
        .or_default()
        .extend(properties);
    Ok(())
}
