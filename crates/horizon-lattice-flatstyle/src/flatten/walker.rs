//! Style tree walking.

use crate::options::FlattenOptions;
use crate::types::{FlatStyleMap, StyleMap, StyleValue};
use crate::{targets, Error, Result};

use super::flattener::flatten;
use super::key::{is_shared_key, scoped_key};
use super::shared::apply_shared_styles;

/// How a single entry of a selector block is processed.
enum Entry<'a> {
    /// A property declaration for the enclosing selector.
    Declaration,
    /// A nested selector block.
    Nested(&'a StyleMap),
    /// A comma-joined selector list.
    Shared,
}

/// Flattens nested style trees into a [`FlatStyleMap`].
///
/// Every map-valued entry (other than configured compound properties) is a
/// nested selector whose flat name is scoped under its parent. Keys holding
/// a comma are shared selector lists. Everything else is a declaration for
/// the enclosing selector.
///
/// Entries are processed in block order, so a later declaration overrides
/// whatever an earlier one wrote for the same selector.
///
/// # Example
///
/// ```
/// use horizon_lattice_flatstyle::prelude::*;
/// use serde_json::json;
///
/// let tree: StyleMap = serde_json::from_value(json!({
///     "card": {
///         "padding": [10, 20],
///         "title, subtitle": { "color": "black" },
///     }
/// }))?;
///
/// let flat = StyleFlattener::default().flatten_tree(&tree)?;
/// assert_eq!(flat["card"]["paddingVertical"], StyleValue::Number(10.0));
/// assert_eq!(flat["cardTitle"]["color"], StyleValue::from("black"));
/// assert_eq!(flat["cardSubtitle"]["color"], StyleValue::from("black"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleFlattener {
    options: FlattenOptions,
}

impl StyleFlattener {
    /// Create a flattener with the given options.
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flatten a whole style tree into a new map.
    pub fn flatten_tree(&self, tree: &StyleMap) -> Result<FlatStyleMap> {
        let mut output = FlatStyleMap::new();
        self.flatten_into(tree, &mut output)?;
        Ok(output)
    }

    /// Flatten a style tree into an existing map.
    ///
    /// Existing buckets are extended; conflicting properties are overwritten.
    /// On error `output` may hold the selectors processed so far.
    pub fn flatten_into(&self, tree: &StyleMap, output: &mut FlatStyleMap) -> Result<()> {
        self.walk(None, tree, 0, output)
    }

    fn classify<'a>(&self, key: &str, value: &'a StyleValue) -> Entry<'a> {
        if is_shared_key(key) {
            return Entry::Shared;
        }
        match value {
            StyleValue::Map(block) if !self.options.is_ignored(key) => Entry::Nested(block),
            _ => Entry::Declaration,
        }
    }

    fn walk(
        &self,
        parent: Option<&str>,
        block: &StyleMap,
        depth: usize,
        output: &mut FlatStyleMap,
    ) -> Result<()> {
        for (key, value) in block {
            match self.classify(key, value) {
                Entry::Declaration => {
                    let Some(selector) = parent else {
                        return Err(Error::outside_selector(key.as_str()));
                    };
                    flatten(selector, key, value, output, &self.options)?;
                }
                Entry::Nested(child) => {
                    let selector = scoped_key(parent, key);
                    if depth + 1 > self.options.max_depth() {
                        return Err(Error::NestingTooDeep {
                            selector,
                            depth: depth + 1,
                        });
                    }
                    tracing::debug!(
                        target: targets::FLATTEN,
                        %selector,
                        depth,
                        "entering selector"
                    );
                    output.entry(selector.clone()).or_default();
                    self.walk(Some(selector.as_str()), child, depth + 1, output)?;
                }
                Entry::Shared => {
                    let StyleValue::Map(shared) = value else {
                        return Err(Error::invalid_block(key.as_str()));
                    };
                    apply_shared_styles(key, parent, shared, output, &self.options)?;
                }
            }
        }
        Ok(())
    }
}

/// Flatten a style tree with the default options.
pub fn flatten_tree(tree: &StyleMap) -> Result<FlatStyleMap> {
    StyleFlattener::default().flatten_tree(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{block, px, seq};

    fn nested(entries: StyleMap) -> StyleValue {
        StyleValue::Map(entries)
    }

    #[test]
    fn padding_pair() {
        let tree = block([("box", nested(block([("padding", seq(&[10, 20]))])))]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(
            flat,
            FlatStyleMap::from([(
                "box".to_string(),
                block([("paddingVertical", px(10)), ("paddingHorizontal", px(20))]),
            )])
        );
    }

    #[test]
    fn shorthand_after_longhand_wins() {
        let tree = block([(
            "box",
            nested(block([("paddingVertical", px(2)), ("padding", px(8))])),
        )]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(
            flat["box"],
            block([("paddingVertical", px(8)), ("paddingHorizontal", px(8))])
        );
    }

    #[test]
    fn longhand_after_shorthand_wins() {
        let tree = block([(
            "box",
            nested(block([("padding", px(8)), ("paddingVertical", px(2))])),
        )]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(
            flat["box"],
            block([("paddingVertical", px(2)), ("paddingHorizontal", px(8))])
        );
    }

    #[test]
    fn later_shared_block_overrides_earlier_declaration() {
        let tree = block([(
            "card",
            nested(block([
                ("title", nested(block([("opacity", px(1))]))),
                ("title, subtitle", nested(block([("opacity", px(0))]))),
            ])),
        )]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(flat["cardTitle"]["opacity"], px(0));
        assert_eq!(flat["cardSubtitle"]["opacity"], px(0));
    }

    #[test]
    fn inset_quad() {
        let overlay = block([("inset", seq(&[5, 10, 15, 20]))]);
        let tree = block([("overlay", nested(overlay))]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(
            flat["overlay"],
            block([("top", px(5)), ("right", px(10)), ("bottom", px(15)), ("left", px(20))])
        );
    }

    #[test]
    fn nested_selectors_are_scoped() {
        let tree = block([(
            "card",
            nested(block([
                ("opacity", px(1)),
                ("header", nested(block([("icon", nested(block([("width", px(16))])))]))),
            ])),
        )]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(flat["card"], block([("opacity", px(1))]));
        assert!(flat["cardHeader"].is_empty());
        assert_eq!(flat["cardHeaderIcon"], block([("width", px(16))]));
    }

    #[test]
    fn shared_selectors_under_parent() {
        let tree = block([(
            "card",
            nested(block([("title, subtitle", nested(block([("margin", seq(&[4]))])))])),
        )]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(flat["cardTitle"], block([("margin", px(4))]));
        assert_eq!(flat["cardSubtitle"], block([("margin", px(4))]));
    }

    #[test]
    fn shared_selectors_at_root() {
        let tree = block([("primary, secondary", nested(block([("gap", px(3))])))]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(flat["primary"], block([("gap", px(3))]));
        assert_eq!(flat["secondary"], block([("gap", px(3))]));
    }

    #[test]
    fn compound_property_is_not_a_selector() {
        let offset = nested(block([("width", px(0)), ("height", px(4))]));
        let tree = block([("card", nested(block([("shadowOffset", offset.clone())])))]);
        let flat = flatten_tree(&tree).unwrap();
        assert_eq!(flat["card"]["shadowOffset"], offset);
        assert!(!flat.contains_key("cardShadowOffset"));
    }

    #[test]
    fn declaration_at_root_is_rejected() {
        let tree = block([("opacity", px(1))]);
        assert_eq!(flatten_tree(&tree), Err(Error::outside_selector("opacity")));
    }

    #[test]
    fn shared_key_requires_block() {
        let tree = block([("card", nested(block([("a, b", px(1))])))]);
        assert_eq!(flatten_tree(&tree), Err(Error::invalid_block("a, b")));
    }

    #[test]
    fn invalid_shorthand_propagates() {
        let tree = block([("row", nested(block([("gap", seq(&[1, 2, 3]))])))]);
        assert_eq!(
            flatten_tree(&tree),
            Err(Error::invalid_length("gap", &[1, 2], 3))
        );
    }

    #[test]
    fn nesting_limit() {
        let c = block([("c", nested(StyleMap::new()))]);
        let tree = block([("a", nested(block([("b", nested(c))])))]);
        let flattener = StyleFlattener::new(FlattenOptions::new().with_max_depth(2));
        assert_eq!(flattener.options().max_depth(), 2);
        assert_eq!(
            flattener.flatten_tree(&tree),
            Err(Error::NestingTooDeep {
                selector: "aBC".to_string(),
                depth: 3,
            })
        );
        assert!(StyleFlattener::default().flatten_tree(&tree).is_ok());
    }

    #[test]
    fn shorthands_disabled() {
        let tree = block([("box", nested(block([("padding", seq(&[10, 20]))])))]);
        let options = FlattenOptions::new().with_expand_shorthands(false);
        let flattener = StyleFlattener::new(options);
        assert!(!flattener.options().expand_shorthands());
        let flat = flattener.flatten_tree(&tree).unwrap();
        assert_eq!(flat["box"], block([("padding", seq(&[10, 20]))]));
    }

    #[test]
    fn flatten_into_extends_existing_output() {
        let mut output =
            FlatStyleMap::from([("box".to_string(), block([("width", px(10))]))]);
        let tree = block([("box", nested(block([("gap", seq(&[1, 2]))])))]);
        StyleFlattener::default().flatten_into(&tree, &mut output).unwrap();
        assert_eq!(
            output["box"],
            block([("width", px(10)), ("rowGap", px(1)), ("columnGap", px(2))])
        );
    }
}
