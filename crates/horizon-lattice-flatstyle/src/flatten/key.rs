//! Selector key scoping.

/// Derive the flat selector name for `segment` nested under `parent`.
///
/// The first character of `segment` is uppercased and appended to the
/// parent: `("card", "title")` becomes `cardTitle`. Without a parent (or
/// with an empty one) the segment is used as-is.
pub fn scoped_key(parent: Option<&str>, segment: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => {
            let mut chars = segment.chars();
            let mut key = String::with_capacity(parent.len() + segment.len());
            key.push_str(parent);
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
            key
        }
        _ => segment.to_string(),
    }
}

/// Split a comma-joined selector list into trimmed, non-empty segments.
pub fn split_selectors(key: &str) -> impl Iterator<Item = &str> {
    key.split(',').map(str::trim).filter(|segment| !segment.is_empty())
}

/// Check if a key names more than one selector.
pub fn is_shared_key(key: &str) -> bool {
    key.contains(',')
}
