//! Tag retention

use std::collections::HashSet;

/// Keep the first occurrence of each tag, in order, up to `max_tags`
pub fn retain_tags(tags: &[String], max_tags: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .take(max_tags)
        .cloned()
        .collect()
}
