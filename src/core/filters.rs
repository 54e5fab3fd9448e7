use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Default score threshold; only scores strictly above it are kept
pub const DEFAULT_SCORE_THRESHOLD: u32 = 2;

/// Check if a match score clears the (exclusive) threshold
#[inline]
pub fn passes_threshold(score: u32, threshold: u32) -> bool {
    score > threshold
}

/// Normalize a tag collection: trim entries, drop empties, keep first occurrences
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && seen.insert(tag.to_string()) {
            out.push(tag.to_string());
        }
    }

    out
}

/// Split a comma-separated tag string (the storage format) into normalized tags
pub fn split_tags(raw: &str) -> Vec<String> {
    normalize_tags(raw.split(','))
}

/// Join tags back into the comma-separated storage format
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Csv(String),
}

/// Serde adapter accepting tags as an array, a comma-separated string or null
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TagsRepr>::deserialize(deserializer)? {
        Some(TagsRepr::List(list)) => normalize_tags(list),
        Some(TagsRepr::Csv(raw)) => split_tags(&raw),
        None => Vec::new(),
    })
}
