use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("separator pattern is valid"));

/// Lowercases the text, then collapses every run of characters that are
/// neither letters nor digits into a single space.
pub fn normalize(text: &str) -> String {
    // Lowercasing can emit combining marks (İ -> i + U+0307), so it runs first.
    NON_ALPHANUMERIC
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}
