use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid separator pattern"))
}

/// Derive a file- and URL-safe identifier from a recipe name.
///
/// Accents are decomposed and dropped, every run of other characters becomes a
/// single `-`, and the result is trimmed and lowercased. Degenerate input
/// yields an empty string.
pub fn slugify(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    separator_pattern()
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_lowercase()
}
