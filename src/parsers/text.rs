use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a word character, whitespace or light punctuation
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?-]").unwrap());

/// Cleans extracted text for use as model context
///
/// This function:
/// - Removes every character that is not a word character, whitespace,
///   or one of `. , ! ? -` (quotes, brackets and symbols are dropped)
/// - Collapses whitespace runs into single spaces
/// - Trims leading and trailing whitespace
///
/// Characters are removed before whitespace is collapsed so the result is
/// stable under repeated cleaning.
pub fn clean_text(text: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(text, "");
    normalize_whitespace_in_segment(&stripped)
}

/// Joins text fragments with single spaces, dropping blank fragments
pub fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes whitespace within a single line or paragraph
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns at most the first `max_chars` characters of `text`
///
/// Hard cutoff; word boundaries are not respected.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
