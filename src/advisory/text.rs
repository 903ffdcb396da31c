//! Predicates shared by the free-text evaluators.

/// Whitespace-separated word count.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when some word-character run consists only of digits, i.e. a
/// standalone number such as `20` in "grew sales 20%". Non-ASCII digits
/// ("٥") count too. Digits glued to letters ("3rd", "mp3") do not.
pub(crate) fn has_standalone_number(text: &str) -> bool {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|run| !run.is_empty() && run.chars().all(char::is_numeric))
}

/// Case-insensitive substring check against any of `needles` (given lower-case).
pub(crate) fn contains_any(text: &str, needles: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    needles.iter().any(|needle| haystack.contains(needle))
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
