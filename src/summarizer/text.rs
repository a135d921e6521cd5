use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminators, full-width and half-width.
pub const TERMINATORS: [char; 5] = ['。', '！', '？', '!', '?'];

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^。！？!?]+[。！？!?]?").expect("static regex compile"));

// `ー` is script Common, so it is listed next to the Katakana class.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}ー\p{Latin}\p{Nd}]{2,}")
        .expect("static regex compile")
});

/// Collapse every whitespace run (line breaks, tabs, U+3000 included) into a
/// single ASCII space and trim both ends.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into trimmed, non-empty sentences in document order.
///
/// A sentence is a run of non-terminators optionally closed by one
/// terminator. Text without terminators comes back as a single sentence;
/// empty text yields no sentences.
#[must_use]
pub fn split_sentences(normalized: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(normalized)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lowercased scoring tokens of a sentence, duplicates kept.
#[must_use]
pub fn tokenize(sentence: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(sentence)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}
