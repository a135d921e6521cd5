/// Shown when no summary text could be produced.
pub const FALLBACK_PLACEHOLDER: &str = "本文が取得できませんでした。";

pub const ELLIPSIS: char = '…';

/// Render a summary body as a single line of at most `max_chars` characters.
///
/// Counting is per `char`, so multi-byte scripts are never cut mid-character.
/// `max_chars` below 1 is treated as 1.
#[must_use]
pub fn format_summary(body: &str, max_chars: usize) -> String {
    let max_chars = max_chars.max(1);
    let mut line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if line.is_empty() {
        line = FALLBACK_PLACEHOLDER.to_string();
    }

    if line.chars().count() <= max_chars {
        return line;
    }

    let mut truncated: String = line.chars().take(max_chars - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}
