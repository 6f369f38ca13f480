//! Reading accommodation markup
//!
//! Bolds the leading half of every word to give the eye a fixation point,
//! and widens the gap between words.

/// Separator placed between formatted words
pub const WORD_SEPARATOR: &str = " &nbsp; ";

fn emphasize(word: &str) -> String {
    let len = word.chars().count();
    if len <= 1 {
        return format!("<strong>{word}</strong>");
    }

    let mid = (len / 2).max(1);
    let split_at = word
        .char_indices()
        .nth(mid)
        .map_or(word.len(), |(idx, _)| idx);
    let (head, tail) = word.split_at(split_at);
    format!("<strong>{head}</strong>{tail}")
}

/// Produce emphasis markup for a text
///
/// Words are whitespace-delimited; the output contains exactly one
/// `<strong>` element per input word.
#[must_use]
pub fn emphasize_word_starts(text: &str) -> String {
    text.split_whitespace()
        .map(emphasize)
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}
