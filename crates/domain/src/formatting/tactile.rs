//! Grade 1 braille transcription
//!
//! Covers the Latin letters, the space and the decimal digits. Digits are
//! written as the numeric indicator followed by the cell of the letter in the
//! same position (1 = a, ..., 0 = j). Anything else passes through unchanged.

/// Braille numeric indicator (dots 3-4-5-6)
pub const NUMERIC_INDICATOR: char = '⠼';

const fn letter_cell(c: char) -> Option<char> {
    let cell = match c {
        'a' => '⠁',
        'b' => '⠃',
        'c' => '⠉',
        'd' => '⠙',
        'e' => '⠑',
        'f' => '⠋',
        'g' => '⠛',
        'h' => '⠓',
        'i' => '⠊',
        'j' => '⠚',
        'k' => '⠅',
        'l' => '⠇',
        'm' => '⠍',
        'n' => '⠝',
        'o' => '⠕',
        'p' => '⠏',
        'q' => '⠟',
        'r' => '⠗',
        's' => '⠎',
        't' => '⠞',
        'u' => '⠥',
        'v' => '⠧',
        'w' => '⠺',
        'x' => '⠭',
        'y' => '⠽',
        'z' => '⠵',
        _ => return None,
    };
    Some(cell)
}

const fn digit_letter(d: char) -> Option<char> {
    let letter = match d {
        '1' => 'a',
        '2' => 'b',
        '3' => 'c',
        '4' => 'd',
        '5' => 'e',
        '6' => 'f',
        '7' => 'g',
        '8' => 'h',
        '9' => 'i',
        '0' => 'j',
        _ => return None,
    };
    Some(letter)
}

/// Transcribe text into braille cells
///
/// Input is lower-cased first. Every digit carries its own numeric indicator.
#[must_use]
pub fn to_braille(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len() * 3);

    for c in lowered.chars() {
        if let Some(cell) = letter_cell(c) {
            out.push(cell);
        } else if let Some(cell) = digit_letter(c).and_then(letter_cell) {
            out.push(NUMERIC_INDICATOR);
            out.push(cell);
        } else {
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcribes_hello() {
        assert_eq!(to_braille("hello"), "⠓⠑⠇⠇⠕");
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(to_braille("HeLLo"), to_braille("hello"));
    }

    #[test]
    fn space_is_preserved() {
        assert_eq!(to_braille("a b"), "⠁ ⠃");
    }

    #[test]
    fn digits_carry_numeric_indicator() {
        assert_eq!(to_braille("1"), "⠼⠁");
        assert_eq!(to_braille("0"), "⠼⠚");
        assert_eq!(to_braille("42"), "⠼⠙⠼⠃");
    }

    #[test]
    fn punctuation_passes_through() {
        assert_eq!(to_braille("hi!"), "⠓⠊!");
        assert_eq!(to_braille("a, b."), "⠁, ⠃.");
    }

    #[test]
    fn unmapped_letters_pass_through() {
        assert_eq!(to_braille("é"), "é");
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_braille(""), "");
    }

    #[test]
    fn deterministic() {
        let text = "The quick brown fox 123";
        assert_eq!(to_braille(text), to_braille(text));
    }
}
