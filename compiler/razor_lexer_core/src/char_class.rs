//! Character classification for Razor scanning.
//!
//! Letters are approximated by a fixed table of Unicode block ranges
//! covering the common scripts. Digits are ASCII `0`-`9` only. Neither
//! predicate consults the locale or the full Unicode tables, so results are
//! identical on every platform.

/// Inclusive code point ranges treated as letters.
///
/// Latin-1 Supplement is split around U+00D7 (multiplication sign) and
/// U+00F7 (division sign). Ranges are listed in block order, not sorted.
const LETTER_RANGES: &[(u32, u32)] = &[
    // ASCII
    (0x0041, 0x005A),
    (0x0061, 0x007A),
    // Latin-1 Supplement
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x00FF),
    // Latin Extended-A and Extended-B
    (0x0100, 0x024F),
    // Greek and Coptic
    (0x0370, 0x03FF),
    // Cyrillic
    (0x0400, 0x04FF),
    // Hebrew
    (0x0590, 0x05FF),
    // Arabic
    (0x0600, 0x06FF),
    // Devanagari
    (0x0900, 0x097F),
    // Thai
    (0x0E00, 0x0E7F),
    // CJK Unified Ideographs
    (0x4E00, 0x9FFF),
    // Hiragana
    (0x3040, 0x309F),
    // Katakana
    (0x30A0, 0x30FF),
    // Hangul Syllables
    (0xAC00, 0xD7AF),
];

/// Returns `true` if `c` is a letter in one of the supported scripts.
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    let cp = u32::from(c);
    LETTER_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Returns `true` if `c` is a decimal digit.
///
/// ASCII only. Other decimal digit blocks (Arabic-Indic, Devanagari, ...)
/// are not recognised; widening this would change which `@` occurrences
/// are classified as literal text.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Word character for email-like text: letter or digit.
///
/// Mirrors what the Razor tokenizer considers the two sides of a literal
/// `@` (`user@example.com`). Underscore is not a word character here.
#[inline]
pub fn is_word_char(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Identifier character: letter, digit, or underscore.
///
/// Used for keyword boundary detection (`else` vs `elsewhere`).
#[inline]
pub fn is_ident_char(c: char) -> bool {
    is_word_char(c) || c == '_'
}

/// White space skipped as trivia before block and context tokens.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Lift a predicate over the lexer's `Option<char>` lookahead.
///
/// End of input (`None`) never satisfies any predicate.
#[inline]
pub fn lookahead_is(lookahead: Option<char>, pred: impl Fn(char) -> bool) -> bool {
    lookahead.is_some_and(pred)
}
