//! Verbatim content of raw-text elements (`<script>`, `<style>`, `<title>`,
//! `<textarea>`).
//!
//! After the grammar has matched the opening tag, everything up to the
//! matching closing tag is content, whatever markup-like characters it
//! contains. The closing tag itself is left for the grammar.
//!
//! Tag names are matched with ASCII-only case folding. Nested raw-text
//! elements are not recognised: `"</script>"` inside a script string still
//! ends the element.

use razor_lexer_core::Lexer;
use tracing::trace;

use super::Step;
use crate::token::TokenKind;

/// Elements whose body is scanned verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTextElement {
    Script,
    Style,
    Title,
    Textarea,
}

impl RawTextElement {
    /// Every element, in dispatch order.
    pub const ALL: [RawTextElement; 4] = [
        RawTextElement::Script,
        RawTextElement::Style,
        RawTextElement::Title,
        RawTextElement::Textarea,
    ];

    /// Lowercase tag name.
    pub const fn tag_name(self) -> &'static str {
        match self {
            RawTextElement::Script => "script",
            RawTextElement::Style => "style",
            RawTextElement::Title => "title",
            RawTextElement::Textarea => "textarea",
        }
    }

    pub const fn token_kind(self) -> TokenKind {
        match self {
            RawTextElement::Script => TokenKind::ScriptContent,
            RawTextElement::Style => TokenKind::StyleContent,
            RawTextElement::Title => TokenKind::TitleContent,
            RawTextElement::Textarea => TokenKind::TextareaContent,
        }
    }
}

/// Scan content up to `</name` (any ASCII case), leaving the tag unconsumed.
///
/// Content may never start with `<`: the call declines even if that `<`
/// does not begin the closing tag. Grammar rules rely on this, so it stays.
/// Otherwise commits everything before the closing tag (or to end of input),
/// and declines only when there is no content at all.
pub(crate) fn scan<L: Lexer>(lexer: &mut L, element: RawTextElement) -> Step {
    let name = element.tag_name();

    if lexer.at('<') {
        trace!(element = name, "raw content starts with `<`");
        return Step::Reject;
    }

    let mut has_content = false;
    while let Some(c) = lexer.lookahead() {
        if c == '<' {
            // Tentative end: if this is the closing tag, the token stops here.
            lexer.mark_end();
            lexer.consume();
            if lexer.at('/') {
                lexer.consume();
                if eat_tag_name(lexer, name) {
                    break;
                }
            }
            // `<`, `/` and any partially matched letters are content.
        } else {
            lexer.consume();
        }
        has_content = true;
        lexer.mark_end();
    }

    if has_content {
        Step::Emit(element.token_kind())
    } else {
        Step::Reject
    }
}

/// `c` equals the lowercase ASCII letter `expected` in either case.
#[inline]
fn matches_ignore_case(c: char, expected: char) -> bool {
    c == expected || c == expected.to_ascii_uppercase()
}

/// Consume `name` letter by letter; stops at the first mismatch.
fn eat_tag_name<L: Lexer>(lexer: &mut L, name: &str) -> bool {
    for expected in name.chars() {
        if !lexer.at_where(|c| matches_ignore_case(c, expected)) {
            return false;
        }
        lexer.consume();
    }
    true
}

#[cfg(test)]
mod tests;
