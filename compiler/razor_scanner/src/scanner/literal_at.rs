//! Text containing a literal `@` (`TEXT_WITH_LITERAL_AT`).
//!
//! Razor treats `@` as a transition into C#, except when it sits between
//! two word characters, as in `user@example.com` or `mailto:a@b.org`. This
//! family swallows markup text up to and including such email-like runs so
//! the grammar never sees their `@` as a transition.

use razor_lexer_core::char_class::is_word_char;
use razor_lexer_core::Lexer;

use super::Step;
use crate::token::TokenKind;

/// Domain-like continuation after the `@`: word characters, `.` and `-`.
#[inline]
fn is_domain_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

/// Scan text up to the end of the last `word@word` run.
///
/// Stops at `<`, quotes, or an `@` that is not flanked by word characters
/// (left unconsumed for the transition rules). Falls through unless at
/// least one literal `@` was found.
pub(crate) fn scan<L: Lexer>(lexer: &mut L) -> Step {
    let mut found = false;
    let mut last_was_word = false;

    while let Some(c) = lexer.lookahead() {
        match c {
            '<' | '"' | '\'' => break,
            '@' => {
                if !last_was_word {
                    break;
                }
                lexer.consume();
                if !lexer.at_where(is_word_char) {
                    break;
                }
                found = true;
                while lexer.at_where(is_domain_char) {
                    lexer.consume();
                }
                lexer.mark_end();
                last_was_word = false;
            }
            _ => {
                last_was_word = is_word_char(c);
                lexer.consume();
                if found {
                    lexer.mark_end();
                }
            }
        }
    }

    if found {
        Step::Emit(TokenKind::TextWithLiteralAt)
    } else {
        Step::Fallthrough
    }
}
