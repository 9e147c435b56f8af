//! Plain markup text (`HTML_TEXT_CONTENT`).
//!
//! Consumes running text but holds back at characters that begin markup,
//! transitions, or expression continuations, and before `else`, `catch`
//! and `finally` at the start of a logical line. Those keywords continue an
//! `@if` / `@try` block, and the grammar can only recognise them if the
//! text token does not swallow them.

use razor_lexer_core::char_class::is_ident_char;
use razor_lexer_core::Lexer;

use super::Step;
use crate::token::TokenKind;

/// Longest identifier run probed at line start (`finally`).
const KEYWORD_PROBE_LEN: usize = 7;

/// Keywords that continue a Razor control-flow block.
const CONTINUATION_KEYWORDS: [&str; 3] = ["else", "catch", "finally"];

pub(crate) fn scan<L: Lexer>(lexer: &mut L) -> Step {
    let mut has_content = false;
    // Logical line start: only spaces and tabs seen since the last newline.
    let mut at_line_start = true;

    while let Some(c) = lexer.lookahead() {
        match c {
            '<' | '@' => break,
            // Expression continuations: `@item.Name`, `@list[0]`, `@Foo(x)`.
            '.' | '[' | '(' => break,
            // Directive arguments: `@page "/route"`.
            '"' | '\'' => break,
            '\n' | '\r' => {
                lexer.consume();
                has_content = true;
                lexer.mark_end();
                at_line_start = true;
            }
            ' ' | '\t' if at_line_start => {
                lexer.consume();
                has_content = true;
                lexer.mark_end();
            }
            'e' | 'c' | 'f' if at_line_start => {
                lexer.mark_end();
                if probe_continuation_keyword(lexer) {
                    // Keyword stays unconsumed: the token ends at the mark.
                    return if has_content {
                        Step::Emit(TokenKind::HtmlTextContent)
                    } else {
                        Step::Reject
                    };
                }
                has_content = true;
                lexer.mark_end();
                at_line_start = false;
            }
            _ => {
                lexer.consume();
                has_content = true;
                lexer.mark_end();
                at_line_start = false;
            }
        }
    }

    if has_content {
        Step::Emit(TokenKind::HtmlTextContent)
    } else {
        Step::Fallthrough
    }
}

/// Consume an identifier run of at most [`KEYWORD_PROBE_LEN`] characters and
/// report whether it is a continuation keyword ending at a word boundary.
///
/// The run is consumed either way; when it is not a keyword it is ordinary
/// text.
fn probe_continuation_keyword<L: Lexer>(lexer: &mut L) -> bool {
    let mut probe = ['\0'; KEYWORD_PROBE_LEN];
    let mut len = 0;
    while len < KEYWORD_PROBE_LEN {
        match lexer.lookahead() {
            Some(c) if is_ident_char(c) => {
                probe[len] = c;
                len += 1;
                lexer.consume();
            }
            _ => break,
        }
    }

    if lexer.at_where(is_ident_char) {
        return false;
    }
    let word = &probe[..len];
    CONTINUATION_KEYWORDS
        .iter()
        .any(|keyword| keyword.chars().eq(word.iter().copied()))
}
