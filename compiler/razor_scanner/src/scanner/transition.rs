//! Tokens that open and close embedded C# regions.
//!
//! | Token | Input | Mode stack |
//! |-------|-------|------------|
//! | `CSHARP_CODE_BLOCK_START` | `@{` | push brace |
//! | `CSHARP_EXPLICIT_EXPR_START` | `@(` | push paren |
//! | `RAZOR_BLOCK_OPEN` | trivia, `{` | push brace |
//! | `CSHARP_CONTEXT_CLOSE` | trivia, `}` or `)` matching the top | pop |

use razor_lexer_core::char_class::is_space;
use razor_lexer_core::Lexer;

use super::Step;
use crate::context::{ContextTag, ModeStack};
use crate::token::{TokenKind, ValidSymbols};

/// `@{` or `@(`.
///
/// Once the `@` is seen the call is committed to this family: an `@`
/// followed by anything else (or by an opener whose token is not
/// admissible) declines the whole scan rather than falling through.
pub(crate) fn scan_start<L: Lexer>(
    lexer: &mut L,
    valid: &ValidSymbols<'_>,
    modes: &mut ModeStack,
) -> Step {
    let block = valid.allows(TokenKind::CSharpCodeBlockStart);
    let expr = valid.allows(TokenKind::CSharpExplicitExprStart);
    if !(block || expr) || !lexer.at('@') {
        return Step::Fallthrough;
    }

    lexer.consume();
    let (tag, kind) = match lexer.lookahead() {
        Some('{') if block => (ContextTag::Brace, TokenKind::CSharpCodeBlockStart),
        Some('(') if expr => (ContextTag::Paren, TokenKind::CSharpExplicitExprStart),
        _ => return Step::Reject,
    };
    lexer.consume();
    modes.push(tag);
    Step::Emit(kind)
}

/// `{` opening the body of `@if`, `@foreach`, `@code` and friends.
///
/// The grammar has already consumed the keyword and its header.
pub(crate) fn scan_block_open<L: Lexer>(lexer: &mut L, modes: &mut ModeStack) -> Step {
    skip_space(lexer);
    if !lexer.at('{') {
        return Step::Fallthrough;
    }
    lexer.consume();
    modes.push(ContextTag::Brace);
    Step::Emit(TokenKind::RazorBlockOpen)
}

/// `}` or `)` closing the innermost C# region.
///
/// A closer of the wrong shape is left for the C# grammar (or a parse error).
pub(crate) fn scan_close<L: Lexer>(lexer: &mut L, modes: &mut ModeStack) -> Step {
    skip_space(lexer);
    match lexer.lookahead() {
        Some(c) if modes.pop_if_closes(c).is_some() => {
            lexer.consume();
            Step::Emit(TokenKind::CSharpContextClose)
        }
        _ => Step::Fallthrough,
    }
}

fn skip_space<L: Lexer>(lexer: &mut L) {
    while lexer.at_where(is_space) {
        lexer.skip();
    }
}

#[cfg(test)]
mod tests;
