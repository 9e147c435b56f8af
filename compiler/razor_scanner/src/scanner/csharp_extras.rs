//! C# comments and preprocessor lines.
//!
//! Only attempted while a C# region is open, so markup text containing `/`
//! or `#` is never mistaken for either. The dispatcher enforces the gate.

use razor_lexer_core::Lexer;

use super::Step;
use crate::token::TokenKind;

#[inline]
fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// `// ...` up to (not including) the line break, or `/* ... */`.
///
/// An unterminated block comment runs to end of input and is still a
/// comment. A lone `/` declines the scan.
pub(crate) fn scan_comment<L: Lexer>(lexer: &mut L) -> Step {
    if !lexer.at('/') {
        return Step::Fallthrough;
    }
    lexer.consume();

    match lexer.lookahead() {
        Some('/') => {
            lexer.consume();
            while lexer.at_where(|c| !is_line_break(c)) {
                lexer.consume();
            }
        }
        Some('*') => {
            lexer.consume();
            while let Some(c) = lexer.lookahead() {
                lexer.consume();
                if c == '*' && lexer.at('/') {
                    lexer.consume();
                    break;
                }
            }
        }
        _ => return Step::Reject,
    }
    Step::Emit(TokenKind::CSharpComment)
}

/// `#directive ...` including the line terminator (`\r`, `\n` or `\r\n`).
pub(crate) fn scan_preproc<L: Lexer>(lexer: &mut L) -> Step {
    if !lexer.at('#') {
        return Step::Fallthrough;
    }
    lexer.consume();
    while lexer.at_where(|c| !is_line_break(c)) {
        lexer.consume();
    }
    if lexer.at('\r') {
        lexer.consume();
    }
    if lexer.at('\n') {
        lexer.consume();
    }
    Step::Emit(TokenKind::CSharpPreproc)
}
