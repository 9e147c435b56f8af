//! The cursor capability handed to the scanner by the host engine.

use crate::char_class;

/// Live, one-code-point-at-a-time view of the host's input.
///
/// The scanner never buffers source text. It inspects [`lookahead`], moves
/// forward with [`advance`], and records the token boundary with
/// [`mark_end`]. Anything advanced over after the last `mark_end` is
/// discarded by the host when the token is committed; if `mark_end` is never
/// called, the token ends wherever the cursor stands when the scanner
/// returns.
///
/// [`lookahead`]: Lexer::lookahead
/// [`advance`]: Lexer::advance
/// [`mark_end`]: Lexer::mark_end
pub trait Lexer {
    /// Current code point, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Move past the current code point.
    ///
    /// With `skip == true` the code point is trivia: the token start moves
    /// past it as well.
    fn advance(&mut self, skip: bool);

    /// Record the current position as the end of the token.
    fn mark_end(&mut self);

    /// Returns `true` once every code point has been consumed.
    fn is_eof(&self) -> bool;

    /// Advance, including the code point in the token.
    #[inline]
    fn consume(&mut self) {
        self.advance(false);
    }

    /// Advance, treating the code point as trivia.
    #[inline]
    fn skip(&mut self) {
        self.advance(true);
    }

    /// Returns `true` if the lookahead is exactly `c`.
    #[inline]
    fn at(&self, c: char) -> bool {
        self.lookahead() == Some(c)
    }

    /// Returns `true` if the lookahead satisfies `pred`. False at end of input.
    #[inline]
    fn at_where(&self, pred: impl Fn(char) -> bool) -> bool
    where
        Self: Sized,
    {
        char_class::lookahead_is(self.lookahead(), pred)
    }
}
