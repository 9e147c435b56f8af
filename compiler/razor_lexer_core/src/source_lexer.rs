//! In-memory [`Lexer`] over a `&str`.
//!
//! Reproduces the host engine's token-boundary rules so the scanner can be
//! driven without the engine:
//!
//! - A scan call is bracketed by [`SourceLexer::begin`] and either
//!   [`SourceLexer::finish`] (commit) or [`SourceLexer::rewind`] (decline).
//! - Skipped trivia moves the token start forward.
//! - The token ends at the last [`Lexer::mark_end`], or at the cursor if
//!   the scanner never marked an end.

use crate::Lexer;

/// Byte range of a committed token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Cursor over an in-memory source string.
#[derive(Clone, Debug)]
pub struct SourceLexer<'a> {
    source: &'a str,
    /// Current read position (byte offset, always on a char boundary).
    pos: usize,
    /// Position at the last `begin()`; `rewind()` returns here.
    call_start: usize,
    /// Start of the token under construction. Moves with skipped trivia.
    token_start: usize,
    /// Position recorded by the last `mark_end()` of the current call.
    marked_end: Option<usize>,
}

impl<'a> SourceLexer<'a> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        SourceLexer {
            source,
            pos: 0,
            call_start: 0,
            token_start: 0,
            marked_end: None,
        }
    }

    /// Start a scan call at the current position.
    pub fn begin(&mut self) {
        self.call_start = self.pos;
        self.token_start = self.pos;
        self.marked_end = None;
    }

    /// Commit the token scanned since [`begin`](Self::begin).
    ///
    /// The cursor moves to the token end; lookahead consumed beyond the
    /// marked end is given back.
    pub fn finish(&mut self) -> Span {
        let end = self.marked_end.unwrap_or(self.pos);
        // Trivia skipped after a mark can push the start past the end.
        let start = self.token_start.min(end);
        self.pos = end;
        self.begin();
        Span { start, end }
    }

    /// Decline the current call: the cursor returns to where it began.
    pub fn rewind(&mut self) {
        self.pos = self.call_start;
        self.begin();
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Start of the token under construction.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// The whole source.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Source from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Text covered by `span`.
    pub fn text(&self, span: Span) -> &'a str {
        debug_assert!(span.end <= self.source.len(), "span {span:?} out of bounds");
        &self.source[span.range()]
    }
}

impl Lexer for SourceLexer<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, skip: bool) {
        let Some(c) = self.lookahead() else {
            return;
        };
        self.pos += c.len_utf8();
        if skip {
            self.token_start = self.pos;
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked_end = Some(self.pos);
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}
