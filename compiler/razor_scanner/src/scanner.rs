//! The Razor external scanner and its dispatcher.
//!
//! # Dispatch order
//!
//! Each family is tried only when one of its tokens is admissible (and, for
//! the gated families, only in the right mode). A family either emits a
//! token, rejects the whole call, or falls through to the next one:
//!
//! 1. Text with a literal `@` (markup mode)
//! 2. Markup text (markup mode)
//! 3. `@{` / `@(`
//! 4. Razor block `{`
//! 5. Context close `}` / `)` (C# mode)
//! 6. C# comment (C# mode)
//! 7. C# preprocessor line (C# mode)
//! 8. Raw-text element content (first admissible element ends dispatch)
//! 9. The embedded C# scanner
//!
//! A family that falls through may already have advanced the lexer. The
//! next family continues from the current lookahead; the token still starts
//! where the call began.

mod csharp_extras;
mod html_text;
mod literal_at;
mod raw_content;
mod transition;

pub use raw_content::RawTextElement;

use razor_lexer_core::Lexer;
use tracing::{debug, trace, warn};

use crate::context::ModeStack;
use crate::embedded::{ExternalScanner, PassiveCSharpScanner};
use crate::state;
use crate::token::{ScanResult, TokenKind, ValidSymbols};

/// Outcome of trying one token family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Commit a token of this kind.
    Emit(TokenKind),
    /// Decline the whole call.
    Reject,
    /// Not this family; try the next one.
    Fallthrough,
}

/// Return from the dispatcher unless the family fell through.
macro_rules! try_family {
    ($step:expr) => {
        match $step {
            Step::Fallthrough => {}
            done => return done,
        }
    };
}

/// Razor external scanner wrapping an embedded C# scanner.
///
/// Owns the embedded scanner and the mode stack. One instance per parse
/// session; speculative branches clone it or restore it from a serialized
/// state.
#[derive(Clone, Debug, Default)]
pub struct RazorScanner<E = PassiveCSharpScanner> {
    embedded: E,
    modes: ModeStack,
}

impl<E: ExternalScanner> RazorScanner<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_embedded(embedded: E) -> Self {
        RazorScanner {
            embedded,
            modes: ModeStack::new(),
        }
    }

    pub fn mode_stack(&self) -> &ModeStack {
        &self.modes
    }

    pub fn embedded(&self) -> &E {
        &self.embedded
    }

    /// Returns `true` while at least one C# region is open.
    #[inline]
    pub fn is_in_code(&self) -> bool {
        !self.modes.is_markup()
    }

    fn dispatch<L: Lexer>(&mut self, lexer: &mut L, valid: &ValidSymbols<'_>) -> Step {
        if self.modes.is_markup() {
            if valid.allows(TokenKind::TextWithLiteralAt) {
                try_family!(literal_at::scan(lexer));
            }
            if valid.allows(TokenKind::HtmlTextContent) {
                try_family!(html_text::scan(lexer));
            }
        }

        try_family!(transition::scan_start(lexer, valid, &mut self.modes));

        if valid.allows(TokenKind::RazorBlockOpen) {
            try_family!(transition::scan_block_open(lexer, &mut self.modes));
        }

        if self.is_in_code() {
            if valid.allows(TokenKind::CSharpContextClose) {
                try_family!(transition::scan_close(lexer, &mut self.modes));
            }
            if valid.allows(TokenKind::CSharpComment) {
                try_family!(csharp_extras::scan_comment(lexer));
            }
            if valid.allows(TokenKind::CSharpPreproc) {
                try_family!(csharp_extras::scan_preproc(lexer));
            }
        }

        if let Some(element) = RawTextElement::ALL
            .into_iter()
            .find(|element| valid.allows(element.token_kind()))
        {
            return raw_content::scan(lexer, element);
        }

        Step::Fallthrough
    }
}

impl<E: ExternalScanner> ExternalScanner for RazorScanner<E> {
    /// Persist the embedded state followed by the mode stack.
    ///
    /// Returns zero when the state does not fit or the embedded scanner
    /// could not persist its own; the host then cannot resume incrementally
    /// from this point, which is not an error.
    #[tracing::instrument(level = "trace", skip_all, fields(depth = self.modes.depth()))]
    fn serialize(&self, buffer: &mut [u8]) -> usize {
        let embedded_len = self.embedded.serialize(buffer);
        match state::encode(buffer, embedded_len, &self.modes) {
            Ok(len) => len,
            Err(err) => {
                debug!(%err, "scanner state not persisted");
                0
            }
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = buffer.len()))]
    fn deserialize(&mut self, buffer: &[u8]) {
        self.modes.clear();
        let (embedded, razor) = state::split(buffer);
        self.embedded.deserialize(embedded);
        match state::decode_stack(razor) {
            Ok(modes) => self.modes = modes,
            Err(err) => warn!(%err, "discarding malformed mode stack"),
        }
    }

    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &ValidSymbols<'_>) -> ScanResult {
        match self.dispatch(lexer, valid) {
            Step::Emit(kind) => {
                trace!(token = kind.name(), depth = self.modes.depth(), "commit");
                ScanResult::from(kind)
            }
            Step::Reject => {
                trace!(depth = self.modes.depth(), "decline");
                ScanResult::Decline
            }
            Step::Fallthrough => self.embedded.scan(lexer, valid),
        }
    }
}
