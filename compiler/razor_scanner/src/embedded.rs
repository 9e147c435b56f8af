//! Contract with the embedded C# scanner.
//!
//! The C# scanner is independently maintained and consumed as a black box.
//! Razor only relies on two things:
//!
//! 1. The four-operation lifecycle in [`ExternalScanner`].
//! 2. The layout of its persisted state, which Razor needs to find where the
//!    C# blob ends and its own state begins:
//!
//! ```text
//! [quote_count: 1][interpolation_count N: 1][interpolation records: 4 * N]
//! ```
//!
//! A change to that layout on the C# side breaks every persisted Razor state.

use razor_lexer_core::Lexer;

use crate::token::{ScanResult, ValidSymbols};

/// Size of the fixed header of the C# state (quote count + interpolation count).
pub const EMBEDDED_HEADER_LEN: usize = 2;

/// Size of one persisted interpolation record.
pub const INTERPOLATION_RECORD_LEN: usize = 4;

/// Lifecycle of an external scanner plugged into the host engine.
///
/// Creation is [`Default`] and destruction is [`Drop`]. Both the embedded
/// C# scanner and the Razor scanner that wraps it implement this trait.
pub trait ExternalScanner: Default {
    /// Write the scanner state into `buffer`, returning the number of bytes
    /// written. `buffer.len()` is the host's capacity. Zero means nothing
    /// could be persisted.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state from `buffer`. An empty buffer resets to initial state.
    fn deserialize(&mut self, buffer: &[u8]);

    /// Try to produce one token at the lexer's position.
    fn scan<L: Lexer>(&mut self, lexer: &mut L, valid: &ValidSymbols<'_>) -> ScanResult;
}

/// Length of the C# blob at the start of `buffer`, read from its header.
///
/// Returns `None` if the header itself is incomplete.
pub fn framed_len(buffer: &[u8]) -> Option<usize> {
    let count = *buffer.get(1)?;
    Some(EMBEDDED_HEADER_LEN + INTERPOLATION_RECORD_LEN * usize::from(count))
}

/// One open interpolated string, as persisted by the C# scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interpolation {
    pub open_brace_count: u8,
    pub quote_count: u8,
    pub dollar_count: u8,
    pub string_type: u8,
}

impl Interpolation {
    fn to_bytes(self) -> [u8; INTERPOLATION_RECORD_LEN] {
        [
            self.open_brace_count,
            self.quote_count,
            self.dollar_count,
            self.string_type,
        ]
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [open_brace_count, quote_count, dollar_count, string_type] => Some(Interpolation {
                open_brace_count,
                quote_count,
                dollar_count,
                string_type,
            }),
            _ => None,
        }
    }
}

/// Stand-in for the C# scanner that never claims a token.
///
/// Keeps the C# persisted state byte-exact across serialize/deserialize,
/// so a Razor state produced with the real C# scanner survives a round trip
/// through this one. Used when the host grammar lexes C# with its own rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassiveCSharpScanner {
    quote_count: u8,
    interpolations: Vec<Interpolation>,
}

impl PassiveCSharpScanner {
    pub fn with_state(quote_count: u8, interpolations: Vec<Interpolation>) -> Self {
        PassiveCSharpScanner {
            quote_count,
            interpolations,
        }
    }

    pub fn quote_count(&self) -> u8 {
        self.quote_count
    }

    pub fn interpolations(&self) -> &[Interpolation] {
        &self.interpolations
    }
}

impl ExternalScanner for PassiveCSharpScanner {
    fn serialize(&self, buffer: &mut [u8]) -> usize {
        let Ok(count) = u8::try_from(self.interpolations.len()) else {
            return 0;
        };
        let size = EMBEDDED_HEADER_LEN + INTERPOLATION_RECORD_LEN * self.interpolations.len();
        if size > buffer.len() {
            return 0;
        }
        buffer[0] = self.quote_count;
        buffer[1] = count;
        let records = buffer[EMBEDDED_HEADER_LEN..size].chunks_exact_mut(INTERPOLATION_RECORD_LEN);
        for (slot, interpolation) in records.zip(&self.interpolations) {
            slot.copy_from_slice(&interpolation.to_bytes());
        }
        size
    }

    fn deserialize(&mut self, buffer: &[u8]) {
        self.interpolations.clear();
        self.quote_count = buffer.first().copied().unwrap_or(0);
        let Some(len) = framed_len(buffer) else {
            return;
        };
        let end = len.min(buffer.len());
        self.interpolations.extend(
            buffer[EMBEDDED_HEADER_LEN..end]
                .chunks_exact(INTERPOLATION_RECORD_LEN)
                .filter_map(Interpolation::from_bytes),
        );
    }

    fn scan<L: Lexer>(&mut self, _lexer: &mut L, _valid: &ValidSymbols<'_>) -> ScanResult {
        ScanResult::Decline
    }
}
