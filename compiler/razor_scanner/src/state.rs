//! Persisted scanner state.
//!
//! # Layout
//!
//! ```text
//! [C# blob: 2 + 4N bytes][depth: 1][tag: 1] * depth
//!  ^                      ^
//!  0                      framed_len(buffer)
//! ```
//!
//! The C# blob is opaque except for its header, which frames its length
//! (see [`crate::embedded`]). Tags are [`ContextTag`] bytes, outermost first.

use crate::context::{ContextTag, ModeStack};
use crate::embedded::framed_len;

/// Capacity of the host's serialization buffer.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Why a state could not be encoded or decoded.
///
/// Never surfaces through the scanner lifecycle: serialization failures
/// become a zero-length state, decode failures reset the mode stack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("state needs {needed} bytes but the buffer holds {capacity}")]
    Overflow { needed: usize, capacity: usize },
    #[error("mode stack depth {0} does not fit in the one-byte depth field")]
    DepthTooLarge(usize),
    #[error("embedded scanner could not persist its state")]
    EmbeddedNotPersisted,
    #[error("embedded scanner wrote {written} bytes but its header frames {framed}")]
    Framing { written: usize, framed: usize },
    #[error("persisted mode stack truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("invalid context tag byte {0:#04x}")]
    InvalidTag(u8),
}

/// Append `stack` after the `embedded_len`-byte C# blob already in `buffer`.
///
/// Returns the total state length. The C# blob is never empty, so an
/// embedded scanner that wrote nothing failed to persist its own state and
/// the whole state is unpersistable.
pub fn encode(
    buffer: &mut [u8],
    embedded_len: usize,
    stack: &ModeStack,
) -> Result<usize, StateError> {
    let capacity = buffer.len();
    let depth = stack.depth();
    let depth_byte = u8::try_from(depth).map_err(|_| StateError::DepthTooLarge(depth))?;

    if embedded_len == 0 {
        return Err(StateError::EmbeddedNotPersisted);
    }
    let framed = framed_len(&buffer[..embedded_len.min(capacity)]).unwrap_or(0);
    if framed != embedded_len {
        return Err(StateError::Framing {
            written: embedded_len,
            framed,
        });
    }

    let needed = embedded_len + 1 + depth;
    if needed > capacity {
        return Err(StateError::Overflow { needed, capacity });
    }

    buffer[embedded_len] = depth_byte;
    for (slot, tag) in buffer[embedded_len + 1..needed].iter_mut().zip(stack.iter()) {
        *slot = tag.as_byte();
    }
    Ok(needed)
}

/// Split a persisted state into the C# blob and the Razor part.
///
/// A C# blob whose header claims more bytes than are present is handed over
/// as-is; the Razor part is then empty.
pub fn split(buffer: &[u8]) -> (&[u8], &[u8]) {
    let framed = framed_len(buffer).unwrap_or(buffer.len());
    buffer.split_at(framed.min(buffer.len()))
}

/// Decode the Razor part of a state (everything after the C# blob).
///
/// An empty Razor part is an empty stack.
pub fn decode_stack(razor: &[u8]) -> Result<ModeStack, StateError> {
    let Some((&depth, tags)) = razor.split_first() else {
        return Ok(ModeStack::new());
    };
    let depth = usize::from(depth);
    if tags.len() < depth {
        return Err(StateError::Truncated {
            expected: 1 + depth,
            actual: razor.len(),
        });
    }
    tags[..depth]
        .iter()
        .map(|&byte| ContextTag::try_from(byte).map_err(StateError::InvalidTag))
        .collect()
}
