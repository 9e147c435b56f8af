//! Mode stack: which embedded C# regions are open.
//!
//! There is no explicit markup tag. Markup mode *is* the empty stack, so
//! "am I inside C#?" is answered by the stack alone and never by a separate
//! flag that could drift out of sync.

use smallvec::SmallVec;

/// How an embedded C# region was opened.
///
/// The discriminants are the persisted byte values. `0` is reserved for the
/// implicit markup context and is never stored.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextTag {
    /// Opened by `@{` or by `{` after a Razor block keyword.
    Brace = 1,
    /// Opened by `@(`.
    Paren = 2,
}

impl ContextTag {
    /// The character that closes this region.
    #[inline]
    pub const fn closer(self) -> char {
        match self {
            ContextTag::Brace => '}',
            ContextTag::Paren => ')',
        }
    }

    #[inline]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ContextTag {
    /// The rejected byte.
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            1 => Ok(ContextTag::Brace),
            2 => Ok(ContextTag::Paren),
            other => Err(other),
        }
    }
}

/// Nesting stack of open C# regions. Top is the innermost region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModeStack {
    tags: SmallVec<[ContextTag; 16]>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup mode: no C# region is open.
    #[inline]
    pub fn is_markup(&self) -> bool {
        self.tags.is_empty()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn top(&self) -> Option<ContextTag> {
        self.tags.last().copied()
    }

    pub fn push(&mut self, tag: ContextTag) {
        self.tags.push(tag);
    }

    /// Pop the innermost region if `c` is its closer.
    ///
    /// A closer that does not match the top (`)` over a brace region, `}`
    /// over a paren region) leaves the stack untouched.
    pub fn pop_if_closes(&mut self, c: char) -> Option<ContextTag> {
        if self.top()?.closer() == c {
            self.tags.pop()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Tags from outermost to innermost.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = ContextTag> + '_ {
        self.tags.iter().copied()
    }
}

impl FromIterator<ContextTag> for ModeStack {
    fn from_iter<I: IntoIterator<Item = ContextTag>>(iter: I) -> Self {
        ModeStack {
            tags: iter.into_iter().collect(),
        }
    }
}

impl Extend<ContextTag> for ModeStack {
    fn extend<I: IntoIterator<Item = ContextTag>>(&mut self, iter: I) {
        self.tags.extend(iter);
    }
}

#[cfg(test)]
mod tests;
