//! External token catalogue shared with the host grammar.
//!
//! Symbol numbering is part of the contract with the generated grammar: the
//! embedded C# scanner owns `0..CSHARP_TOKEN_COUNT` and the Razor kinds are
//! appended after it in declaration order.

use std::fmt;

/// Number of external tokens declared by the embedded C# scanner.
pub const CSHARP_TOKEN_COUNT: u16 = 12;

/// Index of an external token as understood by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub u16);

impl Symbol {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if the symbol belongs to the embedded C# scanner.
    #[inline]
    pub const fn is_embedded(self) -> bool {
        self.0 < CSHARP_TOKEN_COUNT
    }
}

/// Razor-specific external tokens.
///
/// # Discriminant Ranges
///
/// | Range | Family |
/// |-------|--------|
/// | 12-13 | Markup text |
/// | 14-17 | Mode transitions |
/// | 18-19 | C#-only extras |
/// | 20-23 | Raw-text element content |
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Markup text ===
    /// Text containing a literal `@` between word characters (`user@host`).
    TextWithLiteralAt = CSHARP_TOKEN_COUNT,
    /// Plain markup text, stopping before `else`/`catch`/`finally` at line start.
    HtmlTextContent,

    // === Mode transitions ===
    /// `@{`
    CSharpCodeBlockStart,
    /// `@(`
    CSharpExplicitExprStart,
    /// `{` after a Razor block keyword.
    RazorBlockOpen,
    /// `}` or `)` closing the innermost C# region.
    CSharpContextClose,

    // === C#-only extras ===
    /// `// ...` or `/* ... */`
    CSharpComment,
    /// `#directive ...`
    CSharpPreproc,

    // === Raw-text element content ===
    ScriptContent,
    StyleContent,
    TitleContent,
    TextareaContent,
}

impl TokenKind {
    /// Every Razor kind, in symbol order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::TextWithLiteralAt,
        TokenKind::HtmlTextContent,
        TokenKind::CSharpCodeBlockStart,
        TokenKind::CSharpExplicitExprStart,
        TokenKind::RazorBlockOpen,
        TokenKind::CSharpContextClose,
        TokenKind::CSharpComment,
        TokenKind::CSharpPreproc,
        TokenKind::ScriptContent,
        TokenKind::StyleContent,
        TokenKind::TitleContent,
        TokenKind::TextareaContent,
    ];

    /// One past the last Razor symbol; the size of a complete valid-symbols table.
    pub const SYMBOL_COUNT: usize = CSHARP_TOKEN_COUNT as usize + Self::ALL.len();

    #[inline]
    pub const fn symbol(self) -> Symbol {
        Symbol(self as u16)
    }

    pub fn from_symbol(symbol: Symbol) -> Option<TokenKind> {
        let offset = symbol.0.checked_sub(CSHARP_TOKEN_COUNT)?;
        Self::ALL.get(usize::from(offset)).copied()
    }

    /// Grammar-facing name of the token.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::TextWithLiteralAt => "TEXT_WITH_LITERAL_AT",
            TokenKind::HtmlTextContent => "HTML_TEXT_CONTENT",
            TokenKind::CSharpCodeBlockStart => "CSHARP_CODE_BLOCK_START",
            TokenKind::CSharpExplicitExprStart => "CSHARP_EXPLICIT_EXPR_START",
            TokenKind::RazorBlockOpen => "RAZOR_BLOCK_OPEN",
            TokenKind::CSharpContextClose => "CSHARP_CONTEXT_CLOSE",
            TokenKind::CSharpComment => "CSHARP_COMMENT",
            TokenKind::CSharpPreproc => "CSHARP_PREPROC",
            TokenKind::ScriptContent => "SCRIPT_CONTENT",
            TokenKind::StyleContent => "STYLE_CONTENT",
            TokenKind::TitleContent => "TITLE_CONTENT",
            TokenKind::TextareaContent => "TEXTAREA_CONTENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The host's admissible-symbols table for one scan call.
///
/// Indices outside the table read as inadmissible.
#[derive(Clone, Copy, Debug)]
pub struct ValidSymbols<'a> {
    table: &'a [bool],
}

impl<'a> ValidSymbols<'a> {
    pub const fn new(table: &'a [bool]) -> Self {
        ValidSymbols { table }
    }

    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.table.get(symbol.index()).copied().unwrap_or(false)
    }

    #[inline]
    pub fn allows(&self, kind: TokenKind) -> bool {
        self.contains(kind.symbol())
    }

    /// The raw table, for handing to the embedded scanner.
    pub fn as_slice(&self) -> &'a [bool] {
        self.table
    }
}

/// Outcome of one scan call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanResult {
    /// A token of the given kind ends at the last marked position.
    Commit(Symbol),
    /// Not applicable here; the host tries another rule.
    Decline,
}

impl ScanResult {
    #[inline]
    pub fn is_commit(self) -> bool {
        matches!(self, ScanResult::Commit(_))
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            ScanResult::Commit(symbol) => Some(symbol),
            ScanResult::Decline => None,
        }
    }

    /// The committed Razor kind, if the committed symbol is one.
    pub fn kind(self) -> Option<TokenKind> {
        self.symbol().and_then(TokenKind::from_symbol)
    }
}

impl From<TokenKind> for ScanResult {
    fn from(kind: TokenKind) -> Self {
        ScanResult::Commit(kind.symbol())
    }
}
