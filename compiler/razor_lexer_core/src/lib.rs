//! Low-level building blocks for the Razor external scanner.
//!
//! This crate is deliberately free of any scanner state. It provides:
//!
//! - [`char_class`]: locale-independent letter/digit/word predicates used by
//!   every scanning family.
//! - [`Lexer`]: the cursor capability the host parsing engine hands to the
//!   scanner on every call (lookahead, advance, mark end).
//! - [`SourceLexer`]: an in-memory [`Lexer`] over a `&str` that reproduces
//!   the host engine's token-boundary rules. Used by tests and by anything
//!   that wants to drive the scanner without the host engine.

pub mod char_class;
mod lexer;
mod source_lexer;

pub use lexer::Lexer;
pub use source_lexer::{SourceLexer, Span};
