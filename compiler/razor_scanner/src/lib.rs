//! External scanner for Razor templates.
//!
//! The host grammar tokenizes most of a Razor document itself. This crate
//! claims the tokens a context-free grammar cannot express:
//!
//! - text containing a literal `@` (`user@example.com`);
//! - markup text that must stop before `else`/`catch`/`finally`;
//! - `@{`, `@(`, `{` and their closers, tracked on a [`ModeStack`];
//! - C# comments and preprocessor lines, only while inside C#;
//! - verbatim `<script>`/`<style>`/`<title>`/`<textarea>` bodies.
//!
//! Everything else is delegated to an embedded C# scanner through
//! [`ExternalScanner`]. The scanner state (embedded state plus mode stack)
//! is persisted in a fixed byte layout; see [`state`].
//!
//! # Tracing
//!
//! Scan decisions are logged at `trace` level and state failures at
//! `debug`/`warn`. Call [`init_tracing`] and set
//! `RUST_LOG=razor_scanner=trace` to see them.

pub mod context;
pub mod embedded;
mod scanner;
pub mod state;
pub mod token;

use std::sync::Once;

pub use context::{ContextTag, ModeStack};
pub use embedded::{ExternalScanner, Interpolation, PassiveCSharpScanner};
pub use scanner::{RawTextElement, RazorScanner};
pub use state::{StateError, SERIALIZATION_BUFFER_SIZE};
pub use token::{ScanResult, Symbol, TokenKind, ValidSymbols, CSHARP_TOKEN_COUNT};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
