//! # Inline Scanning
//!
//! Character-level scanning of the text inside a block line.
//!
//! Inline scanning never crosses a newline. The block scanner hands a
//! [`CharCursor`](crate::parsing::cursor::CharCursor) positioned after any
//! block prefix, and the inline scanner consumes up to (not including) the
//! next `\n`.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter-owning types (`CodeSpan`, `Emphasis`, `Link`, `Image`)
//! - **`parser`**: `scan_inline()` entry point with one helper per span kind
//!
//! ## Precedence
//!
//! Code spans are raw zones: `` `**x**` `` is a single Code token. Bold and
//! italic nest; a `**` inside italic closes the italic at its first `*`.
//! Unterminated spans run to the end of the line with `was_closed: false`.

pub mod kinds;
pub mod parser;

pub use parser::scan_inline;
