//! # Markdown Lexer
//!
//! Turns a flat buffer into a [`Token::Document`] tree: block tokens holding
//! inline tokens. Scanning is total; malformed input degrades to
//! `Paragraph`/`Text` or to spans with `was_closed: false`.
//!
//! Ranges come from running line/column counters in [`cursor::CharCursor`],
//! so columns reset at each newline and count `char`s.

pub mod blocks;
pub mod cursor;
pub mod inline;
pub mod range;
pub mod snapshot;
pub mod tokens;

pub use range::{Position, Range};
pub use tokens::{Token, TokenKind};

/// Scans `buffer` into a Document token.
pub fn scan(buffer: &str) -> Token {
    blocks::scan_document(buffer)
}
