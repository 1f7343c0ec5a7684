//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` TICK = '`' ``, a raw zone that suppresses other parsing
//! - **`Emphasis`**: `MARKER = '*'` plus the bold/italic closing predicates
//! - **`Link`** / **`Image`**: `[`, `]`, `(`, `)` and the image `!`
//!
//! The parser calls these constants; it never hardcodes a delimiter.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
