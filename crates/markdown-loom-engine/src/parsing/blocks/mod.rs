//! # Block Scanning
//!
//! Line-oriented dispatch from the first character of each line.
//!
//! ## Modules
//!
//! - **`kinds`**: block types owning their syntax (`Header`, `Rule`, `ListMarker`, `BlockQuote`)
//! - **`open`**: `try_open_block` precedence dispatch over the kinds
//! - **`scanner`**: the block loop, which hands each line body to inline scanning
//!
//! ## Key Invariants
//!
//! - Every block but `List` covers exactly one line
//! - Invalid openers fall back to `Paragraph`; scanning never fails

pub mod kinds;
pub mod open;
pub mod scanner;

pub use open::{BlockOpen, try_open_block};
pub use scanner::{scan_blocks, scan_document};
