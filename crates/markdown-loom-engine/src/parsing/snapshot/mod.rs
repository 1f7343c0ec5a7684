//! # Snapshot Testing Support
//!
//! Utilities for testing the lexer via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: renders a token tree as a stable indented text dump for
//!   `insta::assert_snapshot!`
//! - **`invariants`**: runtime checks for lexer correctness (sibling ranges
//!   ordered and disjoint, children inside parents, single-line ranges)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
