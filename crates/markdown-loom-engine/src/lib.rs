pub mod diff;
pub mod editing;
pub mod parsing;

// Re-export key types for easier usage
pub use diff::{DiffError, DiffOp, apply, diff, diff_documents};
pub use editing::{Cmd, Cursor, Document, Patch, Selection, UndoItem, UndoLog};
pub use parsing::{Position, Range, Token, TokenKind, scan};
