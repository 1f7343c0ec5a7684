/*!
 * # Editing Core
 *
 * A line-oriented editing session with undo/redo and structural diffs.
 *
 * ## Architecture Overview
 *
 * ### 1. Line Buffer
 * - The text is a list of lines, each but the last ending in `"\n"`
 * - The newline is stored but not addressable; columns count `char`s
 * - `add_line`/`update_line`/`remove_line` are the only mutations undo needs
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) applied through `Document::apply`
 * - Each application re-scans the whole buffer and diffs the new token tree
 *   against the cached one, returning the edit script in a `Patch`
 *
 * ### 3. Undo Log of Line Ops
 * - Structural edits (newline, join, paste, word delete, selection delete)
 *   compile to an `UndoItem` of `LineOp`s and go through `save_and_execute`
 * - Typed characters on one line accumulate in a `TypingSession` and are
 *   saved as one item when the session ends: on movement, a structural
 *   edit, or an undo/redo request
 *
 * ### 4. Cursor and Selection
 * - `Cursor` owns the caret, a preferred column for vertical travel and an
 *   optional `Selection`
 * - Line lengths come from a `LineSource`, so the cursor never holds a
 *   reference to the buffer
 *
 * ## Module Structure
 *
 * - **`buffer`**: `Buffer` line storage and char-column helpers
 * - **`cursor`**: `Cursor`, `Selection`, `LineSource`
 * - **`line_ops`**: `LineOp` with forward and inverse replay
 * - **`undo`**: `UndoItem`, `UndoLog`, `LineEditor`
 * - **`typing`**: `TypingSession` coalescing
 * - **`edits`**: pure builders for structural edits and copy/paste
 * - **`commands`**: the `Cmd` enum
 * - **`document`**: `Document`, the session tying it all together
 * - **`patch`**: what `apply` returns
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markdown_loom_engine::editing::*;
 *
 * let mut doc = Document::from_text("hello");
 * doc.apply(Cmd::SetPosition(markdown_loom_engine::Position::new(0, 5))).unwrap();
 * let patch = doc.apply(Cmd::InsertNewline).unwrap();
 *
 * assert_eq!(doc.text(), "hello\n");
 * assert_eq!(patch.cursor.line, 1);
 * ```
 */

pub mod buffer;
pub mod commands;
pub mod cursor;
pub mod document;
pub mod edits;
pub mod line_ops;
pub mod patch;
pub mod typing;
pub mod undo;

pub use buffer::Buffer;
pub use commands::Cmd;
pub use cursor::{Cursor, LineSource, Selection};
pub use document::{Document, EditorSettings};
pub use line_ops::LineOp;
pub use patch::Patch;
pub use typing::TypingSession;
pub use undo::{LineEditor, UndoItem, UndoLog};
