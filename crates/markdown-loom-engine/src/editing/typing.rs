use crate::parsing::range::Position;

use super::{line_ops::LineOp, undo::UndoItem};

/// A run of single-character edits on one line, pending as one undo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSession {
    line: usize,
    initial_text: String,
    initial_cursor: Position,
}

impl TypingSession {
    /// Starts a session on `line`, whose content before any edit is `text`.
    pub fn begin(line: usize, text: impl Into<String>, cursor: Position) -> Self {
        Self {
            line,
            initial_text: text.into(),
            initial_cursor: cursor,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Closes the session against the line's current content.
    ///
    /// Returns `None` when the line ended up unchanged.
    pub fn finish(self, current_text: &str, cursor: Position) -> Option<UndoItem> {
        if self.initial_text == current_text {
            return None;
        }
        Some(UndoItem::at_line(
            self.line,
            vec![LineOp::update(self.initial_text, current_text)],
            self.initial_cursor,
            cursor,
        ))
    }
}
