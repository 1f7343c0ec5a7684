use crate::parsing::range::Position;

/// Editing commands accepted by [`Document::apply`](super::Document::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertChar(char),
    /// Inserts the configured tab text.
    InsertTab,
    /// Backspace. Joins with the previous line at column 0.
    DeleteBackward,
    /// Ctrl+Backspace: deletes the ASCII alphanumeric run before the caret.
    DeleteWordBackward,
    InsertNewline,
    Paste(String),
    DeleteSelection,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    SetPosition(Position),
    Select { start: Position, end: Position },
    Undo,
    Redo,
}

impl Cmd {
    /// Whether the command continues a typing session rather than ending it.
    pub fn is_typing(&self) -> bool {
        matches!(
            self,
            Cmd::InsertChar(_) | Cmd::InsertTab | Cmd::DeleteBackward
        )
    }
}
