use serde::{Deserialize, Serialize};

use crate::parsing::range::Position;

use super::line_ops::{LineOp, apply_forward, apply_inverse};

/// The buffer mutations undo and redo are replayed through.
pub trait LineEditor {
    fn add_line(&mut self, line: usize, text: String);
    fn update_line(&mut self, line: usize, text: String);
    fn remove_line(&mut self, line: usize);
    fn set_cursor_position(&mut self, pos: Position);
}

/// A replayable, invertible batch of line ops.
///
/// Ops start at `top_line + 1`; `top_line` is `-1` for an edit on line 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoItem {
    pub line_ops: Vec<LineOp>,
    pub top_line: isize,
    pub old_cursor_pos: Position,
    pub new_cursor_pos: Position,
}

impl UndoItem {
    /// An item whose first op applies to `line`.
    pub fn at_line(
        line: usize,
        line_ops: Vec<LineOp>,
        old_cursor_pos: Position,
        new_cursor_pos: Position,
    ) -> Self {
        Self {
            line_ops,
            top_line: line as isize - 1,
            old_cursor_pos,
            new_cursor_pos,
        }
    }

    /// The line the first op applies to.
    pub fn first_line(&self) -> usize {
        usize::try_from(self.top_line + 1).unwrap_or(0)
    }
}

/// Linear undo history with a redo tail.
///
/// `cursor` is the slot the next redo reads; everything before it has been
/// applied. Saving a new item drops the redo tail.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    items: Vec<UndoItem>,
    cursor: usize,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an item whose edit has already been applied.
    pub fn save(&mut self, item: UndoItem) {
        self.items.truncate(self.cursor);
        self.items.push(item);
        self.cursor += 1;
    }

    /// Records `item` and applies it.
    pub fn save_and_execute(&mut self, item: UndoItem, editor: &mut impl LineEditor) {
        apply_forward(&item.line_ops, item.first_line(), editor);
        editor.set_cursor_position(item.new_cursor_pos);
        self.save(item);
    }

    /// Reverts the last applied item. Returns false at the bottom of the log.
    pub fn undo(&mut self, editor: &mut impl LineEditor) -> bool {
        if self.cursor == 0 {
            log::debug!("undo: nothing to undo");
            return false;
        }
        self.cursor -= 1;
        let item = &self.items[self.cursor];
        apply_inverse(&item.line_ops, item.first_line(), editor);
        editor.set_cursor_position(item.old_cursor_pos);
        log::debug!("undo: reverted item {} of {}", self.cursor, self.items.len());
        true
    }

    /// Reapplies the next undone item. Returns false when there is none.
    pub fn redo(&mut self, editor: &mut impl LineEditor) -> bool {
        let Some(item) = self.items.get(self.cursor) else {
            log::debug!("redo: nothing to redo");
            return false;
        };
        apply_forward(&item.line_ops, item.first_line(), editor);
        editor.set_cursor_position(item.new_cursor_pos);
        self.cursor += 1;
        log::debug!("redo: reapplied item {} of {}", self.cursor, self.items.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.items.len()
    }

    /// Number of stored items, including the redo tail.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::buffer::Buffer;
    use pretty_assertions::assert_eq;

    /// A buffer plus a recorded caret, standing in for the editor.
    #[derive(Default)]
    struct Recorder {
        buffer: Buffer,
        cursor: Position,
    }

    impl LineEditor for Recorder {
        fn add_line(&mut self, line: usize, text: String) {
            self.buffer.add_line(line, text);
        }
        fn update_line(&mut self, line: usize, text: String) {
            self.buffer.update_line(line, text);
        }
        fn remove_line(&mut self, line: usize) {
            self.buffer.remove_line(line);
        }
        fn set_cursor_position(&mut self, pos: Position) {
            self.cursor = pos;
        }
    }

    fn recorder(text: &str) -> Recorder {
        Recorder {
            buffer: Buffer::from_text(text),
            cursor: Position::default(),
        }
    }

    fn split_item() -> UndoItem {
        // "ab" -> "a\n" + "b", caret after the split
        UndoItem::at_line(
            0,
            vec![LineOp::update("ab", "a\n"), LineOp::add("b")],
            Position::new(0, 1),
            Position::new(1, 0),
        )
    }

    #[test]
    fn save_and_execute_then_undo_restores() {
        let mut ed = recorder("ab");
        let mut log = UndoLog::new();

        log.save_and_execute(split_item(), &mut ed);
        assert_eq!(ed.buffer.lines(), ["a\n", "b"]);
        assert_eq!(ed.cursor, Position::new(1, 0));

        assert!(log.undo(&mut ed));
        assert_eq!(ed.buffer.lines(), ["ab"]);
        assert_eq!(ed.cursor, Position::new(0, 1));

        assert!(log.redo(&mut ed));
        assert_eq!(ed.buffer.lines(), ["a\n", "b"]);
        assert_eq!(ed.cursor, Position::new(1, 0));
    }

    #[test]
    fn boundaries_are_silent_noops() {
        let mut ed = recorder("x");
        let mut log = UndoLog::new();
        assert!(!log.undo(&mut ed));
        assert!(!log.redo(&mut ed));
        assert_eq!(ed.buffer.lines(), ["x"]);
    }

    #[test]
    fn save_truncates_redo_tail() {
        let mut ed = recorder("ab");
        let mut log = UndoLog::new();
        log.save_and_execute(split_item(), &mut ed);
        log.undo(&mut ed);
        assert!(log.can_redo());

        log.save(UndoItem::at_line(
            0,
            vec![LineOp::update("ab", "abc")],
            Position::new(0, 2),
            Position::new(0, 3),
        ));
        assert!(!log.can_redo());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn remove_ops_do_not_advance() {
        let mut ed = recorder("top\na\nb\nc\nend");
        let item = UndoItem::at_line(
            1,
            vec![
                LineOp::update("a\n", "ac\n"),
                LineOp::remove("b\n"),
                LineOp::remove("c\n"),
            ],
            Position::new(3, 0),
            Position::new(1, 1),
        );
        let mut log = UndoLog::new();
        log.save_and_execute(item, &mut ed);
        assert_eq!(ed.buffer.lines(), ["top\n", "ac\n", "end"]);

        log.undo(&mut ed);
        assert_eq!(ed.buffer.lines(), ["top\n", "a\n", "b\n", "c\n", "end"]);
    }

    #[test]
    fn top_line_is_one_above_first_line() {
        let item = UndoItem::at_line(0, vec![], Position::default(), Position::default());
        assert_eq!(item.top_line, -1);
        assert_eq!(item.first_line(), 0);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(split_item()).unwrap();
        assert_eq!(value["topLine"], -1);
        assert_eq!(value["lineOps"][1]["type"], "Add");
        assert_eq!(value["newCursorPos"]["line"], 1);
    }
}
