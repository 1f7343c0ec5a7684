use crate::{
    diff::{DiffError, diff_documents},
    parsing::{range::Position, scan, tokens::Token},
};

use super::{
    Cmd, Patch,
    buffer::Buffer,
    cursor::{Cursor, Selection},
    edits,
    typing::TypingSession,
    undo::{LineEditor, UndoItem, UndoLog},
};

/// Per-session editing preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Text inserted by [`Cmd::InsertTab`].
    pub tab_text: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_text: "\t".to_string(),
        }
    }
}

/// An editing session over a line buffer.
///
/// Every [`Cmd`] goes through [`Document::apply`], which mutates the buffer,
/// re-scans the whole text and diffs the new token tree against the cached
/// one. Edits are recorded in the [`UndoLog`]; runs of typed characters on
/// one line are coalesced into a single entry.
///
/// ```rust
/// # use markdown_loom_engine::editing::{Cmd, Document};
/// let mut doc = Document::from_text("");
/// for c in "# hi".chars() {
///     doc.apply(Cmd::InsertChar(c)).unwrap();
/// }
/// doc.apply(Cmd::Undo).unwrap();
/// assert_eq!(doc.text(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Buffer,
    cursor: Cursor,
    undo: UndoLog,
    typing: Option<TypingSession>,
    /// Token tree of the buffer as of the last `apply`.
    tree: Token,
    version: u64,
    settings: EditorSettings,
}

/// Routes undo-log replay into the buffer and caret.
struct LineTarget<'a> {
    buffer: &'a mut Buffer,
    cursor: &'a mut Cursor,
}

impl LineEditor for LineTarget<'_> {
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
        self.cursor.set_position(self.buffer.clamp(pos));
    }
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Buffer::from_text(text),
            cursor: Cursor::new(),
            undo: UndoLog::new(),
            typing: None,
            tree: scan(text),
            version: 0,
            settings: EditorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The token tree as of the last command.
    pub fn tree(&self) -> &Token {
        &self.tree
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_some()
    }

    /// Text under the selection, or `None` when collapsed.
    pub fn selected_text(&self) -> Option<String> {
        self.cursor
            .selection()
            .map(|sel| edits::selected_text(&self.buffer, sel))
    }

    /// Applies a command, re-scans and returns the diff against the
    /// previous tree.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, DiffError> {
        if !cmd.is_typing() {
            self.flush_typing();
        }

        match cmd {
            Cmd::InsertChar(c) => self.insert_typed(&c.to_string()),
            Cmd::InsertTab => {
                let tab = self.settings.tab_text.clone();
                self.insert_typed(&tab);
            }
            Cmd::DeleteBackward => self.delete_backward(),
            Cmd::DeleteWordBackward => self.delete_word_backward(),
            Cmd::InsertNewline => {
                self.delete_selection();
                let item = edits::split_line(&self.buffer, self.cursor.position());
                self.execute(item);
            }
            Cmd::Paste(text) => self.paste(&text),
            Cmd::DeleteSelection => self.delete_selection(),
            Cmd::MoveLeft => {
                self.cursor.move_left(&self.buffer);
                self.cursor.clear_selection();
            }
            Cmd::MoveRight => {
                self.cursor.move_right(&self.buffer);
                self.cursor.clear_selection();
            }
            Cmd::MoveUp => {
                self.cursor.move_up(&self.buffer);
                self.cursor.clear_selection();
            }
            Cmd::MoveDown => {
                self.cursor.move_down(&self.buffer);
                self.cursor.clear_selection();
            }
            Cmd::SetPosition(pos) => self.cursor.set_position(self.buffer.clamp(pos)),
            Cmd::Select { start, end } => self.select(start, end),
            Cmd::Undo => {
                let mut target = LineTarget {
                    buffer: &mut self.buffer,
                    cursor: &mut self.cursor,
                };
                self.undo.undo(&mut target);
            }
            Cmd::Redo => {
                let mut target = LineTarget {
                    buffer: &mut self.buffer,
                    cursor: &mut self.cursor,
                };
                self.undo.redo(&mut target);
            }
        }

        self.rescan()
    }

    fn rescan(&mut self) -> Result<Patch, DiffError> {
        let tree = scan(&self.buffer.text());
        let ops = diff_documents(&self.tree, &tree)?;
        self.tree = tree;
        self.version += 1;
        log::trace!("version {}: {} diff ops", self.version, ops.len());

        Ok(Patch {
            ops,
            cursor: self.cursor.position(),
            selection: self.cursor.selection(),
            version: self.version,
        })
    }

    /// Records and applies a structural edit.
    fn execute(&mut self, item: UndoItem) {
        let mut target = LineTarget {
            buffer: &mut self.buffer,
            cursor: &mut self.cursor,
        };
        self.undo.save_and_execute(item, &mut target);
    }

    /// Pushes the pending typing session, if any, onto the undo log.
    fn flush_typing(&mut self) {
        let Some(session) = self.typing.take() else {
            return;
        };
        let current = self.buffer.line(session.line()).unwrap_or_default();
        if let Some(item) = session.finish(current, self.cursor.position()) {
            self.undo.save(item);
        }
    }

    /// Starts a typing session on the caret line unless one is running there.
    fn begin_typing(&mut self) {
        let line = self.cursor.line();
        if self.typing.as_ref().is_some_and(|s| s.line() == line) {
            return;
        }
        self.flush_typing();
        let text = self.buffer.line(line).unwrap_or_default();
        self.typing = Some(TypingSession::begin(line, text, self.cursor.position()));
    }

    fn insert_typed(&mut self, text: &str) {
        // a `\n` may only end a buffer line
        if text.contains('\n') {
            self.flush_typing();
            self.paste(text);
            return;
        }
        if !self.cursor.is_collapsed() {
            self.flush_typing();
            self.delete_selection();
        }
        self.begin_typing();

        let at = self.cursor.position();
        let (left, right) = self.buffer.split_line(at.line, at.col);
        let updated = format!("{left}{text}{right}");
        let col = left.chars().count() + text.chars().count();

        self.buffer.update_line(at.line, updated);
        self.cursor.set_col(col, true);
    }

    fn delete_backward(&mut self) {
        if !self.cursor.is_collapsed() {
            self.flush_typing();
            self.delete_selection();
            return;
        }

        let at = self.cursor.position();
        if at.col > 0 {
            self.begin_typing();
            let (left, right) = self.buffer.split_line(at.line, at.col);
            let mut left = left.to_string();
            left.pop();
            let col = left.chars().count();
            let updated = format!("{left}{right}");

            self.buffer.update_line(at.line, updated);
            self.cursor.set_col(col, true);
        } else {
            self.flush_typing();
            if let Some(item) = edits::join_with_previous(&self.buffer, at.line, at) {
                self.execute(item);
            }
        }
    }

    fn delete_word_backward(&mut self) {
        if !self.cursor.is_collapsed() {
            self.delete_selection();
            return;
        }
        match edits::delete_word_backward(&self.buffer, self.cursor.position()) {
            Some(item) => self.execute(item),
            None => self.delete_backward(),
        }
    }

    fn paste(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.delete_selection();
        let item = edits::paste(&self.buffer, self.cursor.position(), text);
        self.execute(item);
    }

    /// Deletes the selection, if any, as one undo item.
    fn delete_selection(&mut self) {
        let Some(sel) = self.cursor.selection() else {
            return;
        };
        let item = edits::delete_selection(&self.buffer, sel, self.cursor.position());
        self.execute(item);
    }

    fn select(&mut self, start: Position, end: Position) {
        let start = self.buffer.clamp(start);
        let end = self.buffer.clamp(end);
        if start == end {
            self.cursor.set_position(start);
            return;
        }
        let sel = Selection::normalized(start, end);
        self.cursor.set_position(sel.end);
        self.cursor.set_selection(sel.start, sel.end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(text: &str) -> Document {
        let mut doc = Document::from_text("");
        for c in text.chars() {
            match c {
                '\n' => doc.apply(Cmd::InsertNewline),
                c => doc.apply(Cmd::InsertChar(c)),
            }
            .unwrap();
        }
        doc
    }

    fn at(doc: &Document) -> (usize, usize) {
        let p = doc.cursor().position();
        (p.line, p.col)
    }

    #[test]
    fn typing_then_undo_restores_empty_line() {
        let mut doc = typed("abc");
        assert_eq!(doc.text(), "abc");
        assert_eq!(at(&doc), (0, 3));

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "");
        assert_eq!(at(&doc), (0, 0));

        doc.apply(Cmd::Redo).unwrap();
        assert_eq!(doc.text(), "abc");
        assert_eq!(at(&doc), (0, 3));
    }

    #[test]
    fn typing_run_is_one_undo_item() {
        let mut doc = typed("hello");
        doc.apply(Cmd::MoveLeft).unwrap();
        assert_eq!(doc.undo_log().len(), 1);
        assert!(!doc.is_typing());
    }

    #[test]
    fn newline_splits_and_records_typing_first() {
        let mut doc = typed("ab\ncd");
        assert_eq!(doc.buffer().lines(), ["ab\n", "cd"]);
        assert_eq!(at(&doc), (1, 2));

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "ab\n");
        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "ab");
        assert_eq!(at(&doc), (0, 2));
        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn backspace_inside_line() {
        let mut doc = Document::from_text("text");
        doc.apply(Cmd::SetPosition(Position::new(0, 2))).unwrap();
        doc.apply(Cmd::DeleteBackward).unwrap();
        assert_eq!(doc.text(), "txt");
        assert_eq!(at(&doc), (0, 1));
    }

    #[test]
    fn backspace_at_line_start_joins() {
        let mut doc = Document::from_text("text\nfoo");
        doc.apply(Cmd::SetPosition(Position::new(1, 0))).unwrap();
        doc.apply(Cmd::DeleteBackward).unwrap();
        assert_eq!(doc.text(), "textfoo");
        assert_eq!(at(&doc), (0, 4));

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "text\nfoo");
        assert_eq!(at(&doc), (1, 0));
    }

    #[test]
    fn backspace_at_buffer_start_is_noop() {
        let mut doc = Document::from_text("abc");
        let patch = doc.apply(Cmd::DeleteBackward).unwrap();
        assert_eq!(doc.text(), "abc");
        assert!(patch.ops.is_empty());
        assert!(!doc.undo_log().can_undo());
    }

    #[test]
    fn word_backspace() {
        let mut doc = Document::from_text("foo bar");
        doc.apply(Cmd::SetPosition(Position::new(0, 7))).unwrap();
        doc.apply(Cmd::DeleteWordBackward).unwrap();
        assert_eq!(doc.text(), "foo ");
        doc.apply(Cmd::DeleteWordBackward).unwrap();
        assert_eq!(doc.text(), "foo");
    }

    #[test]
    fn tab_uses_settings() {
        let mut doc = Document::from_text("").with_settings(EditorSettings {
            tab_text: "  ".into(),
        });
        doc.apply(Cmd::InsertTab).unwrap();
        assert_eq!(doc.text(), "  ");
        assert_eq!(at(&doc), (0, 2));
    }

    #[test]
    fn paste_multiline_then_undo() {
        let mut doc = Document::from_text("LL");
        doc.apply(Cmd::SetPosition(Position::new(0, 1))).unwrap();
        doc.apply(Cmd::Paste("1\n2".into())).unwrap();
        assert_eq!(doc.buffer().lines(), ["L1\n", "2L"]);
        assert_eq!(at(&doc), (1, 1));

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "LL");
        assert_eq!(at(&doc), (0, 1));
    }

    #[test]
    fn select_copy_and_delete() {
        let mut doc = Document::from_text("one\ntwo\nthree");
        doc.apply(Cmd::Select {
            start: Position::new(2, 2),
            end: Position::new(0, 1),
        })
        .unwrap();
        assert_eq!(doc.selected_text().as_deref(), Some("ne\ntwo\nth"));

        doc.apply(Cmd::DeleteSelection).unwrap();
        assert_eq!(doc.text(), "oree");
        assert_eq!(at(&doc), (0, 1));
        assert_eq!(doc.selected_text(), None);

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "one\ntwo\nthree");
    }

    #[test]
    fn typing_over_selection_replaces_it() {
        let mut doc = Document::from_text("abcdef");
        doc.apply(Cmd::Select {
            start: Position::new(0, 1),
            end: Position::new(0, 5),
        })
        .unwrap();
        doc.apply(Cmd::InsertChar('X')).unwrap();
        assert_eq!(doc.text(), "aXf");
        assert_eq!(at(&doc), (0, 2));
    }

    #[test]
    fn patches_diff_against_previous_tree() {
        let mut doc = Document::from_text("test");
        doc.apply(Cmd::SetPosition(Position::new(0, 4))).unwrap();
        let patch = doc.apply(Cmd::InsertChar('!')).unwrap();
        assert_eq!(patch.ops.len(), 1);
        assert_eq!(patch.version, 2);
        assert_eq!(doc.tree(), &scan("test!"));
    }

    #[test]
    fn movement_clears_selection() {
        let mut doc = Document::from_text("abc");
        doc.apply(Cmd::Select {
            start: Position::new(0, 0),
            end: Position::new(0, 2),
        })
        .unwrap();
        let patch = doc.apply(Cmd::MoveRight).unwrap();
        assert_eq!(patch.selection, None);
        assert_eq!(patch.cursor, Position::new(0, 3));
    }

    #[test]
    fn typed_newline_splits_the_line() {
        let mut doc = Document::from_text("ab");
        doc.apply(Cmd::SetPosition(Position::new(0, 1))).unwrap();
        doc.apply(Cmd::InsertChar('\n')).unwrap();

        assert_eq!(doc.buffer().lines(), ["a\n", "b"]);
        assert_eq!(at(&doc), (1, 0));
        assert_eq!(doc.tree(), &scan("a\nb"));

        doc.apply(Cmd::MoveUp).unwrap();
        assert_eq!(at(&doc), (0, 0));
        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "ab");
    }

    #[test]
    fn tab_text_with_newline_splits_the_line() {
        let mut doc = Document::from_text("x").with_settings(EditorSettings {
            tab_text: "  \n".into(),
        });
        doc.apply(Cmd::InsertTab).unwrap();

        assert_eq!(doc.buffer().lines(), ["  \n", "x"]);
        assert_eq!(at(&doc), (1, 0));
    }

    #[test]
    fn typed_newline_flushes_pending_typing() {
        let mut doc = typed("ab");
        doc.apply(Cmd::InsertChar('\n')).unwrap();
        assert_eq!(doc.buffer().len(), 2);
        assert!(!doc.is_typing());

        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "ab");
        doc.apply(Cmd::Undo).unwrap();
        assert_eq!(doc.text(), "");
    }
}
