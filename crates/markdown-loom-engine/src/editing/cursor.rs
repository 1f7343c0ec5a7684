use serde::{Deserialize, Serialize};

use crate::parsing::range::Position;

/// Line-length queries the cursor needs from whatever holds the text.
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Addressable columns on `line`: its char count without a trailing
    /// `\n`. Zero for lines past the end.
    fn line_len(&self, line: usize) -> usize;
}

/// A non-collapsed selection, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Orders two positions; selections made backwards come out forwards.
    pub fn normalized(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }
}

/// Caret position plus an optional selection over a line buffer.
///
/// `preferred_col` is the last column set horizontally. Vertical moves
/// clamp to it without overwriting it, so travelling through a short line
/// does not lose the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    preferred_col: usize,
    selection: Option<Selection>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn line(&self) -> usize {
        self.pos.line
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn preferred_col(&self) -> usize {
        self.preferred_col
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// True when no selection is set.
    pub fn is_collapsed(&self) -> bool {
        self.selection.is_none()
    }

    pub fn set_position(&mut self, pos: Position) {
        self.pos = pos;
        self.preferred_col = pos.col;
        self.selection = None;
    }

    pub fn set_col(&mut self, col: usize, update_preferred: bool) {
        self.pos.col = col;
        if update_preferred {
            self.preferred_col = col;
        }
        self.selection = None;
    }

    pub fn set_line(&mut self, line: usize) {
        self.pos.line = line;
        self.selection = None;
    }

    /// Sets the selection as given. Callers order the ends, see
    /// [`Selection::normalized`].
    pub fn set_selection(&mut self, start: Position, end: Position) {
        self.selection = Some(Selection { start, end });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn move_left(&mut self, src: &impl LineSource) {
        if self.pos.col > 0 {
            self.pos.col -= 1;
        } else if self.pos.line > 0 {
            self.pos.line -= 1;
            self.pos.col = src.line_len(self.pos.line);
        }
        self.preferred_col = self.pos.col;
    }

    pub fn move_right(&mut self, src: &impl LineSource) {
        if self.pos.col < src.line_len(self.pos.line) {
            self.pos.col += 1;
        } else if self.pos.line + 1 < src.line_count() {
            self.pos.line += 1;
            self.pos.col = 0;
        }
        self.preferred_col = self.pos.col;
    }

    pub fn move_down(&mut self, src: &impl LineSource) {
        if self.pos.line + 1 < src.line_count() {
            self.pos.line += 1;
            self.pos.col = self.preferred_col.min(src.line_len(self.pos.line));
        }
    }

    pub fn move_up(&mut self, src: &impl LineSource) {
        if self.pos.line > 0 {
            self.pos.line -= 1;
            self.pos.col = self.preferred_col.min(src.line_len(self.pos.line));
        }
    }
}
