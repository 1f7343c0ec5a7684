use serde::{Deserialize, Serialize};

/// A character slot in the buffer, addressed by line and column.
///
/// Columns count `char`s and reset at every newline. Ordering is
/// lexicographic on `(line, col)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A `[start, end)` pair of positions attached to every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Builds a range on a single line from `start_col` to `end_col`.
    pub const fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start: Position::new(line, start_col),
            end: Position::new(line, end_col),
        }
    }

    #[must_use]
    pub fn is_single_line(self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns true if the range starts at or after its end.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Inclusive on both ends, so a caret sitting right after the last
    /// character still counts as inside.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Returns true if `other` lies entirely within this range.
    #[must_use]
    pub fn encloses(self, other: Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
