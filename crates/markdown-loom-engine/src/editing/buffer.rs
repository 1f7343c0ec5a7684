use crate::parsing::range::Position;

use super::cursor::LineSource;

/// The text as a list of lines.
///
/// Every line but the last ends with `"\n"`. The newline is part of the
/// stored string but not an addressable column. There is always at least
/// one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl Buffer {
    /// Splits `text` after each `\n`. A trailing `\n` yields an empty last line.
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
        if text.is_empty() || text.ends_with('\n') {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::default();
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The whole buffer as one string, as the lexer sees it.
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    pub fn add_line(&mut self, line: usize, text: String) {
        let at = line.min(self.lines.len());
        self.lines.insert(at, text);
    }

    pub fn update_line(&mut self, line: usize, text: String) {
        if let Some(slot) = self.lines.get_mut(line) {
            *slot = text;
        }
    }

    /// Removes `line`, unless it is out of range or the only line left.
    pub fn remove_line(&mut self, line: usize) -> bool {
        if self.lines.len() > 1 && line < self.lines.len() {
            self.lines.remove(line);
            true
        } else {
            false
        }
    }

    /// Clamps `pos` to an addressable slot.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    /// Splits `line` at char column `col` into the text before and after.
    /// The right part keeps the trailing `\n`, if any.
    pub fn split_line(&self, line: usize, col: usize) -> (&str, &str) {
        let text = self.line(line).unwrap_or_default();
        text.split_at(byte_offset(text, col))
    }
}

/// Byte offset of char column `col` in `s`, clamped to `s.len()`.
pub fn byte_offset(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map_or(s.len(), |(i, _)| i)
}

/// `s` without its trailing `\n`.
pub fn without_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

impl LineSource for Buffer {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.line(line)
            .map_or(0, |text| without_newline(text).chars().count())
    }
}
