//! Builders for the structural edits. Each reads the buffer and returns
//! the [`UndoItem`] that performs the edit; nothing is mutated here.

use crate::parsing::range::Position;

use super::{
    buffer::{Buffer, byte_offset, without_newline},
    cursor::{LineSource, Selection},
    line_ops::LineOp,
    undo::UndoItem,
};

/// Splits the line under `at` in two.
pub fn split_line(buffer: &Buffer, at: Position) -> UndoItem {
    let before = buffer.line(at.line).unwrap_or_default();
    let (left, right) = buffer.split_line(at.line, at.col);

    UndoItem::at_line(
        at.line,
        vec![
            LineOp::update(before, format!("{left}\n")),
            LineOp::add(right),
        ],
        at,
        Position::new(at.line + 1, 0),
    )
}

/// Merges `line` into the line above. `None` on the first line.
pub fn join_with_previous(buffer: &Buffer, line: usize, cursor: Position) -> Option<UndoItem> {
    let prev_line = line.checked_sub(1)?;
    let prev = buffer.line(prev_line)?;
    let cur = buffer.line(line)?;

    let kept = without_newline(prev);
    let merged = format!("{kept}{cur}");
    Some(UndoItem::at_line(
        prev_line,
        vec![LineOp::update(prev, merged), LineOp::remove(cur)],
        cursor,
        Position::new(prev_line, kept.chars().count()),
    ))
}

/// Deletes the ASCII alphanumeric run ending at `at`.
///
/// `None` when the char before `at` is not alphanumeric, in which case
/// callers fall back to a plain backspace.
pub fn delete_word_backward(buffer: &Buffer, at: Position) -> Option<UndoItem> {
    let text = buffer.line(at.line)?;
    let (left, right) = buffer.split_line(at.line, at.col);

    let run = left
        .chars()
        .rev()
        .take_while(char::is_ascii_alphanumeric)
        .count();
    if run == 0 {
        return None;
    }

    let new_col = left.chars().count() - run;
    let kept = &left[..byte_offset(left, new_col)];
    Some(UndoItem::at_line(
        at.line,
        vec![LineOp::update(text, format!("{kept}{right}"))],
        at,
        Position::new(at.line, new_col),
    ))
}

/// Line ops for pasting `text` at `at`.
///
/// One pasted line updates the current line. Several pasted lines update
/// the current line with the first, then add the rest; the last one takes
/// the text that was right of the caret.
pub fn paste_ops(buffer: &Buffer, at: Position, text: &str) -> Vec<LineOp> {
    let before = buffer.line(at.line).unwrap_or_default();
    let (left, right) = buffer.split_line(at.line, at.col);
    let pasted: Vec<&str> = text.split('\n').collect();

    let [first, rest @ ..] = pasted.as_slice() else {
        return vec![];
    };
    let Some((last, middle)) = rest.split_last() else {
        return vec![LineOp::update(before, format!("{left}{first}{right}"))];
    };

    let mut ops = vec![LineOp::update(before, format!("{left}{first}\n"))];
    ops.extend(middle.iter().map(|line| LineOp::add(format!("{line}\n"))));
    ops.push(LineOp::add(format!("{last}{right}")));
    ops
}

/// The undo item for a paste of non-empty `text` at `at`.
pub fn paste(buffer: &Buffer, at: Position, text: &str) -> UndoItem {
    let lines: Vec<&str> = text.split('\n').collect();
    let new_cursor = match lines.as_slice() {
        [single] => Position::new(at.line, at.col + single.chars().count()),
        [.., last] => Position::new(at.line + lines.len() - 1, last.chars().count()),
        [] => at,
    };

    UndoItem::at_line(at.line, paste_ops(buffer, at, text), at, new_cursor)
}

/// The text under `sel`, newlines included.
pub fn selected_text(buffer: &Buffer, sel: Selection) -> String {
    let slice = |line: usize, from: usize, to: Option<usize>| -> String {
        let text = buffer.line(line).unwrap_or_default();
        let start = byte_offset(text, from);
        let end = to.map_or(text.len(), |col| byte_offset(text, col));
        text.get(start..end.max(start)).unwrap_or_default().to_string()
    };

    if sel.is_single_line() {
        return slice(sel.start.line, sel.start.col, Some(sel.end.col));
    }

    let mut out = slice(sel.start.line, sel.start.col, None);
    for line in sel.start.line + 1..sel.end.line {
        out.push_str(buffer.line(line).unwrap_or_default());
    }
    out.push_str(&slice(sel.end.line, 0, Some(sel.end.col)));
    out
}

/// Removes the selected range; the caret ends at the selection start.
pub fn delete_selection(buffer: &Buffer, sel: Selection, cursor: Position) -> UndoItem {
    let start_text = buffer.line(sel.start.line).unwrap_or_default();
    let (left, _) = buffer.split_line(sel.start.line, sel.start.col);
    let (_, right) = buffer.split_line(sel.end.line, sel.end.col);

    let mut ops = vec![LineOp::update(start_text, format!("{left}{right}"))];
    if !sel.is_single_line() {
        let end_line = sel.end.line.min(buffer.line_count().saturating_sub(1));
        for line in sel.start.line + 1..=end_line {
            ops.push(LineOp::remove(buffer.line(line).unwrap_or_default()));
        }
    }

    UndoItem::at_line(sel.start.line, ops, cursor, sel.start)
}
