use serde::{Deserialize, Serialize};

use super::undo::LineEditor;

/// One line-level mutation, recorded with enough content to invert it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineOp {
    Add { content: String },
    Remove { content: String },
    Update { before: String, after: String },
}

impl LineOp {
    pub fn add(content: impl Into<String>) -> Self {
        LineOp::Add {
            content: content.into(),
        }
    }

    pub fn remove(content: impl Into<String>) -> Self {
        LineOp::Remove {
            content: content.into(),
        }
    }

    pub fn update(before: impl Into<String>, after: impl Into<String>) -> Self {
        LineOp::Update {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Replays `ops` starting at `line`.
///
/// Add and Update move on to the next line; Remove stays, since the
/// following line slides into its place.
pub fn apply_forward(ops: &[LineOp], mut line: usize, editor: &mut impl LineEditor) {
    for op in ops {
        match op {
            LineOp::Add { content } => {
                editor.add_line(line, content.clone());
                line += 1;
            }
            LineOp::Remove { .. } => editor.remove_line(line),
            LineOp::Update { after, .. } => {
                editor.update_line(line, after.clone());
                line += 1;
            }
        }
    }
}

/// Undoes `ops` starting at `line`, walking them in the same order.
pub fn apply_inverse(ops: &[LineOp], mut line: usize, editor: &mut impl LineEditor) {
    for op in ops {
        match op {
            LineOp::Add { .. } => editor.remove_line(line),
            LineOp::Remove { content } => {
                editor.add_line(line, content.clone());
                line += 1;
            }
            LineOp::Update { before, .. } => {
                editor.update_line(line, before.clone());
                line += 1;
            }
        }
    }
}
