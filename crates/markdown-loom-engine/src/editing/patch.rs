use serde::Serialize;

use crate::{diff::DiffOp, parsing::range::Position};

use super::cursor::Selection;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    /// Edit script from the previous token tree to the current one.
    pub ops: Vec<DiffOp>,
    pub cursor: Position,
    pub selection: Option<Selection>,
    pub version: u64,
}
