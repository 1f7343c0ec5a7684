//! # Structural Diff
//!
//! Computes an edit script between two sibling token lists.
//!
//! The table ([`table::EditTable`]) is a Levenshtein recurrence that matches
//! on token kind alone. Backtracking from the bottom-right corner prefers,
//! in order: an insertion (left), a deletion (top), then the diagonal.
//! Matched containers are diffed recursively.
//!
//! ## Positions
//!
//! Every `pos` refers to the old sibling list as it was before any op was
//! applied. Ops are emitted from the end of the list toward the start, so
//! applying them in emission order with [`apply::apply`] never needs to
//! re-derive an index.

pub mod apply;
pub mod table;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::tokens::{Token, TokenKind};
pub use apply::apply;
use table::EditTable;

/// One instruction in an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all_fields = "camelCase")]
pub enum DiffOp {
    /// Same kind, different own fields. The whole token is replaced.
    Update { pos: usize, new_token: Token },
    /// Insert `token` before old index `pos`.
    Insert { pos: usize, token: Token },
    Delete { pos: usize },
    /// Different kind at a matched slot.
    Replace { pos: usize, new_token: Token },
    /// Own fields equal, children changed.
    SubtreeUpdate { pos: usize, ops: Vec<DiffOp> },
    /// Own fields and children changed.
    SubtreeAndTokenUpdate {
        pos: usize,
        ops: Vec<DiffOp>,
        new_token: Token,
    },
}

impl DiffOp {
    pub fn pos(&self) -> usize {
        match self {
            DiffOp::Update { pos, .. }
            | DiffOp::Insert { pos, .. }
            | DiffOp::Delete { pos }
            | DiffOp::Replace { pos, .. }
            | DiffOp::SubtreeUpdate { pos, .. }
            | DiffOp::SubtreeAndTokenUpdate { pos, .. } => *pos,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// Two tokens of the same kind disagree on having children. Token kinds
    /// have a fixed container-ness, so this is a bug upstream.
    #[error("container mismatch at position {pos}: {old:?} vs {new:?}")]
    ContainerMismatch {
        pos: usize,
        old: TokenKind,
        new: TokenKind,
    },

    #[error("diff position {pos} out of range for {len} siblings")]
    PositionOutOfRange { pos: usize, len: usize },

    #[error("{0:?} has no children to diff")]
    NotAContainer(TokenKind),
}

/// Diffs two Document roots (or any two containers) by their children.
pub fn diff_documents(old: &Token, new: &Token) -> Result<Vec<DiffOp>, DiffError> {
    let old_children = old
        .children()
        .ok_or(DiffError::NotAContainer(old.kind()))?;
    let new_children = new
        .children()
        .ok_or(DiffError::NotAContainer(new.kind()))?;
    diff(old_children, new_children)
}

/// Computes the edit script turning `old` into `new`.
pub fn diff(old: &[Token], new: &[Token]) -> Result<Vec<DiffOp>, DiffError> {
    let table = EditTable::build(old, new);
    let mut ops = vec![];

    let mut i = old.len();
    let mut j = new.len();

    while i + j > 0 {
        let cur = table.get(i, j);

        if j > 0 && table.get(i, j - 1) < cur {
            ops.push(DiffOp::Insert {
                pos: i,
                token: new[j - 1].clone(),
            });
            j -= 1;
        } else if i > 0 && table.get(i - 1, j) < cur {
            ops.push(DiffOp::Delete { pos: i - 1 });
            i -= 1;
        } else {
            // With i == 0 or j == 0 one of the branches above always fires.
            let pos = i - 1;
            let (src, dst) = (&old[i - 1], &new[j - 1]);

            if table.get(i - 1, j - 1) < cur {
                ops.push(DiffOp::Replace {
                    pos,
                    new_token: dst.clone(),
                });
            } else if let Some(op) = diff_matched(pos, src, dst)? {
                ops.push(op);
            }
            i -= 1;
            j -= 1;
        }
    }

    log::trace!(
        "diff {}x{} siblings: distance {}, {} ops",
        old.len(),
        new.len(),
        table.distance(),
        ops.len()
    );
    Ok(ops)
}

/// Classifies a pair of same-kind tokens matched on the diagonal.
fn diff_matched(pos: usize, src: &Token, dst: &Token) -> Result<Option<DiffOp>, DiffError> {
    let same_fields = src.same_fields(dst);

    let (src_children, dst_children) = match (src.children(), dst.children()) {
        (Some(a), Some(b)) => (a, b),
        (None, None) => {
            return Ok((!same_fields).then(|| DiffOp::Update {
                pos,
                new_token: dst.clone(),
            }));
        }
        _ => {
            return Err(DiffError::ContainerMismatch {
                pos,
                old: src.kind(),
                new: dst.kind(),
            });
        }
    };

    let ops = diff(src_children, dst_children)?;
    let op = match (ops.is_empty(), same_fields) {
        (true, true) => None,
        (true, false) => Some(DiffOp::Update {
            pos,
            new_token: dst.clone(),
        }),
        (false, true) => Some(DiffOp::SubtreeUpdate { pos, ops }),
        (false, false) => Some(DiffOp::SubtreeAndTokenUpdate {
            pos,
            ops,
            new_token: dst.clone(),
        }),
    };
    Ok(op)
}
