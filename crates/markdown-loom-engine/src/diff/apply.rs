use crate::parsing::tokens::Token;

use super::{DiffError, DiffOp};

/// Applies an edit script to `siblings`, in order.
///
/// Positions are taken as emitted; they are not re-derived after each op.
/// This is only correct for scripts produced by [`diff`](super::diff),
/// whose ops run from the end of the list toward the start.
pub fn apply(siblings: &mut Vec<Token>, ops: &[DiffOp]) -> Result<(), DiffError> {
    for op in ops {
        let len = siblings.len();
        let out_of_range = DiffError::PositionOutOfRange { pos: op.pos(), len };

        match op {
            DiffOp::Insert { pos, token } => {
                if *pos > len {
                    return Err(out_of_range);
                }
                siblings.insert(*pos, token.clone());
            }
            DiffOp::Delete { pos } => {
                if *pos >= len {
                    return Err(out_of_range);
                }
                siblings.remove(*pos);
            }
            DiffOp::Update { pos, new_token } | DiffOp::Replace { pos, new_token } => {
                let slot = siblings.get_mut(*pos).ok_or(out_of_range)?;
                *slot = new_token.clone();
            }
            DiffOp::SubtreeUpdate { pos, ops } => {
                let slot = siblings.get_mut(*pos).ok_or(out_of_range)?;
                let kind = slot.kind();
                let children = slot.children_mut().ok_or(DiffError::NotAContainer(kind))?;
                apply(children, ops)?;
            }
            DiffOp::SubtreeAndTokenUpdate {
                pos,
                ops,
                new_token,
            } => {
                let slot = siblings.get_mut(*pos).ok_or(out_of_range)?;
                let kind = slot.kind();
                let mut children =
                    std::mem::take(slot.children_mut().ok_or(DiffError::NotAContainer(kind))?);
                apply(&mut children, ops)?;

                // own fields come from the new token, children from the patch
                *slot = new_token.clone();
                if let Some(dst) = slot.children_mut() {
                    *dst = children;
                }
            }
        }
    }
    Ok(())
}
