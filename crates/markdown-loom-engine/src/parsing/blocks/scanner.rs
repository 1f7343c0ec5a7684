use crate::parsing::{
    cursor::CharCursor,
    inline::scan_inline,
    range::{Position, Range},
    tokens::Token,
};

use super::{
    kinds::ListMarker,
    open::{BlockOpen, try_open_block},
};

/// Scans block tokens until end of input.
///
/// Each iteration starts at the beginning of a line, or at a `\n`. A `\n`
/// becomes a [`Token::NewLine`] only when it starts a blank line or ends
/// the buffer; otherwise it just separates two block lines.
pub fn scan_blocks(cur: &mut CharCursor<'_>) -> Vec<Token> {
    let mut out = vec![];

    while !cur.eof() {
        let start = cur.pos();

        if cur.bump_if('\n') {
            if cur.at_line_end() {
                out.push(Token::NewLine {
                    range: Range::on_line(start.line, start.col, start.col + 1),
                });
            }
            continue;
        }

        let token = match try_open_block(cur.rest()) {
            Some(BlockOpen::Header(sig)) => {
                cur.bump_n(sig.prefix_len());
                let tokens = scan_inline(cur);
                Token::Header {
                    range: Range::new(start, cur.pos()),
                    tokens,
                    level: sig.level,
                    has_after_space: sig.has_after_space,
                }
            }
            Some(BlockOpen::Rule { raw }) => {
                cur.bump_n(raw.chars().count());
                Token::Rule {
                    range: Range::new(start, cur.pos()),
                    raw,
                }
            }
            Some(BlockOpen::ListItem(marker)) => scan_list(cur, marker),
            Some(BlockOpen::Blockquote { depth, prefix_len }) => {
                cur.bump_n(prefix_len);
                let tokens = scan_inline(cur);
                Token::Blockquote {
                    range: Range::new(start, cur.pos()),
                    tokens,
                    nested_level: depth,
                }
            }
            None => {
                let tokens = scan_inline(cur);
                Token::Paragraph {
                    range: Range::new(start, cur.pos()),
                    tokens,
                }
            }
        };
        out.push(token);
    }

    out
}

/// Scans consecutive list items that share the first item's marker family.
///
/// The `\n` between two items is consumed here; the one after the last item
/// is left to the block loop.
fn scan_list(cur: &mut CharCursor<'_>, first: ListMarker) -> Token {
    let list_start = cur.pos();
    let mut items = vec![];
    let mut marker = first.clone();

    loop {
        items.push(scan_list_item(cur, &marker));

        let Some(next) = next_item_marker(cur, &first) else {
            break;
        };
        cur.bump();
        marker = next;
    }

    Token::List {
        range: Range::new(list_start, cur.pos()),
        tokens: items,
    }
}

fn scan_list_item(cur: &mut CharCursor<'_>, marker: &ListMarker) -> Token {
    let start = cur.pos();
    cur.bump_n(marker.prefix_len());
    let tokens = scan_inline(cur);
    Token::ListItem {
        range: Range::new(start, cur.pos()),
        marker: marker.text(),
        tokens,
    }
}

/// Looks past the `\n` under the cursor for an item continuing the list.
fn next_item_marker(cur: &CharCursor<'_>, first: &ListMarker) -> Option<ListMarker> {
    let next_line = cur.rest().strip_prefix('\n')?;
    match try_open_block(next_line) {
        Some(BlockOpen::ListItem(next)) if first.continues(&next) => Some(next),
        _ => None,
    }
}

/// Scans the whole buffer into a [`Token::Document`].
pub fn scan_document(buffer: &str) -> Token {
    let mut cur = CharCursor::new(buffer);
    let tokens = scan_blocks(&mut cur);
    Token::Document {
        range: Range::new(Position::default(), cur.pos()),
        tokens,
    }
}
