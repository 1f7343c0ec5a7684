use crate::parsing::{
    cursor::CharCursor,
    range::{Position, Range},
    tokens::Token,
};

use super::kinds::{CodeSpan, Emphasis, Image, Link};

/// Decides whether a just-consumed character closes the enclosing span.
/// Receives the character and the one after it.
type Closer = fn(char, Option<char>) -> bool;

/// Scans inline tokens from the cursor up to the end of the current line.
///
/// Stops before a `\n` (which is left for the block scanner) or at end of
/// input. Never fails: unterminated spans come back with `was_closed: false`.
pub fn scan_inline(cur: &mut CharCursor<'_>) -> Vec<Token> {
    scan_until(cur, None).0
}

/// Scans inline tokens until `closer` fires or the line ends.
///
/// Returns the tokens and whether the closer fired. The closing character
/// has been consumed when it does.
fn scan_until(cur: &mut CharCursor<'_>, closer: Option<Closer>) -> (Vec<Token>, bool) {
    let mut out = vec![];

    while !cur.at_line_end() {
        let start = cur.pos();
        let Some(c) = cur.bump() else { break };

        if let Some(closes) = closer
            && closes(c, cur.peek())
        {
            return (out, true);
        }

        match c {
            CodeSpan::TICK => out.push(code_span(cur, start)),
            Emphasis::MARKER => {
                if cur.bump_if(Emphasis::MARKER) {
                    out.push(bold(cur, start));
                } else {
                    out.push(italic(cur, start));
                }
            }
            Link::OPEN => out.push(link(cur, start)),
            Image::BANG if cur.bump_if(Link::OPEN) => out.push(image(cur, start)),
            _ => push_text(&mut out, c, start, cur.pos()),
        }
    }

    (out, false)
}

/// Appends `c` to a trailing Text token, or starts a new one.
fn push_text(out: &mut Vec<Token>, c: char, start: Position, end: Position) {
    if let Some(Token::Text { range, text }) = out.last_mut() {
        range.end = end;
        text.push(c);
    } else {
        out.push(Token::Text {
            range: Range::new(start, end),
            text: c.to_string(),
        });
    }
}

fn code_span(cur: &mut CharCursor<'_>, start: Position) -> Token {
    let mut content = String::new();
    let mut was_closed = false;

    while !cur.at_line_end() {
        let Some(c) = cur.bump() else { break };
        if c == CodeSpan::TICK {
            was_closed = true;
            break;
        }
        content.push(c);
    }

    Token::Code {
        range: Range::new(start, cur.pos()),
        content,
        was_closed,
    }
}

fn bold(cur: &mut CharCursor<'_>, start: Position) -> Token {
    let (tokens, was_closed) = scan_until(cur, Some(Emphasis::closes_bold));
    // the closer only consumed the first `*` of the pair
    if was_closed {
        cur.bump_if(Emphasis::MARKER);
    }

    Token::Bold {
        range: Range::new(start, cur.pos()),
        tokens,
        was_closed,
    }
}

fn italic(cur: &mut CharCursor<'_>, start: Position) -> Token {
    let (tokens, was_closed) = scan_until(cur, Some(Emphasis::closes_italic));

    Token::Italic {
        range: Range::new(start, cur.pos()),
        tokens,
        was_closed,
    }
}

/// Consumes characters into `raw` until `close` (inclusive) or line end.
/// Returns the text before `close` and whether `close` was found.
fn take_until(cur: &mut CharCursor<'_>, close: char, raw: &mut String) -> (String, bool) {
    let mut taken = String::new();

    while !cur.at_line_end() {
        let Some(c) = cur.bump() else { break };
        raw.push(c);
        if c == close {
            return (taken, true);
        }
        taken.push(c);
    }

    (taken, false)
}

/// Parses the `text](dest)` tail shared by links and images.
/// Returns `(text, dest, was_closed)`; `raw` collects everything consumed.
fn link_parts(cur: &mut CharCursor<'_>, raw: &mut String) -> (String, Option<String>, bool) {
    let (text, _) = take_until(cur, Link::CLOSE, raw);

    let mut dest = String::new();
    let mut was_closed = false;
    if cur.bump_if(Link::DEST_OPEN) {
        raw.push(Link::DEST_OPEN);
        (dest, was_closed) = take_until(cur, Link::DEST_CLOSE, raw);
    }

    let dest = (!dest.is_empty()).then_some(dest);
    (text, dest, was_closed)
}

fn link(cur: &mut CharCursor<'_>, start: Position) -> Token {
    let mut raw = Link::OPEN.to_string();
    let (text, dest, was_closed) = link_parts(cur, &mut raw);

    Token::Link {
        range: Range::new(start, cur.pos()),
        text,
        dest,
        raw,
        was_closed,
    }
}

fn image(cur: &mut CharCursor<'_>, start: Position) -> Token {
    let mut raw = String::from(Image::BANG);
    raw.push(Link::OPEN);
    let (alt_text, url, was_closed) = link_parts(cur, &mut raw);

    Token::Image {
        range: Range::new(start, cur.pos()),
        alt_text,
        url,
        raw,
        was_closed,
    }
}
