use std::fmt::Write;

use crate::parsing::{range::Range, tokens::Token};

/// Renders a token tree as one line per token, indented by depth.
///
/// ```text
/// Document 0:0-0:8
///   Header 0:0-0:8 level=2 space=true
///     Text 0:3-0:8 "hello"
/// ```
pub fn outline(root: &Token) -> String {
    let mut out = String::new();
    write_token(&mut out, root, 0);
    out
}

fn span(r: Range) -> String {
    format!(
        "{}:{}-{}:{}",
        r.start.line, r.start.col, r.end.line, r.end.col
    )
}

fn closed(was_closed: bool) -> &'static str {
    if was_closed { "" } else { " unclosed" }
}

fn write_token(out: &mut String, token: &Token, depth: usize) {
    let pad = "  ".repeat(depth);
    let kind = format!("{:?}", token.kind());
    let at = span(token.range());

    let detail = match token {
        Token::Text { text, .. } => format!(" {text:?}"),
        Token::Code {
            content,
            was_closed,
            ..
        } => format!(" {content:?}{}", closed(*was_closed)),
        Token::Bold { was_closed, .. } | Token::Italic { was_closed, .. } => {
            closed(*was_closed).to_string()
        }
        Token::Header {
            level,
            has_after_space,
            ..
        } => format!(" level={level} space={has_after_space}"),
        Token::Link {
            text,
            dest,
            was_closed,
            ..
        } => format!(" {text:?} -> {dest:?}{}", closed(*was_closed)),
        Token::Image {
            alt_text,
            url,
            was_closed,
            ..
        } => format!(" {alt_text:?} -> {url:?}{}", closed(*was_closed)),
        Token::Rule { raw, .. } => format!(" {raw:?}"),
        Token::Blockquote { nested_level, .. } => format!(" level={nested_level}"),
        Token::ListItem { marker, .. } => format!(" {marker:?}"),
        Token::Document { .. }
        | Token::Paragraph { .. }
        | Token::NewLine { .. }
        | Token::List { .. } => String::new(),
    };

    // writing to a String cannot fail
    let _ = writeln!(out, "{pad}{kind} {at}{detail}");

    for child in token.children().unwrap_or_default() {
        write_token(out, child, depth + 1);
    }
}
