//! Edit scripts for `loom replay`.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped. Positions are zero-based.
//!
//! ```text
//! type hello world      one InsertChar per character
//! paste a\nb            `\n`, `\t` and `\\` escapes
//! newline | backspace | word-backspace | tab
//! left | right | up | down
//! goto 2 4              line col
//! select 0 1 2 3        start line/col, end line/col
//! delete-selection
//! undo | redo
//! ```

use anyhow::{Context, Result, anyhow, bail};
use markdown_loom_engine::{Cmd, Position};

pub fn parse_script(src: &str) -> Result<Vec<Cmd>> {
    let mut cmds = vec![];
    for (n, line) in src.lines().enumerate() {
        let parsed = parse_line(line).with_context(|| format!("script line {}: {line:?}", n + 1))?;
        cmds.extend(parsed);
    }
    Ok(cmds)
}

fn parse_line(line: &str) -> Result<Vec<Cmd>> {
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(vec![]);
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let cmd = match word {
        "type" => return Ok(rest.chars().map(Cmd::InsertChar).collect()),
        "paste" => Cmd::Paste(unescape(rest)?),
        "newline" => Cmd::InsertNewline,
        "backspace" => Cmd::DeleteBackward,
        "word-backspace" => Cmd::DeleteWordBackward,
        "tab" => Cmd::InsertTab,
        "left" => Cmd::MoveLeft,
        "right" => Cmd::MoveRight,
        "up" => Cmd::MoveUp,
        "down" => Cmd::MoveDown,
        "goto" => match numbers(rest)?.as_slice() {
            [line, col] => Cmd::SetPosition(Position::new(*line, *col)),
            _ => bail!("goto takes a line and a column"),
        },
        "select" => match numbers(rest)?.as_slice() {
            [sl, sc, el, ec] => Cmd::Select {
                start: Position::new(*sl, *sc),
                end: Position::new(*el, *ec),
            },
            _ => bail!("select takes two line/column pairs"),
        },
        "delete-selection" => Cmd::DeleteSelection,
        "undo" => Cmd::Undo,
        "redo" => Cmd::Redo,
        other => bail!("unknown command {other:?}"),
    };
    Ok(vec![cmd])
}

fn numbers(s: &str) -> Result<Vec<usize>> {
    s.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("not a number: {n:?}")))
        .collect()
}

fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(anyhow!("unknown escape \\{other}")),
            None => bail!("dangling backslash"),
        }
    }
    Ok(out)
}
