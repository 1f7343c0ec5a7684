use super::range::Position;

/// A cursor for character-by-character scanning with line/column tracking.
///
/// Every consumed character advances the running counters; a `\n` moves to
/// the next line and resets the column. Positions are never derived from
/// byte offsets.
#[derive(Clone)]
pub struct CharCursor<'a> {
    /// The buffer being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
    line: usize,
    col: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            line: 0,
            col: 0,
        }
    }

    /// Returns the position of the next unconsumed character.
    pub fn pos(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// True at end of input or right before a `\n`.
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some('\n'))
    }

    /// The unconsumed remainder of the buffer.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peeks `n` characters ahead (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Advances by up to `n` characters.
    pub fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consumes the next character only if it is `c`.
    pub fn bump_if(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }
}
