/// ATX header block type with owned delimiter constants.
pub struct Header;

/// What a header opener looks like, before anything is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSig {
    pub level: u8,
    /// False only for a bare `#` run at end of input.
    pub has_after_space: bool,
}

impl HeaderSig {
    /// Characters the opener occupies: the `#` run plus the space, if any.
    pub fn prefix_len(self) -> usize {
        usize::from(self.level) + usize::from(self.has_after_space)
    }
}

impl Header {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Detects a header at the start of `rest`.
    ///
    /// The `#` run must be 1..=6 long and be followed by a space or the end
    /// of input. Anything else is left for the paragraph fallback.
    pub fn sig(rest: &str) -> Option<HeaderSig> {
        let run = rest.chars().take_while(|&c| c == Self::MARKER).count();
        let level = u8::try_from(run).ok().filter(|l| (1..=Self::MAX_LEVEL).contains(l))?;

        match rest[run..].chars().next() {
            Some(' ') => Some(HeaderSig {
                level,
                has_after_space: true,
            }),
            None => Some(HeaderSig {
                level,
                has_after_space: false,
            }),
            Some(_) => None,
        }
    }
}
