/// Blockquote prefix rules.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Measures the `>` run at the start of a line as `(depth, prefix_len)`.
    ///
    /// Spaces may separate the markers (`> > x`), and one space after each
    /// `>` is part of the prefix. The prefix is ASCII, so `prefix_len` is
    /// both a byte and a char count. A line not starting with `>` gives
    /// `(0, 0)`.
    pub fn strip_prefixes(line: &str) -> (usize, usize) {
        if !line.starts_with(Self::PREFIX) {
            return (0, 0);
        }

        let mut depth = 0;
        let mut prefix_len = 0;
        let mut rest = line;
        loop {
            let gap = rest.len() - rest.trim_start_matches(' ').len();
            let Some(after) = rest[gap..].strip_prefix(Self::PREFIX) else {
                break;
            };
            depth += 1;
            prefix_len += gap + 1;
            rest = match after.strip_prefix(' ') {
                Some(tail) => {
                    prefix_len += 1;
                    tail
                }
                None => after,
            };
        }
        (depth, prefix_len)
    }
}
