use super::kinds::{BlockQuote, Header, HeaderSig, ListMarker, Rule};

/// A block opener detected at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    Header(HeaderSig),
    Rule { raw: String },
    ListItem(ListMarker),
    Blockquote { depth: usize, prefix_len: usize },
}

/// Detects the block kind for the line at the start of `rest`.
///
/// `None` means paragraph. Every opener is a pure lookahead: nothing is
/// consumed here.
pub fn try_open_block(rest: &str) -> Option<BlockOpen> {
    // Precedence: header, then rule (so `- - -` is not a list), then list.
    if let Some(sig) = Header::sig(rest) {
        return Some(BlockOpen::Header(sig));
    }
    if let Some(raw) = Rule::sig(rest) {
        return Some(BlockOpen::Rule {
            raw: raw.to_string(),
        });
    }
    if let Some(marker) = ListMarker::sig(rest) {
        return Some(BlockOpen::ListItem(marker));
    }
    match BlockQuote::strip_prefixes(rest) {
        (0, _) => None,
        (depth, prefix_len) => Some(BlockOpen::Blockquote { depth, prefix_len }),
    }
}
