/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: nothing inside them is scanned for other
/// inline constructs.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that opens and closes code spans.
    pub const TICK: char = '`';
}
