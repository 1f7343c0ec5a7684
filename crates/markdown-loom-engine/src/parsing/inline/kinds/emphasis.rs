/// Bold and italic spans share the `*` marker.
///
/// `**` opens bold, a single `*` opens italic.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: char = '*';

    /// Bold ends at the first `**` seen by its own scan level.
    pub fn closes_bold(c: char, next: Option<char>) -> bool {
        c == Self::MARKER && next == Some(Self::MARKER)
    }

    pub fn closes_italic(c: char, _next: Option<char>) -> bool {
        c == Self::MARKER
    }
}
