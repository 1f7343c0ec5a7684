/// The marker that opens a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// `-` or `*`
    Bullet(char),
    /// Digits followed by `.`, stored verbatim (`"12."`).
    Ordered(String),
}

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const ORDERED_SUFFIX: char = '.';

    /// Detects a list item marker followed by a space at the start of `rest`.
    pub fn sig(rest: &str) -> Option<ListMarker> {
        let mut chars = rest.chars();
        let first = chars.next()?;

        if Self::BULLETS.contains(&first) {
            return (chars.next() == Some(' ')).then_some(ListMarker::Bullet(first));
        }

        let digits = rest.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let mut tail = rest[digits..].chars();
        if tail.next() == Some(Self::ORDERED_SUFFIX) && tail.next() == Some(' ') {
            Some(ListMarker::Ordered(rest[..=digits].to_string()))
        } else {
            None
        }
    }

    /// Whether an item with marker `next` belongs to the same list.
    ///
    /// Ordered items continue ordered lists regardless of number; bullets
    /// must repeat the same character.
    pub fn continues(&self, next: &ListMarker) -> bool {
        match (self, next) {
            (ListMarker::Bullet(a), ListMarker::Bullet(b)) => a == b,
            (ListMarker::Ordered(_), ListMarker::Ordered(_)) => true,
            _ => false,
        }
    }

    pub fn text(&self) -> String {
        match self {
            ListMarker::Bullet(c) => c.to_string(),
            ListMarker::Ordered(s) => s.clone(),
        }
    }

    /// Characters the opener occupies, including the following space.
    pub fn prefix_len(&self) -> usize {
        match self {
            ListMarker::Bullet(_) => 2,
            ListMarker::Ordered(s) => s.len() + 1,
        }
    }
}
