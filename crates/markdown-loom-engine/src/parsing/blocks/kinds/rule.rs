/// Thematic break (`---`, `***`, `___`).
pub struct Rule;

impl Rule {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    /// Returns the verbatim line text if the line at the start of `rest`
    /// is a rule.
    ///
    /// The line must start with a marker and contain only that marker and
    /// spaces, with at least three markers.
    pub fn sig(rest: &str) -> Option<&str> {
        let line = rest.split('\n').next().unwrap_or_default();
        let first = line.chars().next().filter(|c| Self::MARKERS.contains(c))?;

        let mut markers = 0;
        for c in line.chars() {
            match c {
                ' ' => {}
                c if c == first => markers += 1,
                _ => return None,
            }
        }

        (markers >= Self::MIN_MARKERS).then_some(line)
    }
}
