/// Delimiters shared by links `[text](dest)` and images `![alt](url)`.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const DEST_OPEN: char = '(';
    pub const DEST_CLOSE: char = ')';
}

/// Images are links prefixed with a bang.
pub struct Image;

impl Image {
    pub const BANG: char = '!';
}
