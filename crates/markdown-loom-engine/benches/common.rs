// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another item\n\n> quoted [link](https://example.com)\n\n---\n![image](https://example.com/a.png)\n\n";
    base.repeat(size)
}

/// The same document with one character changed in the middle.
#[allow(dead_code)]
pub fn with_edit_in_middle(content: &str) -> String {
    let mid = content.len() / 2;
    let at = (mid..content.len())
        .find(|&i| content.is_char_boundary(i))
        .unwrap_or(content.len());
    let mut edited = content.to_string();
    edited.insert(at, '*');
    edited
}
