// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_post(sections: usize) -> String {
    let base = "## Section\n\nParagraph with some **bold** content and a [link](https://example.com).\n\n![photo](https://cdn.example.com/photo.jpg)\n\n- Bullet point\n- Another item\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_html_post(sections: usize) -> String {
    let base = "<h2>Section</h2><p>Paragraph with some <strong>bold</strong> content.</p><p>Caption<img src=\"https://cdn.example.com/photo.jpg\"></p><ul><li>Bullet point</li><li>Another item</li></ul>";
    base.repeat(sections)
}
