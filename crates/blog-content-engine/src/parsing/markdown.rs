use std::sync::OnceLock;

use regex::Regex;

use crate::models::ContentBlock;

use super::{
    builder::BlockBuilder,
    chunk::{ChunkStrategy, FixedWidthChunker},
};

/// Matches `![alt](url)`; capture 1 is the alt text, capture 2 the URL.
fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX
        .get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid image regex"))
}

/// Converts Markdown source into ordered TEXT and IMAGE blocks.
///
/// Text between images is trimmed and chunked; alt text is discarded.
/// Whitespace-only input yields no blocks at all.
pub fn markdown_to_blocks(text: &str) -> Vec<ContentBlock> {
    markdown_to_blocks_with(text, &FixedWidthChunker::default())
}

/// [`markdown_to_blocks`] with an explicit chunk strategy.
pub fn markdown_to_blocks_with(text: &str, chunker: &dyn ChunkStrategy) -> Vec<ContentBlock> {
    let mut builder = BlockBuilder::new(chunker);
    let mut last_end = 0;
    let mut images = 0;

    for caps in image_regex().captures_iter(text) {
        let (Some(full), Some(url)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        builder.push_trimmed_text(&text[last_end..full.start()]);
        builder.push_image(url.as_str());
        last_end = full.end();
        images += 1;
    }
    builder.push_trimmed_text(&text[last_end..]);

    if images == 0 && builder.is_empty() {
        builder.push_trimmed_text(text);
    }

    let blocks = builder.finish();
    log::debug!(
        "markdown normalized into {} block(s), {images} image(s)",
        blocks.len()
    );
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_image_text() {
        let blocks = markdown_to_blocks("Some text\n\n![alt](https://x/y.jpg)\n\nMore text");

        assert_eq!(
            blocks,
            vec![
                ContentBlock::text(1, "Some text"),
                ContentBlock::image(2, "https://x/y.jpg"),
                ContentBlock::text(3, "More text"),
            ]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_no_blocks() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("   \n\n ").is_empty());
    }

    #[test]
    fn adjacent_images_produce_no_empty_text_between() {
        let blocks = markdown_to_blocks("![a](one.png)\n![b](two.png)");
        assert_eq!(
            blocks,
            vec![ContentBlock::image(1, "one.png"), ContentBlock::image(2, "two.png")]
        );
    }

    #[test]
    fn long_text_is_chunked_with_consecutive_orders() {
        let text = format!("{}![x](pic.png)", "a".repeat(300));
        let blocks = markdown_to_blocks(&text);

        let summary: Vec<(u32, ContentKind, usize)> = blocks
            .iter()
            .map(|b| (b.order, b.kind, b.content.chars().count()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, ContentKind::Text, 255),
                (2, ContentKind::Text, 45),
                (3, ContentKind::Image, 7),
            ]
        );
    }

    #[test]
    fn text_only_markdown_keeps_inline_syntax() {
        let blocks = markdown_to_blocks("  # Heading\n\n**bold** and [link](https://a.b)  ");
        assert_eq!(
            blocks,
            vec![ContentBlock::text(
                1,
                "# Heading\n\n**bold** and [link](https://a.b)"
            )]
        );
    }

    #[test]
    fn links_are_not_images() {
        let blocks = markdown_to_blocks("[not an image](https://a.b/c.png)");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, ContentKind::Text);
    }

    #[test]
    fn empty_alt_text_is_accepted() {
        let blocks = markdown_to_blocks("![](https://x/y.jpg)");
        insta::assert_debug_snapshot!(blocks, @r#"
        [
            ContentBlock {
                order: 1,
                content: "https://x/y.jpg",
                kind: Image,
            },
        ]
        "#);
    }
}
