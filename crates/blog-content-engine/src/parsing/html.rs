use scraper::{ElementRef, Html, Node};

use crate::models::ContentBlock;

use super::{
    builder::BlockBuilder,
    chunk::{ChunkStrategy, FixedWidthChunker},
};

/// Elements stored as their own block(s). Everything else is inline.
const BLOCK_TAGS: [&str; 12] = [
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "pre",
    "ul",
    "ol",
    "div",
];

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Converts editor HTML into ordered TEXT and IMAGE blocks.
///
/// Image-free block elements are kept as serialized HTML. Block elements holding
/// an `<img>` are broken up: each image becomes an IMAGE block and each text
/// node a plain TEXT block, in document order. The result is never empty: a
/// document without content yields a single empty TEXT block.
pub fn html_to_blocks(html: &str) -> Vec<ContentBlock> {
    html_to_blocks_with(html, &FixedWidthChunker::default())
}

/// [`html_to_blocks`] with an explicit chunk strategy.
pub fn html_to_blocks_with(html: &str, chunker: &dyn ChunkStrategy) -> Vec<ContentBlock> {
    let document = Html::parse_fragment(html);
    let mut builder = BlockBuilder::new(chunker);

    visit_children(document.root_element(), &mut builder);

    if builder.is_empty() {
        builder.push_placeholder();
    }

    let blocks = builder.finish();
    log::debug!("html normalized into {} block(s)", blocks.len());
    blocks
}

fn visit_children(parent: ElementRef<'_>, out: &mut BlockBuilder<'_>) {
    for child in parent.children() {
        match child.value() {
            Node::Text(text) => {
                // Only reachable for text outside image-free blocks: inside an
                // image block, or stray text at the top level of the fragment.
                let content: &str = &text.text;
                out.push_trimmed_text(content);
            }
            Node::Element(element) => {
                let Some(element_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                if element.name() == "img" {
                    if let Some(src) = element.attr("src").filter(|src| !src.is_empty()) {
                        out.push_image(src);
                    }
                    continue;
                }
                if is_block_tag(element.name()) && !contains_image(element_ref) {
                    push_block(element_ref, out);
                } else {
                    visit_children(element_ref, out);
                }
            }
            _ => {}
        }
    }
}

fn push_block(block: ElementRef<'_>, out: &mut BlockBuilder<'_>) {
    let text: String = block.text().collect();
    if !text.trim().is_empty() {
        out.push_text(&block.html());
    }
}

fn contains_image(element: ElementRef<'_>) -> bool {
    element
        .descendants()
        .any(|node| matches!(node.value(), Node::Element(e) if e.name() == "img"))
}
