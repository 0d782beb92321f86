use crate::models::{ContentBlock, ContentKind};

use super::chunk::ChunkStrategy;

/// Accumulates blocks for one normalization pass and numbers them.
///
/// `order` starts at 1 for every builder and increases by one per emitted block,
/// including each chunk of a split text.
pub struct BlockBuilder<'a> {
    chunker: &'a dyn ChunkStrategy,
    out: Vec<ContentBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(chunker: &'a dyn ChunkStrategy) -> Self {
        Self {
            chunker,
            out: vec![],
        }
    }

    /// Chunks `text` as-is into TEXT blocks. Empty text emits nothing.
    pub fn push_text(&mut self, text: &str) {
        for chunk in self.chunker.split(text) {
            self.emit(ContentKind::Text, chunk);
        }
    }

    /// Trims `text` and chunks it into TEXT blocks unless nothing is left.
    pub fn push_trimmed_text(&mut self, text: &str) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            self.push_text(trimmed);
        }
    }

    /// Emits a single IMAGE block. URLs are never chunked.
    pub fn push_image(&mut self, url: &str) {
        self.emit(ContentKind::Image, url.to_string());
    }

    /// Emits one TEXT block with empty content.
    pub fn push_placeholder(&mut self) {
        self.emit(ContentKind::Text, String::new());
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn finish(self) -> Vec<ContentBlock> {
        self.out
    }

    fn emit(&mut self, kind: ContentKind, content: String) {
        let order = self.out.len() as u32 + 1;
        self.out.push(ContentBlock::new(order, kind, content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::chunk::FixedWidthChunker;
    use pretty_assertions::assert_eq;

    #[test]
    fn orders_are_dense_across_chunks_and_images() {
        let chunker = FixedWidthChunker::new(3);
        let mut builder = BlockBuilder::new(&chunker);
        builder.push_text("abcdef");
        builder.push_image("https://x/y.png");
        builder.push_trimmed_text("  gh  ");

        assert_eq!(
            builder.finish(),
            vec![
                ContentBlock::text(1, "abc"),
                ContentBlock::text(2, "def"),
                ContentBlock::image(3, "https://x/y.png"),
                ContentBlock::text(4, "gh"),
            ]
        );
    }

    #[test]
    fn whitespace_only_text_emits_nothing() {
        let chunker = FixedWidthChunker::default();
        let mut builder = BlockBuilder::new(&chunker);
        builder.push_trimmed_text(" \n\t ");
        assert!(builder.is_empty());
    }
}
